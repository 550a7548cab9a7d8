//! Catalog browsing commands.

use anyhow::{bail, Result};
use eco_commerce::catalog::{product_alternatives, Product};
use eco_commerce::search::{Filter, SearchQuery};
use eco_commerce::{Money, ProductId};
use serde_json::json;

use super::{ProductArgs, ProductsArgs};
use crate::context::Context;
use crate::output::{format_co2, stars};

/// Run the products command.
pub fn products(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let session = ctx.session()?;
    let query = build_query(&args, ctx)?;
    let results = query.run(session.state.products.products());

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    match &query.query {
        Some(q) => ctx.output.header(&format!("Results for \"{}\"", q)),
        None => ctx.output.header("Products"),
    }

    if results.is_empty() {
        ctx.output.info("No products match your filters.");
        return Ok(());
    }

    print_product_table(&results.items, ctx);

    let page = &results.pagination;
    ctx.output.info(&format!(
        "Showing {}-{} of {} (page {}/{}, sorted by {})",
        page.start_item(),
        page.end_item(),
        page.total,
        page.page,
        page.total_pages,
        query.sort.display_name()
    ));

    for facet in &results.facets {
        let values: Vec<String> = facet
            .values
            .iter()
            .map(|v| format!("{} ({})", v.value, v.count))
            .collect();
        ctx.output.kv(&facet.name, &values.join(", "));
    }

    Ok(())
}

/// Run the product command.
pub fn product(args: ProductArgs, ctx: &Context) -> Result<()> {
    let session = ctx.session()?;
    let catalog = &session.state.products;
    let product = catalog.require(&ProductId::new(args.id))?;
    let alternatives = product_alternatives(catalog.products(), product, args.alternatives);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "product": product,
            "alternatives": alternatives,
        }));
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("ID", &product.id.to_string());
    ctx.output.kv("Brand", &product.brand);
    ctx.output.kv("Category", product.category.display_name());
    ctx.output.kv("Price", &product.price.display());
    ctx.output.kv("Carbon", &eco_label(product));
    ctx.output.kv("Rating", &format!("{} ({} reviews)", stars(product.rating), product.reviews.len()));
    ctx.output.kv("Stock", &stock_label(product));
    if product.has_free_delivery() {
        ctx.output.kv("Delivery", "Free");
    } else {
        ctx.output.kv("Delivery", &format!("{} per unit", product.delivery_charge.display()));
    }
    if !product.colors.is_empty() {
        ctx.output.kv("Colors", &product.colors.join(", "));
    }
    if let Some(sizes) = &product.sizes {
        ctx.output.kv("Sizes", &sizes.join(", "));
    }
    ctx.output.info(&product.description);

    if !product.reviews.is_empty() {
        ctx.output.header("Reviews");
        for review in &product.reviews {
            ctx.output.list_item(&format!(
                "{} by {}: {}",
                stars(f64::from(review.rating)),
                review.user_name,
                review.comment
            ));
        }
    }

    if alternatives.is_empty() {
        return Ok(());
    }
    ctx.output.header("Greener alternatives");
    for alt in alternatives {
        let saving = product.co2_kg - alt.co2_kg;
        ctx.output.list_item(&format!(
            "[{}] {} - {} - {} (saves {})",
            alt.id,
            alt.name,
            alt.price.display(),
            format_co2(alt.co2_kg),
            format_co2(saving)
        ));
    }

    Ok(())
}

fn build_query(args: &ProductsArgs, ctx: &Context) -> Result<SearchQuery> {
    let currency = ctx.currency();
    let min = args.min_price.unwrap_or(0);
    let max = args.max_price.unwrap_or(ctx.config.search.max_price);
    if min > max {
        bail!("--min-price {} is above --max-price {}", min, max);
    }

    let sort = match args.sort {
        Some(sort) => sort,
        None => ctx.config.default_sort()?,
    };

    let mut query = SearchQuery::new()
        .with_filter(Filter::price_range(
            Some(Money::from_whole(min, currency)),
            Some(Money::from_whole(max, currency)),
        ))
        .with_sort(sort)
        .with_pagination(args.page, args.per_page.unwrap_or(ctx.config.storefront.per_page));

    if let Some(q) = &args.query {
        query = query.with_query(q.as_str());
    }
    if let Some(category) = args.category {
        query = query.with_filter(Filter::category(category));
    }
    if let Some(brand) = &args.brand {
        query = query.with_filter(Filter::brand(brand.as_str()));
    }
    if let Some(color) = &args.color {
        query = query.with_filter(Filter::color(color.as_str()));
    }
    if args.in_stock {
        query = query.with_filter(Filter::in_stock());
    }
    if args.eco_star {
        query = query.with_filter(Filter::EcoStar);
    }
    if args.facets {
        query = query.with_facets();
    }

    Ok(query)
}

fn print_product_table(products: &[&Product], ctx: &Context) {
    let widths = [4, 32, 10, 8, 14, 8];
    println!();
    ctx.output
        .table_row(&["ID", "Name", "Price", "CO2", "Stock", "Eco Star"], &widths);
    for p in products {
        let id = p.id.to_string();
        let price = p.price.display();
        let co2 = format_co2(p.co2_kg);
        let stock = stock_label(p);
        let eco = if p.is_eco_star() { "yes" } else { "" };
        ctx.output.table_row(
            &[id.as_str(), p.name.as_str(), price.as_str(), co2.as_str(), stock.as_str(), eco],
            &widths,
        );
    }
    println!();
}

/// Carbon with the Eco Star mark, e.g. "0.8 kg (Eco Star)".
pub(super) fn eco_label(product: &Product) -> String {
    if product.is_eco_star() {
        format!("{} (Eco Star)", format_co2(product.co2_kg))
    } else {
        format_co2(product.co2_kg)
    }
}

pub(super) fn stock_label(product: &Product) -> String {
    if product.is_out_of_stock() {
        "Out of stock".to_string()
    } else if product.is_low_stock() {
        format!("Only {} left", product.stock)
    } else {
        format!("{} in stock", product.stock)
    }
}
