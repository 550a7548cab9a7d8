//! Admin panel commands.

use anyhow::Result;
use eco_commerce::catalog::{all_reviews, ProductDraft};
use eco_commerce::checkout::OrderStatus;
use eco_commerce::insights::AdminStats;
use eco_commerce::{Money, OrderId, ProductId};

use super::orders::print_order_line;
use super::{AddProductArgs, AdminArgs, AdminCommand};
use crate::context::{Context, Session};
use crate::output::{format_co2, stars, status_badge};

/// Run the admin command.
pub fn run(args: AdminArgs, ctx: &Context) -> Result<()> {
    let mut session = ctx.session()?;
    session.admin()?;

    match args.command {
        AdminCommand::Stats => show_stats(&session, ctx),
        AdminCommand::AddProduct(args) => add_product(args, &mut session, ctx),
        AdminCommand::Stock { id, stock } => update_stock(&id, stock, &mut session, ctx),
        AdminCommand::Price { id, price } => update_price(&id, price, &mut session, ctx),
        AdminCommand::Orders { status } => list_orders(status, &session, ctx),
        AdminCommand::OrderStatus { id, status } => set_status(&id, status, &mut session, ctx),
        AdminCommand::Reviews => list_reviews(&session, ctx),
    }
}

fn show_stats(session: &Session, ctx: &Context) -> Result<()> {
    let state = &session.state;
    let stats = AdminStats::compute(
        state.products.products(),
        &state.orders,
        state.customer_count(),
        ctx.currency(),
    )?;

    if ctx.output.is_json() {
        ctx.output.json(&stats);
        return Ok(());
    }

    ctx.output.header("Dashboard");
    ctx.output.kv("Products", &stats.product_count.to_string());
    ctx.output.kv("Customers", &stats.customer_count.to_string());
    ctx.output.kv("Orders", &stats.order_count.to_string());
    ctx.output.kv("Pending orders", &stats.pending_orders.to_string());
    ctx.output.kv("Revenue", &stats.revenue.display());
    ctx.output.kv("Carbon shipped", &format_co2(stats.total_co2_kg));
    ctx.output.kv("Average per order", &format_co2(stats.average_order_co2_kg()));
    ctx.output.kv("Low stock", &stats.low_stock_count.to_string());
    ctx.output.kv("Out of stock", &stats.out_of_stock_count.to_string());

    ctx.output.header("Orders by status");
    for status in OrderStatus::ALL {
        let count = stats.orders_per_status.get(status.as_str()).copied().unwrap_or(0);
        ctx.output.kv(&status_badge(status), &count.to_string());
    }

    ctx.output.header("Catalog by category");
    for (category, count) in &stats.products_per_category {
        let co2 = stats.co2_per_category.get(category).copied().unwrap_or(0.0);
        ctx.output.kv(
            category.display_name(),
            &format!("{} products, {}", count, format_co2(co2)),
        );
    }

    let low: Vec<String> = state
        .products
        .low_stock()
        .into_iter()
        .map(|p| format!("[{}] {} ({} left)", p.id, p.name, p.stock))
        .collect();
    if !low.is_empty() {
        ctx.output.header("Restock soon");
        for line in &low {
            ctx.output.list_item(line);
        }
    }

    Ok(())
}

fn add_product(args: AddProductArgs, session: &mut Session, ctx: &Context) -> Result<()> {
    let draft = ProductDraft {
        name: args.name,
        brand: args.brand,
        price: Some(args.price),
        co2_kg: Some(args.co2),
        description: args.description,
        stock: Some(args.stock),
        colors: args.colors,
        category: Some(args.category),
        image_url: args.image,
        delivery_charge: args.delivery,
    };
    let product = draft.into_product(ctx.currency())?;
    let product = session.state.products.add(product).clone();
    session.save()?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }
    ctx.output.success(&format!("Added {} as product {}", product.name, product.id));

    Ok(())
}

fn update_stock(id: &str, stock: i64, session: &mut Session, ctx: &Context) -> Result<()> {
    let product = session
        .state
        .products
        .update_stock(&ProductId::new(id), stock)?
        .clone();
    session.save()?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }
    ctx.output.success(&format!("{} now has {} in stock", product.name, product.stock));

    Ok(())
}

fn update_price(id: &str, price: f64, session: &mut Session, ctx: &Context) -> Result<()> {
    let price = Money::from_decimal(price, ctx.currency());
    let product = session
        .state
        .products
        .update_price(&ProductId::new(id), price)?
        .clone();
    session.save()?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }
    ctx.output.success(&format!("{} now costs {}", product.name, product.price.display()));

    Ok(())
}

fn list_orders(status: Option<OrderStatus>, session: &Session, ctx: &Context) -> Result<()> {
    let orders: Vec<_> = session
        .state
        .orders
        .iter()
        .filter(|o| status.map_or(true, |s| o.status == s))
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&orders);
        return Ok(());
    }

    ctx.output.header("All orders");
    if orders.is_empty() {
        ctx.output.info("No orders found.");
        return Ok(());
    }
    for order in orders.iter().rev() {
        print_order_line(order, ctx);
        ctx.output.kv("Customer", &order.user_name);
    }

    Ok(())
}

fn set_status(id: &str, status: OrderStatus, session: &mut Session, ctx: &Context) -> Result<()> {
    let order = session
        .state
        .set_order_status(&OrderId::new(id), status)?
        .clone();
    session.save()?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }
    ctx.output.success(&format!("Order {} is now {}", order.id, status_badge(order.status)));

    Ok(())
}

fn list_reviews(session: &Session, ctx: &Context) -> Result<()> {
    let reviews = all_reviews(session.state.products.products());

    if ctx.output.is_json() {
        ctx.output.json(&reviews);
        return Ok(());
    }

    ctx.output.header("Customer reviews");
    if reviews.is_empty() {
        ctx.output.info("No reviews yet.");
        return Ok(());
    }
    for entry in &reviews {
        ctx.output.list_item(&format!(
            "{} on {} by {} ({}): {}",
            stars(f64::from(entry.review.rating)),
            entry.product_name,
            entry.review.user_name,
            entry.review.created_at.format("%Y-%m-%d"),
            entry.review.comment
        ));
    }

    Ok(())
}
