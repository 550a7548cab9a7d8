//! Cart and wishlist commands.

use anyhow::Result;
use dialoguer::Confirm;
use eco_commerce::cart::{Cart, CheckoutSummary, CouponOutcome};
use eco_commerce::catalog::cart_alternatives;
use eco_commerce::ProductId;
use serde_json::json;

use super::catalog::eco_label;
use super::{CartArgs, CartCommand, WishlistArgs, WishlistCommand};
use crate::context::{Context, Session};
use crate::output::{carbon_badge, format_co2, format_points};

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let coupon = args.coupon.as_deref();
    match args.command {
        Some(CartCommand::Show) | None => show_cart(coupon, ctx),
        Some(CartCommand::Add { id, quantity }) => add_item(&id, quantity, coupon, ctx),
        Some(CartCommand::Update { id, quantity }) => update_item(&id, quantity, coupon, ctx),
        Some(CartCommand::Remove { id }) => remove_item(&id, coupon, ctx),
        Some(CartCommand::Clear { yes }) => clear_cart(yes, ctx),
    }
}

fn show_cart(coupon: Option<&str>, ctx: &Context) -> Result<()> {
    let session = ctx.session()?;
    let cart = session.cart()?;
    print_cart(&cart, coupon, &session, ctx)
}

fn add_item(id: &str, quantity: i64, coupon: Option<&str>, ctx: &Context) -> Result<()> {
    let session = ctx.session()?;
    let product = session.state.products.require(&ProductId::new(id))?;
    let mut cart = session.cart()?;
    let line = cart.add_item(product, quantity)?;
    ctx.output.success(&format!(
        "Added {} x {} ({} in cart)",
        quantity, product.name, line.quantity
    ));
    session.save_cart(&cart)?;
    print_cart(&cart, coupon, &session, ctx)
}

fn update_item(id: &str, quantity: i64, coupon: Option<&str>, ctx: &Context) -> Result<()> {
    let session = ctx.session()?;
    let mut cart = session.cart()?;
    if !cart.update_quantity(&ProductId::new(id), quantity)? {
        ctx.output.warn(&format!("Product {} is not in your cart", id));
    } else if quantity <= 0 {
        ctx.output.success("Removed from cart");
        session.save_cart(&cart)?;
    } else {
        ctx.output.success(&format!("Quantity set to {}", quantity));
        session.save_cart(&cart)?;
    }
    print_cart(&cart, coupon, &session, ctx)
}

fn remove_item(id: &str, coupon: Option<&str>, ctx: &Context) -> Result<()> {
    let session = ctx.session()?;
    let mut cart = session.cart()?;
    if cart.remove_item(&ProductId::new(id)) {
        ctx.output.success("Removed from cart");
        session.save_cart(&cart)?;
    } else {
        ctx.output.warn(&format!("Product {} is not in your cart", id));
    }
    print_cart(&cart, coupon, &session, ctx)
}

fn clear_cart(yes: bool, ctx: &Context) -> Result<()> {
    let session = ctx.session()?;
    let mut cart = session.cart()?;
    if cart.is_empty() {
        ctx.output.info("Your cart is already empty");
        return Ok(());
    }

    if !yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove all {} items from your cart?", cart.item_count()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Cart left unchanged");
            return Ok(());
        }
    }

    cart.clear();
    session.save_cart(&cart)?;
    if ctx.output.is_json() {
        ctx.output.json(&json!({ "cleared": true }));
    } else {
        ctx.output.success("Cart cleared");
    }

    Ok(())
}

fn print_cart(cart: &Cart, coupon: Option<&str>, session: &Session, ctx: &Context) -> Result<()> {
    let summary = cart.summary(coupon)?;
    let alternatives = cart_alternatives(session.state.products.products(), &cart.items);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "items": cart.items,
            "summary": summary,
            "alternatives": alternatives,
        }));
        return Ok(());
    }

    ctx.output.header("Your cart");
    if cart.is_empty() {
        ctx.output.info("Your cart is empty. Browse with `ecobazaar products`.");
        return Ok(());
    }

    for item in &cart.items {
        let line_total = item.line_subtotal()?;
        ctx.output.list_item(&format!(
            "[{}] {} x {} = {} ({})",
            item.product.id,
            item.quantity,
            item.product.name,
            line_total.display(),
            eco_label(&item.product)
        ));
    }

    print_summary(&summary, ctx);

    if !alternatives.is_empty() {
        ctx.output.header("Eco Star picks for you");
        for alt in alternatives {
            ctx.output.list_item(&format!(
                "[{}] {} - {} - {}",
                alt.id,
                alt.name,
                alt.price.display(),
                format_co2(alt.co2_kg)
            ));
        }
    }

    Ok(())
}

/// Print the price breakdown of a cart or order preview.
pub fn print_summary(summary: &CheckoutSummary, ctx: &Context) {
    ctx.output.info("");
    ctx.output.kv("Subtotal", &summary.subtotal.display());
    if summary.delivery_total.is_zero() {
        ctx.output.kv("Delivery", "Free");
    } else {
        ctx.output.kv("Delivery", &summary.delivery_total.display());
    }
    ctx.output.kv("Tax (5%)", &summary.tax_total.display());
    match &summary.coupon {
        CouponOutcome::Applied { coupon, amount } => {
            ctx.output.kv(&format!("Discount ({})", coupon.code()), &format!("-{}", amount.display()));
        }
        CouponOutcome::Invalid { code } => {
            ctx.output.warn(&format!("Invalid coupon code: {}", code));
        }
        CouponOutcome::None => {}
    }
    ctx.output.kv("Total", &summary.grand_total.display());
    ctx.output.kv(
        "Carbon",
        &format!("{} ({})", format_co2(summary.total_co2_kg), carbon_badge(summary.carbon_level())),
    );
    ctx.output.kv("Eco points", &format_points(summary.eco_points));
}

/// Run the wishlist command.
pub fn wishlist(args: WishlistArgs, ctx: &Context) -> Result<()> {
    let session = ctx.session()?;
    let mut wishlist = session.wishlist()?;

    if let Some(WishlistCommand::Toggle { id }) = args.command {
        let product = session.state.products.require(&ProductId::new(id))?;
        if wishlist.toggle(product) {
            ctx.output.success(&format!("Saved {} to your wishlist", product.name));
        } else {
            ctx.output.success(&format!("Removed {} from your wishlist", product.name));
        }
        session.save_wishlist(&wishlist)?;
    }

    if ctx.output.is_json() {
        ctx.output.json(&wishlist);
        return Ok(());
    }

    ctx.output.header("Your wishlist");
    if wishlist.is_empty() {
        ctx.output.info("Nothing saved yet.");
        return Ok(());
    }
    for product in wishlist.products() {
        ctx.output.list_item(&format!(
            "[{}] {} - {} - {}",
            product.id,
            product.name,
            product.price.display(),
            eco_label(product)
        ));
    }

    Ok(())
}
