//! Checkout and order history commands.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use eco_commerce::checkout::{CheckoutRequest, Order, ShippingAddress};
use eco_commerce::insights::CarbonFootprint;
use eco_commerce::{OrderId, ProductId};
use serde_json::json;

use super::cart::print_summary;
use super::{CheckoutArgs, OrdersArgs, ReviewArgs};
use crate::context::Context;
use crate::output::{carbon_badge, format_co2, format_points, stars, status_badge};

/// Run the checkout command.
pub fn checkout(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut session = ctx.session()?;
    let mut cart = session.cart()?;
    if cart.is_empty() {
        bail!("Your cart is empty. Add products with `ecobazaar cart add <id>`.");
    }

    let address = ShippingAddress::new(args.street, args.city, args.state, args.pincode);
    address.validate()?;
    let mut request = CheckoutRequest::new(address, args.payment);
    if let Some(code) = args.coupon {
        request = request.with_coupon(code);
    }

    let preview = cart.summary(request.coupon_code.as_deref())?;
    if !ctx.output.is_json() {
        ctx.output.header("Checkout");
        ctx.output.kv("Deliver to", &request.address.one_line());
        ctx.output.kv("Payment", request.payment_mode.display_name());
        ctx.output.kv("Items", &cart.item_count().to_string());
        print_summary(&preview, ctx);
    }

    if !args.yes && !ctx.output.is_json() {
        ctx.output.info("");
        let confirmed = Confirm::new()
            .with_prompt(format!("Place order for {}?", preview.grand_total.display()))
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Order cancelled");
            return Ok(());
        }
    }

    let floor = ctx.config.rewards.floor_negative_points;
    let order = session.state.place_order(&mut cart, &request, floor)?.clone();
    session.save()?;
    session.save_cart(&cart)?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }

    ctx.output.success(&format!("Order {} placed", order.id));
    ctx.output.kv("Total", &order.total.display());
    ctx.output.kv("Eco points", &format_points(order.eco_points_earned));
    if let Ok(user) = session.user() {
        ctx.output.kv("Balance", &format!("{} points (level {})", user.eco_points, user.level()));
    }

    Ok(())
}

/// Run the orders command.
pub fn list(args: OrdersArgs, ctx: &Context) -> Result<()> {
    let session = ctx.session()?;
    let user = session.user()?;

    if let Some(id) = args.id {
        let order = session
            .state
            .orders_for(&user.id)
            .into_iter()
            .find(|o| o.id.as_str() == id)
            .ok_or_else(|| anyhow::anyhow!("Order not found: {}", id))?;

        if ctx.output.is_json() {
            ctx.output.json(order);
            return Ok(());
        }
        print_order_detail(order, ctx);
        return Ok(());
    }

    let orders = session.state.orders_for(&user.id);
    if ctx.output.is_json() {
        ctx.output.json(&orders);
        return Ok(());
    }

    ctx.output.header("Your orders");
    if orders.is_empty() {
        ctx.output.info("No orders yet.");
        return Ok(());
    }
    for order in orders.iter().rev() {
        print_order_line(order, ctx);
    }

    Ok(())
}

/// One-line order listing, shared with the admin panel.
pub fn print_order_line(order: &Order, ctx: &Context) {
    let reviewed = if order.review_given { ", reviewed" } else { "" };
    ctx.output.list_item(&format!(
        "{} {} - {} items - {} - {} - {}{}",
        order.id,
        order.placed_at.format("%Y-%m-%d"),
        order.item_count(),
        order.total.display(),
        format_co2(order.total_co2_kg),
        status_badge(order.status),
        reviewed
    ));
}

fn print_order_detail(order: &Order, ctx: &Context) {
    ctx.output.header(&format!("Order {}", order.id));
    ctx.output.kv("Placed", &order.placed_at.format("%Y-%m-%d %H:%M UTC").to_string());
    ctx.output.kv(
        "Status",
        &format!("{} ({}/4)", status_badge(order.status), order.status.progress()),
    );
    ctx.output.kv("Deliver to", &order.address.one_line());
    ctx.output.kv("Payment", order.payment_mode.display_name());

    for item in &order.items {
        ctx.output.list_item(&format!(
            "[{}] {} x {} - {}",
            item.product.id,
            item.quantity,
            item.product.name,
            format_co2(item.line_co2_kg())
        ));
    }

    ctx.output.info("");
    ctx.output.kv("Subtotal", &order.subtotal.display());
    ctx.output.kv("Delivery", &order.delivery_total.display());
    ctx.output.kv("Tax", &order.tax_total.display());
    if !order.discount_total.is_zero() {
        ctx.output.kv("Discount", &format!("-{}", order.discount_total.display()));
    }
    ctx.output.kv("Total", &order.total.display());
    ctx.output.kv("Carbon", &format_co2(order.total_co2_kg));
    ctx.output.kv("Eco points", &format_points(order.eco_points_earned));
    if order.can_review() {
        ctx.output.info(&format!("Leave a review: ecobazaar review {} --rating 5 -m \"...\"", order.id));
    }
}

/// Run the review command.
pub fn review(args: ReviewArgs, ctx: &Context) -> Result<()> {
    let mut session = ctx.session()?;
    let product_id = args.product.map(ProductId::new);
    let review = session
        .state
        .submit_review(&OrderId::new(args.order), product_id.as_ref(), args.rating, &args.comment)?
        .clone();
    session.save()?;

    if ctx.output.is_json() {
        ctx.output.json(&review);
        return Ok(());
    }
    ctx.output.success(&format!(
        "Thanks for your review! {}",
        stars(f64::from(review.rating))
    ));

    Ok(())
}

/// Run the footprint command.
pub fn footprint(ctx: &Context) -> Result<()> {
    let session = ctx.session()?;
    let user = session.user()?;
    let footprint = CarbonFootprint::for_user(&session.state.orders, &user.id);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "user_id": user.id,
            "eco_points": user.eco_points,
            "footprint": footprint,
        }));
        return Ok(());
    }

    ctx.output.header("Your carbon footprint");
    ctx.output.kv("Orders", &footprint.order_count.to_string());
    ctx.output.kv("Total carbon", &format_co2(footprint.total_co2_kg));
    ctx.output.kv("Rating", &carbon_badge(footprint.rating));
    ctx.output.kv("Progress", &format!("{:.0}% of 100 kg", footprint.progress_percent));
    ctx.output.kv("Eco points", &format_points(user.eco_points));

    if !footprint.by_category.is_empty() {
        ctx.output.header("By category");
        for (category, co2) in &footprint.by_category {
            ctx.output.list_item(&format!(
                "{}: {} ({:.0}%)",
                category.display_name(),
                format_co2(*co2),
                footprint.category_share(*co2)
            ));
        }
    }

    Ok(())
}
