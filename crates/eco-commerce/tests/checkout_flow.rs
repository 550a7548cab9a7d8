//! End-to-end storefront scenarios through the public API.

use eco_commerce::catalog::{cart_alternatives, product_alternatives};
use eco_commerce::insights::{AdminStats, CarbonFootprint};
use eco_commerce::prelude::*;

fn register(state: &mut AppState, email: &str, role: Role) {
    state
        .register(Registration {
            name: "Meera".to_string(),
            email: email.to_string(),
            phone: "9000012345".to_string(),
            password: "Leafy#123".to_string(),
            confirm_password: "Leafy#123".to_string(),
            role,
        })
        .unwrap();
}

fn address() -> ShippingAddress {
    ShippingAddress::new("4 Park Street", "Kolkata", "West Bengal", "700016")
}

#[test]
fn single_item_with_eco10() {
    let product = Product::new(
        "Canvas Shopper",
        "Loom & Leaf",
        Money::from_whole(500, Currency::INR),
        8.0,
        Category::Bags,
    )
    .with_stock(3);

    let mut cart = Cart::new();
    cart.add_item(&product, 1).unwrap();
    let summary = cart.summary(Some("ECO10")).unwrap();

    assert_eq!(summary.subtotal, Money::from_whole(500, Currency::INR));
    assert_eq!(summary.tax_total, Money::from_whole(25, Currency::INR));
    assert_eq!(summary.discount_total, Money::from_whole(50, Currency::INR));
    assert_eq!(summary.delivery_total, Money::zero(Currency::INR));
    assert_eq!(summary.grand_total, Money::from_whole(475, Currency::INR));
    assert!((summary.total_co2_kg - 8.0).abs() < 1e-9);
    assert_eq!(summary.eco_points, 80);
}

#[test]
fn shopper_journey() {
    let mut state = AppState::seeded(Currency::INR);
    register(&mut state, "meera@example.com", Role::User);

    // search, then fill the cart from the results
    let results = SearchQuery::storefront(Currency::INR)
        .with_query("bottle")
        .with_filter(Filter::category(Category::Kitchen))
        .run(state.products.products());
    assert_eq!(results.pagination.total, 1);
    let bottle = results.items[0].clone();
    assert_eq!(bottle.name, "Stainless Steel Water Bottle");

    let mut cart = Cart::new();
    cart.add_item(&bottle, 2).unwrap();
    let tote = state.products.require(&ProductId::new("6")).unwrap().clone();
    cart.add_item(&tote, 1).unwrap();
    assert_eq!(cart.item_count(), 3);

    // the coconut bowls are the only in-stock Eco Star kitchen item not in the cart
    let alternatives = cart_alternatives(state.products.products(), &cart.items);
    assert!(alternatives.iter().all(|p| p.co2_kg < 2.0 && p.stock > 0));
    assert!(alternatives.iter().any(|p| p.id == ProductId::new("11")));

    let preview = cart.summary(Some("green50")).unwrap();
    let request = CheckoutRequest::new(address(), PaymentMode::Card).with_coupon("GREEN50");
    let order = state.place_order(&mut cart, &request, false).unwrap().clone();

    assert_eq!(order.total, preview.grand_total);
    assert_eq!(order.discount_total, Money::from_whole(50, Currency::INR));
    assert!(cart.is_empty());

    let user = state.require_user().unwrap();
    assert_eq!(user.eco_points, order.eco_points_earned);

    let footprint = CarbonFootprint::for_user(&state.orders, &user.id);
    assert_eq!(footprint.order_count, 1);
    assert!((footprint.total_co2_kg - order.total_co2_kg).abs() < 1e-9);
}

#[test]
fn admin_manages_inventory_and_orders() {
    let mut state = AppState::seeded(Currency::INR);
    register(&mut state, "buyer@example.com", Role::User);

    let jacket = state.products.require(&ProductId::new("2")).unwrap().clone();
    let mut cart = Cart::new();
    cart.add_item(&jacket, 1).unwrap();
    let order_id = state
        .place_order(&mut cart, &CheckoutRequest::new(address(), PaymentMode::Cod), false)
        .unwrap()
        .id
        .clone();

    register(&mut state, "admin@example.com", Role::Admin);
    state.require_admin().unwrap();

    let draft = ProductDraft {
        name: "Steel Tiffin".to_string(),
        brand: "Hydra".to_string(),
        price: Some(799.0),
        co2_kg: Some(1.1),
        description: "Three tier lunch box".to_string(),
        stock: Some(12),
        colors: "Silver".to_string(),
        category: Some(Category::Kitchen),
        ..ProductDraft::default()
    };
    let added_id = state
        .products
        .add(draft.into_product(Currency::INR).unwrap())
        .id
        .clone();
    state.products.update_stock(&added_id, 0).unwrap();
    state
        .products
        .update_price(&jacket.id, Money::from_whole(2299, Currency::INR))
        .unwrap();

    state.set_order_status(&order_id, OrderStatus::Shipped).unwrap();

    let stats = AdminStats::compute(
        state.products.products(),
        &state.orders,
        state.customer_count(),
        Currency::INR,
    )
    .unwrap();
    assert_eq!(stats.customer_count, 1);
    assert_eq!(stats.order_count, 1);
    assert_eq!(stats.pending_orders, 0);
    assert_eq!(stats.orders_per_status["shipped"], 1);
    assert_eq!(stats.out_of_stock_count, 2);

    // the order keeps the price it was placed at
    assert_eq!(
        state.order(&order_id).unwrap().subtotal,
        Money::from_whole(2499, Currency::INR)
    );
}

#[test]
fn product_page_alternatives() {
    let state = AppState::seeded(Currency::INR);
    let jacket = state.products.require(&ProductId::new("2")).unwrap();
    let alternatives = product_alternatives(state.products.products(), jacket, AlternativeSort::Co2);

    let names: Vec<&str> = alternatives.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Linen Kurta", "Organic Cotton T-Shirt"]);
}

#[test]
fn invalid_coupon_is_reported_not_rejected() {
    let state = AppState::seeded(Currency::INR);
    let tee = state.products.require(&ProductId::new("1")).unwrap();
    let mut cart = Cart::new();
    cart.add_item(tee, 1).unwrap();

    let summary = cart.summary(Some("SPRING")).unwrap();
    assert!(summary.coupon.is_invalid());
    assert!(summary.discount_total.is_zero());
}
