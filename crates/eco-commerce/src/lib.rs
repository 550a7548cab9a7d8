//! Storefront domain types and logic for EcoBazaar.
//!
//! This crate provides the pieces of an eco-conscious storefront:
//!
//! - **Catalog**: Products, categories, reviews, inventory, low-carbon alternatives
//! - **Cart**: Line items, coupons, and the pricing & rewards calculator
//! - **Search**: Fuzzy text matching, filters, sorting, facets
//! - **Checkout**: Shipping addresses, payment modes, orders
//! - **Accounts**: Registration, sign-in, roles
//! - **Insights**: Admin dashboard figures and customer carbon footprints
//!
//! With the `storage` feature (on by default), [`storage::Repository`]
//! persists the application state through `eco-store`.
//!
//! # Example
//!
//! ```rust
//! use eco_commerce::prelude::*;
//!
//! let tote = Product::new("Jute Tote", "Loom & Leaf", Money::from_whole(500, Currency::INR), 0.8, Category::Bags)
//!     .with_stock(10);
//!
//! let mut cart = Cart::new();
//! cart.add_item(&tote, 1).unwrap();
//!
//! let summary = cart.summary(Some("ECO10")).unwrap();
//! assert_eq!(summary.grand_total.display(), "₹475");
//! assert_eq!(summary.eco_points, 8);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod accounts;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod insights;
pub mod rewards;
pub mod search;
pub mod state;
pub mod wishlist;

#[cfg(feature = "storage")]
pub mod storage;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{AlternativeSort, Catalog, Category, Product, ProductDraft, Review};

    // Cart
    pub use crate::cart::{Cart, CheckoutSummary, Coupon, CouponOutcome, LineItem};
    pub use crate::rewards::{eco_points_for, CarbonLevel};

    // Checkout
    pub use crate::checkout::{CheckoutRequest, Order, OrderStatus, PaymentMode, ShippingAddress};

    // Accounts
    pub use crate::accounts::{Credentials, Registration, Role, User};

    // Search
    pub use crate::search::{fuzzy_match, Filter, SearchQuery, SearchResults, SortOption};

    pub use crate::insights::{AdminStats, CarbonFootprint};
    pub use crate::state::AppState;
    pub use crate::wishlist::Wishlist;

    #[cfg(feature = "storage")]
    pub use crate::storage::Repository;
}
