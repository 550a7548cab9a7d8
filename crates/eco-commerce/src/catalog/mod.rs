//! Product catalog module.
//!
//! Contains products, categories, reviews, inventory and recommendations.

mod alternatives;
mod category;
mod inventory;
mod product;
mod review;
mod seed;

pub use alternatives::{cart_alternatives, product_alternatives, AlternativeSort, MAX_ALTERNATIVES};
pub use category::Category;
pub use inventory::{parse_colors, Catalog, ProductDraft};
pub use product::{Product, DEFAULT_IMAGE_URL, DEFAULT_RATING, LOW_STOCK_THRESHOLD};
pub use review::{all_reviews, ProductReview, Review, MAX_RATING};
pub use seed::demo_catalog;
