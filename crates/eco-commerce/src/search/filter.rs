//! Search filter types.

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Product};
use crate::money::Money;
use crate::rewards::ECO_STAR_MAX_CO2_KG;

/// A search filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Filter by single category.
    Category(Category),
    /// Filter by brand (exact).
    Brand(String),
    /// Products offered in this color (exact).
    Color(String),
    /// Inclusive price range.
    PriceRange {
        min: Option<Money>,
        max: Option<Money>,
    },
    /// Only show in-stock items.
    InStock,
    /// Only Eco Star products.
    EcoStar,
    /// Fuzzy text search over name, brand, category and description.
    Text(String),
}

impl Filter {
    /// Create a category filter.
    pub fn category(category: Category) -> Self {
        Filter::Category(category)
    }

    /// Create a brand filter.
    pub fn brand(brand: impl Into<String>) -> Self {
        Filter::Brand(brand.into())
    }

    /// Create a color filter.
    pub fn color(color: impl Into<String>) -> Self {
        Filter::Color(color.into())
    }

    /// Create a price range filter.
    pub fn price_range(min: Option<Money>, max: Option<Money>) -> Self {
        Filter::PriceRange { min, max }
    }

    /// Create an in-stock filter.
    pub fn in_stock() -> Self {
        Filter::InStock
    }

    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Category(category) => product.category == *category,
            Filter::Brand(brand) => product.brand == *brand,
            Filter::Color(color) => product.has_color(color),
            Filter::PriceRange { min, max } => {
                let price = product.price.amount_minor;
                min.map_or(true, |m| price >= m.amount_minor)
                    && max.map_or(true, |m| price <= m.amount_minor)
            }
            Filter::InStock => product.is_in_stock(),
            Filter::EcoStar => product.co2_kg < ECO_STAR_MAX_CO2_KG,
            Filter::Text(query) => product.matches_query(query),
        }
    }
}
