//! Product type.

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Review};
use crate::ids::ProductId;
use crate::money::Money;
use crate::rewards::ECO_STAR_MAX_CO2_KG;
use crate::search::fuzzy_match;

/// Rating given to products that have not been reviewed yet.
pub const DEFAULT_RATING: f64 = 4.5;

/// Image used when an admin adds a product without one.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400";

/// Stock below this level counts as low.
pub const LOW_STOCK_THRESHOLD: i64 = 20;

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Unit price.
    pub price: Money,
    /// Embodied carbon per unit, in kilograms of CO2.
    pub co2_kg: f64,
    /// Full description.
    pub description: String,
    /// Units in stock.
    pub stock: i64,
    /// Available colors.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Available sizes, if the product comes in sizes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
    /// Storefront category.
    pub category: Category,
    /// Image URL.
    pub image: String,
    /// Average review rating.
    pub rating: f64,
    /// Customer reviews.
    #[serde(default)]
    pub reviews: Vec<Review>,
    /// Delivery charge per unit; zero means free delivery.
    pub delivery_charge: Money,
}

impl Product {
    /// Create a new product with free delivery and no stock.
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        price: Money,
        co2_kg: f64,
        category: Category,
    ) -> Self {
        Self {
            id: ProductId::generate(),
            name: name.into(),
            brand: brand.into(),
            price,
            co2_kg,
            description: String::new(),
            stock: 0,
            colors: Vec::new(),
            sizes: None,
            category,
            image: DEFAULT_IMAGE_URL.to_string(),
            rating: DEFAULT_RATING,
            reviews: Vec::new(),
            delivery_charge: Money::zero(price.currency),
        }
    }

    /// Set the product id.
    pub fn with_id(mut self, id: impl Into<ProductId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the stock level.
    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }

    /// Set the per-unit delivery charge.
    pub fn with_delivery_charge(mut self, charge: Money) -> Self {
        self.delivery_charge = charge;
        self
    }

    /// Set available colors.
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Check if any units are in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Check if stock is running low (but not out).
    pub fn is_low_stock(&self) -> bool {
        self.stock > 0 && self.stock < LOW_STOCK_THRESHOLD
    }

    /// Check if out of stock.
    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    /// Products under 2 kg CO2 per unit carry the Eco Star badge.
    pub fn is_eco_star(&self) -> bool {
        self.co2_kg < ECO_STAR_MAX_CO2_KG
    }

    /// Whether delivery is free.
    pub fn has_free_delivery(&self) -> bool {
        self.delivery_charge.is_zero()
    }

    /// Whether the product offers the given color (exact match).
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// Fuzzy-match a search query against name, brand, category and description.
    pub fn matches_query(&self, query: &str) -> bool {
        fuzzy_match(&self.name, query)
            || fuzzy_match(&self.brand, query)
            || fuzzy_match(self.category.display_name(), query)
            || fuzzy_match(&self.description, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn tshirt() -> Product {
        Product::new(
            "Organic Cotton T-Shirt",
            "EarthWear",
            Money::from_whole(599, Currency::INR),
            2.5,
            Category::Clothing,
        )
        .with_description("Soft tee made from GOTS certified cotton")
        .with_stock(40)
    }

    #[test]
    fn test_new_product_defaults() {
        let product = tshirt();
        assert_eq!(product.rating, DEFAULT_RATING);
        assert!(product.has_free_delivery());
        assert!(product.reviews.is_empty());
    }

    #[test]
    fn test_stock_levels() {
        let product = tshirt();
        assert!(product.is_in_stock());
        assert!(!product.is_low_stock());

        let low = product.clone().with_stock(19);
        assert!(low.is_low_stock());

        let out = product.with_stock(0);
        assert!(out.is_out_of_stock());
        assert!(!out.is_low_stock());
    }

    #[test]
    fn test_eco_star() {
        assert!(!tshirt().is_eco_star());
        let mut bottle = tshirt();
        bottle.co2_kg = 1.9;
        assert!(bottle.is_eco_star());
    }

    #[test]
    fn test_matches_query_any_field() {
        let product = tshirt();
        assert!(product.matches_query("earthwear"));
        assert!(product.matches_query("clothing"));
        assert!(product.matches_query("gots"));
        assert!(product.matches_query("shrt"));
        assert!(!product.matches_query("xyz123"));
    }
}
