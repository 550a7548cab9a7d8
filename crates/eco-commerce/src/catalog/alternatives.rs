//! Lower-carbon product recommendations.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cart::LineItem;
use crate::catalog::{Category, Product};
use crate::ids::ProductId;
use crate::rewards::ECO_STAR_MAX_CO2_KG;
use crate::CommerceError;

/// Most recommendations shown at once.
pub const MAX_ALTERNATIVES: usize = 4;

/// Ordering for product-page alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AlternativeSort {
    /// Lowest carbon first.
    #[default]
    Co2,
    /// Cheapest first.
    Price,
    /// Highest rated first.
    Rating,
}

impl AlternativeSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlternativeSort::Co2 => "co2",
            AlternativeSort::Price => "price",
            AlternativeSort::Rating => "rating",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            AlternativeSort::Co2 => a.co2_kg.total_cmp(&b.co2_kg),
            AlternativeSort::Price => a.price.amount_minor.cmp(&b.price.amount_minor),
            AlternativeSort::Rating => b.rating.total_cmp(&a.rating),
        }
    }
}

impl FromStr for AlternativeSort {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "co2" | "carbon" => Ok(AlternativeSort::Co2),
            "price" => Ok(AlternativeSort::Price),
            "rating" => Ok(AlternativeSort::Rating),
            _ => Err(CommerceError::UnknownValue {
                kind: "alternative sort",
                value: s.to_string(),
            }),
        }
    }
}

/// Same-category products with strictly lower carbon than `product`.
pub fn product_alternatives<'a>(
    catalog: &'a [Product],
    product: &Product,
    sort: AlternativeSort,
) -> Vec<&'a Product> {
    let mut alternatives: Vec<&Product> = catalog
        .iter()
        .filter(|p| p.category == product.category && p.id != product.id && p.co2_kg < product.co2_kg)
        .collect();
    alternatives.sort_by(|a, b| sort.compare(a, b));
    alternatives.truncate(MAX_ALTERNATIVES);
    alternatives
}

/// In-stock Eco Star products from the cart's categories that are not already in the cart.
pub fn cart_alternatives<'a>(catalog: &'a [Product], items: &[LineItem]) -> Vec<&'a Product> {
    let in_cart: HashSet<&ProductId> = items.iter().map(|i| &i.product.id).collect();
    let categories: HashSet<Category> = items.iter().map(|i| i.product.category).collect();

    let mut alternatives: Vec<&Product> = catalog
        .iter()
        .filter(|p| {
            !in_cart.contains(&p.id)
                && categories.contains(&p.category)
                && p.co2_kg < ECO_STAR_MAX_CO2_KG
                && p.stock > 0
        })
        .collect();
    alternatives.sort_by(|a, b| a.co2_kg.total_cmp(&b.co2_kg));
    alternatives.truncate(MAX_ALTERNATIVES);
    alternatives
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn bottle(id: &str, price: i64, co2: f64, rating: f64) -> Product {
        let mut p = Product::new(
            format!("Bottle {id}"),
            "Hydra",
            Money::from_whole(price, Currency::INR),
            co2,
            Category::Kitchen,
        )
        .with_id(id)
        .with_stock(10);
        p.rating = rating;
        p
    }

    fn catalog() -> Vec<Product> {
        vec![
            bottle("a", 900, 5.0, 4.0),
            bottle("b", 300, 3.0, 4.9),
            bottle("c", 500, 1.0, 4.2),
            bottle("d", 100, 2.5, 3.1),
            bottle("e", 700, 0.5, 4.4),
            bottle("f", 200, 4.0, 4.6),
            Product::new("Tee", "EarthWear", Money::from_whole(400, Currency::INR), 0.1, Category::Clothing)
                .with_id("g")
                .with_stock(5),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_product_alternatives_by_co2() {
        let catalog = catalog();
        let alts = product_alternatives(&catalog, &catalog[0], AlternativeSort::Co2);
        assert_eq!(ids(&alts), vec!["e", "c", "d", "b"]);
    }

    #[test]
    fn test_product_alternatives_by_price_and_rating() {
        let catalog = catalog();
        let by_price = product_alternatives(&catalog, &catalog[0], AlternativeSort::Price);
        assert_eq!(ids(&by_price), vec!["d", "f", "b", "c"]);

        let by_rating = product_alternatives(&catalog, &catalog[0], AlternativeSort::Rating);
        assert_eq!(ids(&by_rating), vec!["b", "f", "e", "c"]);
    }

    #[test]
    fn test_product_alternatives_strictly_lower() {
        let catalog = catalog();
        let lowest = &catalog[4];
        assert!(product_alternatives(&catalog, lowest, AlternativeSort::Co2).is_empty());
    }

    #[test]
    fn test_cart_alternatives() {
        let mut catalog = catalog();
        catalog[2].stock = 0;
        let items = vec![LineItem::new(catalog[0].clone(), 1)];
        let alts = cart_alternatives(&catalog, &items);
        assert_eq!(ids(&alts), vec!["e"]);
    }

    #[test]
    fn test_sort_from_str() {
        assert_eq!("Price".parse::<AlternativeSort>().unwrap(), AlternativeSort::Price);
        assert!("weight".parse::<AlternativeSort>().is_err());
    }
}
