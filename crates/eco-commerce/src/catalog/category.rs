//! Product categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CommerceError;

/// Storefront category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Clothing,
    Accessories,
    Bags,
    Electronics,
    Kitchen,
    Sports,
    Beauty,
    Stationery,
    Footwear,
    Home,
}

impl Category {
    /// Every category, in storefront display order.
    pub const ALL: [Category; 10] = [
        Category::Clothing,
        Category::Accessories,
        Category::Bags,
        Category::Electronics,
        Category::Kitchen,
        Category::Sports,
        Category::Beauty,
        Category::Stationery,
        Category::Footwear,
        Category::Home,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Clothing => "clothing",
            Category::Accessories => "accessories",
            Category::Bags => "bags",
            Category::Electronics => "electronics",
            Category::Kitchen => "kitchen",
            Category::Sports => "sports",
            Category::Beauty => "beauty",
            Category::Stationery => "stationery",
            Category::Footwear => "footwear",
            Category::Home => "home",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Clothing => "Clothing",
            Category::Accessories => "Accessories",
            Category::Bags => "Bags",
            Category::Electronics => "Electronics",
            Category::Kitchen => "Kitchen",
            Category::Sports => "Sports",
            Category::Beauty => "Beauty",
            Category::Stationery => "Stationery",
            Category::Footwear => "Footwear",
            Category::Home => "Home",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}
