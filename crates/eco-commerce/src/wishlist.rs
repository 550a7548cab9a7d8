//! Per-user wishlist.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::ProductId;

/// Saved products. Serializes as a bare product list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct Wishlist {
    products: Vec<Product>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the product if absent, remove it if present. Returns whether it is now saved.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.contains(&product.id) {
            self.products.retain(|p| p.id != product.id);
            false
        } else {
            self.products.push(product.clone());
            true
        }
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.products.iter().any(|p| &p.id == product_id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
