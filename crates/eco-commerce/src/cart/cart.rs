//! Cart and line item types.

use serde::{Deserialize, Serialize};

use crate::cart::{summarize, CheckoutSummary};
use crate::catalog::{Category, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// A product snapshot and how many of it the customer wants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product as it was when added to the cart.
    pub product: Product,
    /// Quantity ordered.
    pub quantity: i64,
}

impl LineItem {
    /// Create a line item. Quantity is not validated here; see [`Cart::add_item`].
    pub fn new(product: Product, quantity: i64) -> Self {
        Self { product, quantity }
    }

    /// Unit price × quantity.
    pub fn line_subtotal(&self) -> Result<Money, CommerceError> {
        self.product
            .price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }

    /// Unit delivery charge × quantity.
    pub fn line_delivery(&self) -> Result<Money, CommerceError> {
        self.product
            .delivery_charge
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }

    /// Unit carbon × quantity, in kilograms.
    pub fn line_co2_kg(&self) -> f64 {
        self.product.co2_kg * self.quantity as f64
    }
}

/// A shopping cart. Serializes as a bare list of line items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct Cart {
    /// Items in the cart, in the order they were added.
    pub items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item to the cart.
    ///
    /// Adding a product already in the cart increases its quantity. Returns an error if:
    /// - Quantity is not positive
    /// - The resulting quantity exceeds the product's stock
    /// - The resulting quantity exceeds MAX_QUANTITY_PER_ITEM
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> Result<&LineItem, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        let existing = self.position(&product.id);
        let current = existing.map_or(0, |i| self.items[i].quantity);
        let new_quantity = current.checked_add(quantity).ok_or(CommerceError::Overflow)?;
        check_quantity(product, new_quantity)?;

        let index = match existing {
            Some(index) => {
                self.items[index].quantity = new_quantity;
                index
            }
            None => {
                self.items.push(LineItem::new(product.clone(), quantity));
                self.items.len() - 1
            }
        };

        tracing::debug!(product_id = %product.id, quantity = new_quantity, "cart item added");
        Ok(&self.items[index])
    }

    /// Update item quantity.
    ///
    /// If quantity is <= 0, removes the item. Returns `Ok(false)` if the
    /// product is not in the cart.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove_item(product_id));
        }

        let Some(index) = self.position(product_id) else {
            return Ok(false);
        };
        check_quantity(&self.items[index].product, quantity)?;
        self.items[index].quantity = quantity;
        Ok(true)
    }

    /// Remove an item from the cart.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product.id != product_id);
        self.items.len() < len_before
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Find an item by product ID.
    pub fn get_item(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product.id == product_id)
    }

    fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.items.iter().position(|i| &i.product.id == product_id)
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Get number of unique items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct categories in the cart, in first-added order.
    pub fn categories(&self) -> Vec<Category> {
        let mut categories = Vec::new();
        for item in &self.items {
            if !categories.contains(&item.product.category) {
                categories.push(item.product.category);
            }
        }
        categories
    }

    /// Price the cart with an optional coupon code.
    pub fn summary(&self, coupon_code: Option<&str>) -> Result<CheckoutSummary, CommerceError> {
        summarize(&self.items, coupon_code)
    }
}

fn check_quantity(product: &Product, quantity: i64) -> Result<(), CommerceError> {
    if quantity > MAX_QUANTITY_PER_ITEM {
        return Err(CommerceError::QuantityExceedsLimit(quantity, MAX_QUANTITY_PER_ITEM));
    }
    if quantity > product.stock {
        return Err(CommerceError::InsufficientInventory {
            product_id: product.id.to_string(),
            requested: quantity,
            available: product.stock,
        });
    }
    Ok(())
}
