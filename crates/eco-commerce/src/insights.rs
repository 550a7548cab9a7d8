//! Admin dashboard figures and customer carbon footprints.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::{Category, Product};
use crate::checkout::{Order, OrderStatus};
use crate::ids::UserId;
use crate::money::{Currency, Money};
use crate::rewards::CarbonLevel;
use crate::CommerceError;

/// Carbon at which the footprint progress bar is full.
pub const FOOTPRINT_SCALE_KG: f64 = 100.0;

/// Store-wide figures for the admin home page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AdminStats {
    pub product_count: usize,
    pub order_count: usize,
    pub customer_count: usize,
    /// Σ order totals.
    pub revenue: Money,
    /// Σ order carbon, in kilograms.
    pub total_co2_kg: f64,
    /// Products with stock below the low-stock threshold, including sold-out ones.
    pub low_stock_count: usize,
    pub out_of_stock_count: usize,
    pub pending_orders: usize,
    pub products_per_category: BTreeMap<Category, usize>,
    /// Σ product co2 per category, in kilograms.
    pub co2_per_category: BTreeMap<Category, f64>,
    pub orders_per_status: BTreeMap<&'static str, usize>,
}

impl AdminStats {
    /// Compute dashboard figures. `customer_count` counts non-admin accounts.
    pub fn compute(
        products: &[Product],
        orders: &[Order],
        customer_count: usize,
        currency: Currency,
    ) -> Result<Self, CommerceError> {
        let revenue = Money::try_sum(orders.iter().map(|o| &o.total), currency).ok_or(
            CommerceError::CurrencyMismatch {
                expected: currency.code().to_string(),
                got: "mixed".to_string(),
            },
        )?;

        let mut products_per_category = BTreeMap::new();
        let mut co2_per_category = BTreeMap::new();
        for product in products {
            *products_per_category.entry(product.category).or_insert(0) += 1;
            *co2_per_category.entry(product.category).or_insert(0.0) += product.co2_kg;
        }

        let mut orders_per_status: BTreeMap<&'static str, usize> =
            OrderStatus::ALL.iter().map(|s| (s.as_str(), 0)).collect();
        for order in orders {
            *orders_per_status.entry(order.status.as_str()).or_insert(0) += 1;
        }

        Ok(Self {
            product_count: products.len(),
            order_count: orders.len(),
            customer_count,
            revenue,
            total_co2_kg: orders.iter().map(|o| o.total_co2_kg).sum(),
            low_stock_count: products
                .iter()
                .filter(|p| p.stock < crate::catalog::LOW_STOCK_THRESHOLD)
                .count(),
            out_of_stock_count: products.iter().filter(|p| p.is_out_of_stock()).count(),
            pending_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count(),
            products_per_category,
            co2_per_category,
            orders_per_status,
        })
    }

    /// Mean carbon per order, zero with no orders.
    pub fn average_order_co2_kg(&self) -> f64 {
        if self.order_count == 0 {
            return 0.0;
        }
        self.total_co2_kg / self.order_count as f64
    }
}

/// One customer's lifetime order carbon.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CarbonFootprint {
    pub order_count: usize,
    /// Σ order carbon, in kilograms.
    pub total_co2_kg: f64,
    /// Carbon per category, largest first.
    pub by_category: Vec<(Category, f64)>,
    pub rating: CarbonLevel,
    /// min(total / 100 kg, 1) as a percentage.
    pub progress_percent: f64,
}

impl CarbonFootprint {
    /// Footprint of every order placed by `user_id`.
    pub fn for_user(orders: &[Order], user_id: &UserId) -> Self {
        let mine: Vec<&Order> = orders.iter().filter(|o| &o.user_id == user_id).collect();
        let total_co2_kg: f64 = mine.iter().map(|o| o.total_co2_kg).sum();

        let mut per_category: BTreeMap<Category, f64> = BTreeMap::new();
        for item in mine.iter().flat_map(|o| o.items.iter()) {
            *per_category.entry(item.product.category).or_insert(0.0) += item.line_co2_kg();
        }
        let mut by_category: Vec<(Category, f64)> = per_category.into_iter().collect();
        by_category.sort_by(|a, b| b.1.total_cmp(&a.1));

        Self {
            order_count: mine.len(),
            total_co2_kg,
            by_category,
            rating: CarbonLevel::for_footprint(total_co2_kg),
            progress_percent: (total_co2_kg / FOOTPRINT_SCALE_KG * 100.0).min(100.0),
        }
    }

    /// Share of the total carbon in one category, as a percentage.
    pub fn category_share(&self, co2_kg: f64) -> f64 {
        if self.total_co2_kg == 0.0 {
            return 0.0;
        }
        co2_kg / self.total_co2_kg * 100.0
    }
}
