//! Order types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::{CheckoutSummary, LineItem};
use crate::checkout::ShippingAddress;
use crate::ids::{OrderId, UserId};
use crate::money::Money;
use crate::CommerceError;

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed, awaiting packing.
    #[default]
    Pending,
    /// Packed and ready to ship.
    Packed,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
}

impl OrderStatus {
    /// Statuses in fulfilment order.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Packed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Packed => "packed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Packed => "Packed",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }

    /// Position in the fulfilment sequence, 0 for pending.
    pub fn progress(&self) -> usize {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::Packed => 1,
            OrderStatus::Shipped => 2,
            OrderStatus::Delivered => 3,
        }
    }

    /// Check if order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for OrderStatus {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| CommerceError::UnknownValue {
                kind: "order status",
                value: s.to_string(),
            })
    }
}

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMode {
    /// Cash on delivery.
    #[default]
    Cod,
    Upi,
    Card,
}

impl PaymentMode {
    pub const ALL: [PaymentMode; 3] = [PaymentMode::Cod, PaymentMode::Upi, PaymentMode::Card];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMode::Cod => "cod",
            PaymentMode::Upi => "upi",
            PaymentMode::Card => "card",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMode::Cod => "Cash on Delivery",
            PaymentMode::Upi => "UPI",
            PaymentMode::Card => "Credit/Debit Card",
        }
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for PaymentMode {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        PaymentMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| CommerceError::UnknownValue {
                kind: "payment mode",
                value: s.to_string(),
            })
    }
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Customer who placed the order.
    pub user_id: UserId,
    /// Customer name at the time of ordering.
    pub user_name: String,
    /// Line items copied from the cart.
    pub items: Vec<LineItem>,
    /// Sum of line prices.
    pub subtotal: Money,
    /// Sum of line delivery charges.
    pub delivery_total: Money,
    /// Tax.
    pub tax_total: Money,
    /// Coupon discount.
    pub discount_total: Money,
    /// Amount charged.
    pub total: Money,
    /// Carbon of the whole order, in kilograms.
    pub total_co2_kg: f64,
    /// Points earned by this order.
    pub eco_points_earned: i64,
    /// Fulfilment status.
    pub status: OrderStatus,
    /// Whether the customer has reviewed this order.
    #[serde(default)]
    pub review_given: bool,
    /// Delivery address.
    pub address: ShippingAddress,
    /// Payment mode.
    pub payment_mode: PaymentMode,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Build a pending order from priced line items.
    pub fn new(
        user_id: UserId,
        user_name: impl Into<String>,
        items: Vec<LineItem>,
        summary: &CheckoutSummary,
        address: ShippingAddress,
        payment_mode: PaymentMode,
    ) -> Self {
        Self {
            id: OrderId::generate(),
            user_id,
            user_name: user_name.into(),
            items,
            subtotal: summary.subtotal,
            delivery_total: summary.delivery_total,
            tax_total: summary.tax_total,
            discount_total: summary.discount_total,
            total: summary.grand_total,
            total_co2_kg: summary.total_co2_kg,
            eco_points_earned: summary.eco_points,
            status: OrderStatus::Pending,
            review_given: false,
            address,
            payment_mode,
            placed_at: Utc::now(),
        }
    }

    /// Total units across all line items.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Whether the order can still be reviewed.
    pub fn can_review(&self) -> bool {
        !self.review_given
    }
}
