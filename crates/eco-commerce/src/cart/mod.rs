//! Shopping cart module.
//!
//! Contains the cart, line items, coupons and the pricing calculator.

mod cart;
mod coupon;
mod pricing;

pub use cart::{Cart, LineItem, MAX_QUANTITY_PER_ITEM};
pub use coupon::{Coupon, CouponOutcome, DiscountRule};
pub use pricing::{summarize, CheckoutSummary, TAX_PERCENT};
