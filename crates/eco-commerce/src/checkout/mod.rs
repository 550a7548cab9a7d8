//! Checkout module.
//!
//! Contains the checkout request, shipping addresses and orders.

mod address;
mod flow;
mod order;

pub use address::{is_valid_pincode, ShippingAddress, PINCODE_LEN};
pub use flow::CheckoutRequest;
pub use order::{Order, OrderStatus, PaymentMode};
