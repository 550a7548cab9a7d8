//! Commerce error types.

use thiserror::Error;

use crate::accounts::Role;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Order not found.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// User not found.
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Insufficient inventory.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientInventory {
        product_id: String,
        requested: i64,
        available: i64,
    },

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Cart has no items to check out.
    #[error("Cart is empty")]
    EmptyCart,

    /// Invalid coupon code.
    #[error("Invalid coupon code: {0}")]
    InvalidCouponCode(String),

    /// A required form field was left blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Pincode is not exactly six digits.
    #[error("Invalid pincode {0:?}: expected a 6-digit number")]
    InvalidPincode(String),

    /// Malformed email address.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Phone number is not exactly ten digits.
    #[error("Invalid phone number {0:?}: expected 10 digits")]
    InvalidPhone(String),

    /// Password does not meet the strength rules.
    #[error("Password must be at least 8 characters with upper and lower case letters, a number and a special character (!@#$%^&*)")]
    WeakPassword,

    /// Password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Email already registered.
    #[error("This email is already registered: {0}")]
    EmailTaken(String),

    /// No account for the email.
    #[error("No account found with this email: {0}")]
    AccountNotFound(String),

    /// Account exists under another role.
    #[error("Account is registered as {0}")]
    RoleMismatch(Role),

    /// Wrong password.
    #[error("Incorrect password")]
    IncorrectPassword,

    /// Operation requires a signed-in user.
    #[error("Not signed in")]
    NotSignedIn,

    /// Operation requires the admin role.
    #[error("Admin access required")]
    AdminRequired,

    /// Review rating outside 1-5.
    #[error("Invalid rating {0}: expected 1 to 5 stars")]
    InvalidRating(u8),

    /// Review has no text.
    #[error("Please write a review")]
    EmptyReview,

    /// The order was already reviewed.
    #[error("Order {0} has already been reviewed")]
    AlreadyReviewed(String),

    /// Reviewed product is not part of the order.
    #[error("Product {product_id} is not part of order {order_id}")]
    ProductNotInOrder { order_id: String, product_id: String },

    /// Negative price or delivery charge.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Negative stock level.
    #[error("Invalid stock level: {0}")]
    InvalidStock(i64),

    /// Negative or non-finite carbon value.
    #[error("Invalid carbon footprint: {0}")]
    InvalidCarbon(f64),

    /// Unknown category name.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Unknown enum value in user input.
    #[error("Unknown {kind}: {value}")]
    UnknownValue { kind: &'static str, value: String },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[cfg(feature = "storage")]
impl From<eco_store::StoreError> for CommerceError {
    fn from(e: eco_store::StoreError) -> Self {
        CommerceError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
