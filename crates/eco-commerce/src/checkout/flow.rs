//! Turning a cart into an order.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::checkout::{Order, PaymentMode, ShippingAddress};
use crate::ids::UserId;
use crate::CommerceError;

/// Everything the checkout form collects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CheckoutRequest {
    /// Delivery address.
    pub address: ShippingAddress,
    /// Payment mode.
    pub payment_mode: PaymentMode,
    /// Coupon code, if one was entered.
    pub coupon_code: Option<String>,
}

impl CheckoutRequest {
    /// Create a request with no coupon.
    pub fn new(address: ShippingAddress, payment_mode: PaymentMode) -> Self {
        Self {
            address,
            payment_mode,
            coupon_code: None,
        }
    }

    /// Set the coupon code.
    pub fn with_coupon(mut self, code: impl Into<String>) -> Self {
        self.coupon_code = Some(code.into());
        self
    }

    /// Validate and price the cart, producing a pending order.
    ///
    /// The address is checked before the cart; an unknown coupon is not an
    /// error and simply yields no discount.
    pub fn prepare_order(
        &self,
        user_id: &UserId,
        user_name: &str,
        cart: &Cart,
    ) -> Result<Order, CommerceError> {
        self.address.validate()?;
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let summary = cart.summary(self.coupon_code.as_deref())?;
        Ok(Order::new(
            user_id.clone(),
            user_name,
            cart.items.clone(),
            &summary,
            self.address.clone(),
            self.payment_mode,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Product};
    use crate::checkout::OrderStatus;
    use crate::money::{Currency, Money};

    fn cart() -> Cart {
        let product = Product::new(
            "Jute Tote",
            "Loom & Leaf",
            Money::from_whole(500, Currency::INR),
            1.0,
            Category::Bags,
        )
        .with_stock(5);
        let mut cart = Cart::new();
        cart.add_item(&product, 1).unwrap();
        cart
    }

    fn request(pincode: &str) -> CheckoutRequest {
        CheckoutRequest::new(
            ShippingAddress::new("12 MG Road", "Bengaluru", "Karnataka", pincode),
            PaymentMode::Upi,
        )
    }

    #[test]
    fn test_prepare_order() {
        let order = request("560001")
            .with_coupon("ECO10")
            .prepare_order(&UserId::new("u1"), "Asha", &cart())
            .unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert!(!order.review_given);
        assert_eq!(order.total, Money::from_whole(475, Currency::INR));
        assert_eq!(order.eco_points_earned, 10);
        assert_eq!(order.item_count(), 1);
        assert_eq!(order.payment_mode, PaymentMode::Upi);
    }

    #[test]
    fn test_rejects_bad_pincode() {
        let result = request("56000").prepare_order(&UserId::new("u1"), "Asha", &cart());
        assert!(matches!(result, Err(CommerceError::InvalidPincode(_))));

        let result = request("abcdef").prepare_order(&UserId::new("u1"), "Asha", &cart());
        assert!(matches!(result, Err(CommerceError::InvalidPincode(_))));
    }

    #[test]
    fn test_rejects_empty_cart() {
        let result = request("560001").prepare_order(&UserId::new("u1"), "Asha", &Cart::new());
        assert!(matches!(result, Err(CommerceError::EmptyCart)));
    }
}
