//! The application snapshot and the workflows that mutate it.

use serde::{Deserialize, Serialize};

use crate::accounts::{is_valid_phone, Credentials, Registration, User};
use crate::cart::Cart;
use crate::catalog::{demo_catalog, Catalog, Review};
use crate::checkout::{CheckoutRequest, Order, OrderStatus};
use crate::ids::{OrderId, ProductId, UserId};
use crate::money::Currency;
use crate::rewards::credited_points;
use crate::CommerceError;

/// Users, products, orders and the signed-in account.
///
/// Carts and wishlists live outside the snapshot, one per user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppState {
    pub users: Vec<User>,
    pub products: Catalog,
    pub orders: Vec<Order>,
    /// The signed-in account, if any.
    #[serde(default)]
    pub current_user: Option<UserId>,
}

impl AppState {
    /// A fresh store with the demo catalog and no accounts.
    pub fn seeded(currency: Currency) -> Self {
        Self {
            products: demo_catalog(currency),
            ..Self::default()
        }
    }

    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    fn user_mut(&mut self, id: &UserId) -> Result<&mut User, CommerceError> {
        self.users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or_else(|| CommerceError::UserNotFound(id.to_string()))
    }

    /// The signed-in user, if the session points at an existing account.
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref().and_then(|id| self.user(id))
    }

    /// The signed-in user, or `NotSignedIn`.
    pub fn require_user(&self) -> Result<&User, CommerceError> {
        self.current_user().ok_or(CommerceError::NotSignedIn)
    }

    /// The signed-in admin, or an error.
    pub fn require_admin(&self) -> Result<&User, CommerceError> {
        let user = self.require_user()?;
        if !user.is_admin() {
            return Err(CommerceError::AdminRequired);
        }
        Ok(user)
    }

    /// Number of shopper (non-admin) accounts.
    pub fn customer_count(&self) -> usize {
        self.users.iter().filter(|u| !u.is_admin()).count()
    }

    /// Create an account and sign it in.
    pub fn register(&mut self, registration: Registration) -> Result<&User, CommerceError> {
        let user = registration.into_user(&self.users)?;
        tracing::info!(user_id = %user.id, role = %user.role, "account registered");
        self.current_user = Some(user.id.clone());
        self.users.push(user);
        Ok(&self.users[self.users.len() - 1])
    }

    /// Check credentials and sign the account in.
    pub fn login(&mut self, credentials: &Credentials) -> Result<&User, CommerceError> {
        let id = match credentials.authenticate(&self.users) {
            Ok(user) => user.id.clone(),
            Err(e) => {
                tracing::warn!(email = %credentials.email.trim(), error = %e, "login failed");
                return Err(e);
            }
        };
        tracing::info!(user_id = %id, "signed in");
        self.current_user = Some(id);
        self.require_user()
    }

    /// Sign out. Returns whether anyone was signed in.
    pub fn logout(&mut self) -> bool {
        self.current_user.take().is_some()
    }

    /// Change the signed-in user's name and phone.
    pub fn update_profile(&mut self, name: &str, phone: &str) -> Result<&User, CommerceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CommerceError::MissingField("name"));
        }
        if !is_valid_phone(phone) {
            return Err(CommerceError::InvalidPhone(phone.to_string()));
        }
        let id = self.require_user()?.id.clone();
        let user = self.user_mut(&id)?;
        user.name = name.to_string();
        user.phone = phone.to_string();
        Ok(user)
    }

    /// Place an order for the signed-in user and empty their cart.
    ///
    /// The order's eco-points are credited to the account; with
    /// `floor_negative_points` a negative award credits nothing.
    pub fn place_order(
        &mut self,
        cart: &mut Cart,
        request: &CheckoutRequest,
        floor_negative_points: bool,
    ) -> Result<&Order, CommerceError> {
        let user = self.require_user()?;
        let order = request.prepare_order(&user.id, &user.name, cart)?;
        let user_id = user.id.clone();

        let points = credited_points(order.eco_points_earned, floor_negative_points);
        self.user_mut(&user_id)?.record_order(points, order.total_co2_kg);

        tracing::info!(
            order_id = %order.id,
            user_id = %user_id,
            total = %order.total,
            co2_kg = order.total_co2_kg,
            eco_points = points,
            "order placed"
        );
        self.orders.push(order);
        cart.clear();
        Ok(&self.orders[self.orders.len() - 1])
    }

    /// Orders placed by a user, oldest first.
    pub fn orders_for(&self, user_id: &UserId) -> Vec<&Order> {
        self.orders.iter().filter(|o| &o.user_id == user_id).collect()
    }

    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    fn order_mut(&mut self, id: &OrderId) -> Result<&mut Order, CommerceError> {
        self.orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| CommerceError::OrderNotFound(id.to_string()))
    }

    /// Set an order's status. Any status may follow any other.
    pub fn set_order_status(&mut self, id: &OrderId, status: OrderStatus) -> Result<&Order, CommerceError> {
        let order = self.order_mut(id)?;
        tracing::info!(order_id = %id, from = %order.status, to = %status, "order status updated");
        order.status = status;
        Ok(order)
    }

    /// Review a product from one of the signed-in user's orders.
    ///
    /// `product_id` defaults to the order's first item. The product's
    /// average rating is recomputed and the order is marked reviewed.
    pub fn submit_review(
        &mut self,
        order_id: &OrderId,
        product_id: Option<&ProductId>,
        rating: u8,
        comment: &str,
    ) -> Result<&Review, CommerceError> {
        let user = self.require_user()?;
        let (user_id, user_name) = (user.id.clone(), user.name.clone());

        let order = self
            .order(order_id)
            .filter(|o| o.user_id == user_id)
            .ok_or_else(|| CommerceError::OrderNotFound(order_id.to_string()))?;
        if order.review_given {
            return Err(CommerceError::AlreadyReviewed(order_id.to_string()));
        }
        let product_id = match product_id {
            Some(id) if order.items.iter().any(|i| &i.product.id == id) => id.clone(),
            Some(id) => {
                return Err(CommerceError::ProductNotInOrder {
                    order_id: order_id.to_string(),
                    product_id: id.to_string(),
                })
            }
            None => order
                .items
                .first()
                .map(|i| i.product.id.clone())
                .ok_or(CommerceError::EmptyCart)?,
        };

        let review = Review::new(user_id, user_name, rating, comment)?;
        self.products.require(&product_id)?;
        self.order_mut(order_id)?.review_given = true;
        let product = self.products.require_mut(&product_id)?;
        product.add_review(review);
        tracing::info!(order_id = %order_id, product_id = %product_id, rating, "review submitted");

        let index = product.reviews.len() - 1;
        Ok(&product.reviews[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::Role;
    use crate::checkout::{PaymentMode, ShippingAddress};
    use crate::money::Money;

    fn registration(email: &str, role: Role) -> Registration {
        Registration {
            name: "Asha".to_string(),
            email: email.to_string(),
            phone: "9876543210".to_string(),
            password: "Green#2024".to_string(),
            confirm_password: "Green#2024".to_string(),
            role,
        }
    }

    fn request() -> CheckoutRequest {
        CheckoutRequest::new(
            ShippingAddress::new("12 MG Road", "Bengaluru", "Karnataka", "560001"),
            PaymentMode::Cod,
        )
    }

    fn shopper() -> AppState {
        let mut state = AppState::seeded(Currency::INR);
        state.register(registration("asha@example.com", Role::User)).unwrap();
        state
    }

    #[test]
    fn test_register_signs_in() {
        let state = shopper();
        assert_eq!(state.require_user().unwrap().email, "asha@example.com");
        assert!(matches!(state.require_admin(), Err(CommerceError::AdminRequired)));
        assert_eq!(state.customer_count(), 1);
    }

    #[test]
    fn test_login_logout() {
        let mut state = shopper();
        assert!(state.logout());
        assert!(!state.logout());
        assert!(matches!(state.require_user(), Err(CommerceError::NotSignedIn)));

        let creds = Credentials::new("asha@example.com", "Green#2024", Role::User);
        assert_eq!(state.login(&creds).unwrap().name, "Asha");

        let bad = Credentials::new("asha@example.com", "nope", Role::User);
        assert!(state.login(&bad).is_err());
    }

    #[test]
    fn test_place_order_credits_points_and_clears_cart() {
        let mut state = shopper();
        let tote = state.products.require(&ProductId::new("6")).unwrap().clone();
        let mut cart = Cart::new();
        cart.add_item(&tote, 2).unwrap();

        let order = state.place_order(&mut cart, &request(), false).unwrap();
        assert_eq!(order.subtotal, Money::from_whole(698, Currency::INR));
        let points = order.eco_points_earned;
        assert_eq!(points, 16);

        assert!(cart.is_empty());
        assert_eq!(state.orders.len(), 1);
        assert_eq!(state.require_user().unwrap().eco_points, 16);
    }

    #[test]
    fn test_place_order_floor_negative_points() {
        let mut state = shopper();
        let sneakers = state.products.require(&ProductId::new("15")).unwrap().clone();
        let mut cart = Cart::new();
        cart.add_item(&sneakers, 8).unwrap();

        let order = state.place_order(&mut cart, &request(), true).unwrap();
        assert!(order.eco_points_earned < 0);
        assert_eq!(state.require_user().unwrap().eco_points, 0);
    }

    #[test]
    fn test_place_order_requires_sign_in() {
        let mut state = AppState::seeded(Currency::INR);
        let mut cart = Cart::new();
        assert!(matches!(
            state.place_order(&mut cart, &request(), false),
            Err(CommerceError::NotSignedIn)
        ));
    }

    #[test]
    fn test_set_order_status_any_transition() {
        let mut state = shopper();
        let tote = state.products.require(&ProductId::new("6")).unwrap().clone();
        let mut cart = Cart::new();
        cart.add_item(&tote, 1).unwrap();
        let id = state.place_order(&mut cart, &request(), false).unwrap().id.clone();

        state.set_order_status(&id, OrderStatus::Delivered).unwrap();
        let order = state.set_order_status(&id, OrderStatus::Packed).unwrap();
        assert_eq!(order.status.progress(), 1);
        assert!(state
            .set_order_status(&OrderId::new("missing"), OrderStatus::Shipped)
            .is_err());
    }

    #[test]
    fn test_submit_review() {
        let mut state = shopper();
        let tote_id = ProductId::new("6");
        let tote = state.products.require(&tote_id).unwrap().clone();
        let mut cart = Cart::new();
        cart.add_item(&tote, 1).unwrap();
        let order_id = state.place_order(&mut cart, &request(), false).unwrap().id.clone();

        let review = state.submit_review(&order_id, None, 2, "Handles frayed").unwrap();
        assert_eq!(review.rating, 2);
        assert_eq!(state.products.require(&tote_id).unwrap().rating, 2.0);
        assert!(state.order(&order_id).unwrap().review_given);

        assert!(matches!(
            state.submit_review(&order_id, None, 5, "Second go"),
            Err(CommerceError::AlreadyReviewed(_))
        ));
    }

    #[test]
    fn test_review_rejects_foreign_product() {
        let mut state = shopper();
        let tote = state.products.require(&ProductId::new("6")).unwrap().clone();
        let mut cart = Cart::new();
        cart.add_item(&tote, 1).unwrap();
        let order_id = state.place_order(&mut cart, &request(), false).unwrap().id.clone();

        assert!(matches!(
            state.submit_review(&order_id, Some(&ProductId::new("1")), 4, "Nice"),
            Err(CommerceError::ProductNotInOrder { .. })
        ));
        assert!(matches!(
            state.submit_review(&order_id, None, 0, "Nice"),
            Err(CommerceError::InvalidRating(0))
        ));
        assert!(!state.order(&order_id).unwrap().review_given);
    }

    #[test]
    fn test_update_profile() {
        let mut state = shopper();
        let user = state.update_profile(" Asha R ", "9123456780").unwrap();
        assert_eq!(user.name, "Asha R");
        assert!(matches!(
            state.update_profile("Asha", "123"),
            Err(CommerceError::InvalidPhone(_))
        ));
    }
}
