//! Persistence of the storefront over an [`eco_store::Store`].
//!
//! | Key | Value |
//! |---|---|
//! | `ecobazaar:state` | [`AppState`] |
//! | `cart:<user id>` | [`Cart`] line items |
//! | `wishlist:<user id>` | [`Wishlist`] products |

use eco_store::store_key;
pub use eco_store::Store;

use crate::cart::Cart;
use crate::ids::UserId;
use crate::money::Currency;
use crate::state::AppState;
use crate::wishlist::Wishlist;
use crate::CommerceError;

/// Key holding the application snapshot.
pub const STATE_KEY: &str = "ecobazaar:state";

/// Loads and saves storefront documents.
#[derive(Debug, Clone)]
pub struct Repository {
    store: Store,
    currency: Currency,
}

impl Repository {
    /// Wrap a store. `currency` prices the demo catalog on first load.
    pub fn new(store: Store, currency: Currency) -> Self {
        Self { store, currency }
    }

    /// A repository over an in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Store::in_memory(), Currency::default())
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// The saved snapshot, or a fresh one seeded with the demo catalog.
    pub fn load(&self) -> Result<AppState, CommerceError> {
        match self.store.get::<AppState>(STATE_KEY)? {
            Some(state) => Ok(state),
            None => {
                tracing::info!(currency = %self.currency, "no saved state, seeding demo catalog");
                Ok(AppState::seeded(self.currency))
            }
        }
    }

    /// Overwrite the whole snapshot.
    pub fn save(&self, state: &AppState) -> Result<(), CommerceError> {
        self.store.set(STATE_KEY, state)?;
        tracing::debug!(
            users = state.users.len(),
            products = state.products.len(),
            orders = state.orders.len(),
            "state saved"
        );
        Ok(())
    }

    pub fn load_cart(&self, user_id: &UserId) -> Result<Cart, CommerceError> {
        Ok(self.store.get_or_default(&cart_key(user_id))?)
    }

    pub fn save_cart(&self, user_id: &UserId, cart: &Cart) -> Result<(), CommerceError> {
        Ok(self.store.set(&cart_key(user_id), cart)?)
    }

    pub fn load_wishlist(&self, user_id: &UserId) -> Result<Wishlist, CommerceError> {
        Ok(self.store.get_or_default(&wishlist_key(user_id))?)
    }

    pub fn save_wishlist(&self, user_id: &UserId, wishlist: &Wishlist) -> Result<(), CommerceError> {
        Ok(self.store.set(&wishlist_key(user_id), wishlist)?)
    }
}

fn cart_key(user_id: &UserId) -> String {
    store_key!("cart", user_id.as_str())
}

fn wishlist_key(user_id: &UserId) -> String {
    store_key!("wishlist", user_id.as_str())
}
