//! Type-safe JSON key-value store for EcoBazaar.
//!
//! Stands in for the browser's local storage: every key holds one JSON
//! document and writes replace the whole document.
//!
//! # Example
//!
//! ```rust,ignore
//! use eco_store::{store_key, Store};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Wishlist {
//!     product_ids: Vec<String>,
//! }
//!
//! let store = Store::open("./data")?;
//!
//! // Store a value
//! store.set(&store_key!("wishlist", user_id), &wishlist)?;
//!
//! // Retrieve a value
//! let wishlist: Option<Wishlist> = store.get(&store_key!("wishlist", user_id))?;
//!
//! // Delete a value
//! store.delete(&store_key!("wishlist", user_id))?;
//! ```

mod backend;
mod error;
mod store;

pub use backend::{Backend, FileBackend, MemoryBackend};
pub use error::StoreError;
pub use store::Store;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{store_key, Backend, FileBackend, MemoryBackend, Store, StoreError};
}

/// Helper to build store keys with namespacing.
///
/// # Example
///
/// ```
/// let key = eco_store::store_key!("cart", "user123");
/// assert_eq!(key, "cart:user123");
/// ```
#[macro_export]
macro_rules! store_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}
