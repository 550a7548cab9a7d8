//! Typed store wrapper with automatic serialization.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::{Backend, FileBackend, MemoryBackend, StoreError};

/// Type-safe store over a [`Backend`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`. Cloning is cheap and clones share
/// the same backend.
#[derive(Debug, Clone)]
pub struct Store {
    backend: Arc<dyn Backend>,
}

impl Store {
    /// Open a directory-backed store.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let store = Store::open("./ecobazaar-data")?;
    /// ```
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Ok(Self::with_backend(FileBackend::open(root)?))
    }

    /// Create a store that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self::with_backend(MemoryBackend::new())
    }

    /// Wrap an arbitrary backend.
    pub fn with_backend(backend: impl Backend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cart: Option<Vec<LineItem>> = store.get("cart:user123")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.backend.read(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Get a value, falling back to `T::default()` when the key is absent.
    pub fn get_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T, StoreError> {
        Ok(self.get(key)?.unwrap_or_default())
    }

    /// Set a value in the store, replacing any previous document.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// store.set("cart:user123", &cart)?;
    /// ```
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.backend.write(key, &bytes)
    }

    /// Delete a value from the store.
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.backend.remove(key)
    }

    /// Check if a key exists in the store.
    pub fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.backend.read(key)?.is_some())
    }

    /// Get all keys in the store.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        self.backend.keys()
    }

    /// Get all keys under a namespace prefix (e.g. `"cart"`).
    pub fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let namespace = format!("{}:", prefix);
        Ok(self
            .keys()?
            .into_iter()
            .filter(|k| k.starts_with(&namespace))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store_key;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Basket {
        items: Vec<String>,
        total: i64,
    }

    #[test]
    fn test_set_get_memory() {
        let store = Store::in_memory();
        let basket = Basket {
            items: vec!["bamboo toothbrush".to_string()],
            total: 199,
        };

        store.set("basket:1", &basket).unwrap();
        let loaded: Option<Basket> = store.get("basket:1").unwrap();
        assert_eq!(loaded, Some(basket));
    }

    #[test]
    fn test_get_or_default() {
        let store = Store::in_memory();
        let basket: Basket = store.get_or_default("basket:missing").unwrap();
        assert_eq!(basket, Basket::default());
    }

    #[test]
    fn test_exists_and_delete() {
        let store = Store::in_memory();
        store.set("k", &1_i64).unwrap();
        assert!(store.exists("k").unwrap());
        store.delete("k").unwrap();
        assert!(!store.exists("k").unwrap());
    }

    #[test]
    fn test_type_mismatch_is_serialize_error() {
        let store = Store::in_memory();
        store.set("k", &"not a number").unwrap();
        let result: Result<Option<i64>, _> = store.get("k");
        assert!(matches!(result, Err(StoreError::Serialize(_))));
    }

    #[test]
    fn test_file_store_persists_across_handles() {
        let dir = tempfile::tempdir().unwrap();

        let store = Store::open(dir.path()).unwrap();
        store.set(&store_key!("cart", "u1"), &vec![1, 2]).unwrap();
        drop(store);

        let reopened = Store::open(dir.path()).unwrap();
        let cart: Option<Vec<i32>> = reopened.get("cart:u1").unwrap();
        assert_eq!(cart, Some(vec![1, 2]));
    }

    #[test]
    fn test_keys_with_prefix() {
        let store = Store::in_memory();
        store.set(&store_key!("cart", "a"), &0).unwrap();
        store.set(&store_key!("cart", "b"), &0).unwrap();
        store.set(&store_key!("wishlist", "a"), &0).unwrap();

        assert_eq!(
            store.keys_with_prefix("cart").unwrap(),
            vec!["cart:a".to_string(), "cart:b".to_string()]
        );
    }

    #[test]
    fn test_store_key_macro() {
        assert_eq!(store_key!("cart", 42), "cart:42");
        assert_eq!(store_key!("a", "b", 3), "a:b:3");
    }
}
