//! Storage backends.
//!
//! A backend moves raw JSON bytes in and out of a key; [`Store`](crate::Store)
//! layers typed serialization on top.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::StoreError;

const EXTENSION: &str = "json";
const SEPARATOR: char = ':';
const ENCODED_SEPARATOR: &str = "__";

/// Raw byte storage addressed by string keys.
pub trait Backend: Send + Sync + fmt::Debug {
    /// Read the bytes stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Replace the bytes stored under `key`.
    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// List every stored key, sorted.
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}

/// One JSON document per key inside a directory.
///
/// `cart:42` is stored as `<root>/cart__42.json`.
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Open (and create if needed) a directory-backed store.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StoreError::Open {
            path: root.display().to_string(),
            source,
        })?;
        tracing::debug!(root = %root.display(), "opened file store");
        Ok(Self { root })
    }

    /// Directory holding the documents.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        let file_name = format!(
            "{}.{}",
            key.replace(SEPARATOR, ENCODED_SEPARATOR),
            EXTENSION
        );
        Ok(self.root.join(file_name))
    }

    fn io_error(key: &str, source: std::io::Error) -> StoreError {
        StoreError::Io {
            key: key.to_string(),
            source,
        }
    }
}

impl Backend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let path = self.path_for(key)?;

        // Write next to the target and rename so readers never see a partial document.
        let mut tmp =
            tempfile::NamedTempFile::new_in(&self.root).map_err(|e| Self::io_error(key, e))?;
        tmp.write_all(bytes).map_err(|e| Self::io_error(key, e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| Self::io_error(key, e))?;
        tmp.persist(&path)
            .map_err(|e| Self::io_error(key, e.error))?;

        tracing::trace!(key, bytes = bytes.len(), "wrote document");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let entries = fs::read_dir(&self.root).map_err(|e| Self::io_error("*", e))?;

        let mut keys = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| Self::io_error("*", e))?.path();
            if path.extension().map_or(true, |ext| ext != EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.replace(ENCODED_SEPARATOR, &SEPARATOR.to_string()));
            }
        }
        keys.sort();
        Ok(keys)
    }
}

/// Process-local store for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        validate_key(key)?;
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        validate_key(key)?;
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.keys().cloned().collect())
    }
}

/// Keys become file names, so they must not escape the store directory.
fn validate_key(key: &str) -> Result<(), StoreError> {
    let invalid = key.is_empty()
        || key.starts_with('.')
        || key.contains(ENCODED_SEPARATOR)
        || key
            .chars()
            .any(|c| c == '/' || c == '\\' || c.is_control());

    if invalid {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_backend_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();

        backend.write("cart:42", b"[1,2,3]").unwrap();
        assert_eq!(backend.read("cart:42").unwrap(), Some(b"[1,2,3]".to_vec()));
        assert!(dir.path().join("cart__42.json").exists());
    }

    #[test]
    fn test_file_backend_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();
        assert_eq!(backend.read("nothing").unwrap(), None);
        backend.remove("nothing").unwrap();
    }

    #[test]
    fn test_file_backend_keys_decode_separator() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();

        backend.write("wishlist:7", b"[]").unwrap();
        backend.write("ecobazaar:state", b"{}").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        assert_eq!(
            backend.keys().unwrap(),
            vec!["ecobazaar:state".to_string(), "wishlist:7".to_string()]
        );
    }

    #[test]
    fn test_file_backend_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();

        backend.write("k", b"1").unwrap();
        backend.write("k", b"22").unwrap();
        assert_eq!(backend.read("k").unwrap(), Some(b"22".to_vec()));
    }

    #[test]
    fn test_invalid_keys_rejected() {
        let backend = MemoryBackend::new();
        for key in ["", "../etc", "a/b", ".hidden", "a__b"] {
            assert!(
                matches!(backend.write(key, b"x"), Err(StoreError::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_memory_backend_remove() {
        let backend = MemoryBackend::new();
        backend.write("a", b"1").unwrap();
        backend.remove("a").unwrap();
        assert_eq!(backend.read("a").unwrap(), None);
        assert!(backend.keys().unwrap().is_empty());
    }
}
