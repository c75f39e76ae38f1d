//! Persistence bridge between the cart and a string-keyed store.
//!
//! The cart collection is stored as one record: a JSON array of
//! `{"id", "quantity"}` objects under a fixed logical key. The bridge owns
//! serialization and fallback behavior; [`crate::store::CartStore`] never
//! sees encoding or I/O concerns.
//!
//! Corruption never aborts cart initialization: a malformed record, an
//! unreadable store, or entries violating the cart invariants all degrade to
//! an empty (or filtered) collection with a warning.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use cartful_core::CartEntry;

use crate::error::{PersistError, StoreError};

/// The fixed logical key the cart collection is stored under.
pub const CART_STORAGE_KEY: &str = "shopping-cart";

/// A generic string-backed key-value store.
///
/// This is the seam that lets the persistence medium be swapped without
/// touching cart logic: a browser-profile file, an in-memory map for tests,
/// or whatever the host application provides.
pub trait KeyValueStore {
    /// Read the raw string stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, overwriting any prior value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing medium cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory key-value store for ephemeral carts and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// File-backed key-value store: a single JSON object file mapping keys to
/// string values.
///
/// Writes go through a temp file and rename so a crash mid-write leaves the
/// previous file intact. A missing file is an empty store; a file that is
/// not a valid key-value map is treated like corrupt cart data - logged and
/// replaced on the next write.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStore {
    /// Open the store backed by the file at `path`, creating an empty store
    /// when the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(values) => values,
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "store file is not a valid key-value map; starting empty"
                    );
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(StoreError::Io(err)),
        };

        Ok(Self { path, values })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let raw = serde_json::to_string_pretty(&self.values)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value.to_owned());
        self.flush()
    }
}

/// Bridges the cart entry collection to a durable [`KeyValueStore`] under a
/// fixed logical key.
#[derive(Debug)]
pub struct PersistenceBridge<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceBridge<S> {
    /// Create a bridge over `store` using [`CART_STORAGE_KEY`].
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_key(store, CART_STORAGE_KEY)
    }

    /// Create a bridge over `store` using a custom logical key.
    #[must_use]
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// The logical key the cart collection is stored under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// A reference to the backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the persisted cart collection.
    ///
    /// Total by design: an absent record is the default empty cart, and a
    /// malformed one is logged and replaced by an empty cart. Entries that
    /// violate the cart invariants (non-positive quantity or item ID,
    /// duplicate item ID) are dropped rather than admitted.
    pub fn load(&self) -> Vec<CartEntry> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(key = %self.key, error = %err, "cart store unreadable; starting empty");
                return Vec::new();
            }
        };

        let entries: Vec<CartEntry> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(key = %self.key, error = %err, "persisted cart malformed; starting empty");
                return Vec::new();
            }
        };

        sanitize(entries)
    }

    /// Serialize `entries` and overwrite the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] if encoding fails or the store rejects the
    /// write.
    pub fn save(&mut self, entries: &[CartEntry]) -> Result<(), PersistError> {
        let raw = serde_json::to_string(entries)?;
        self.store.set(&self.key, &raw)?;
        debug!(key = %self.key, entries = entries.len(), "cart persisted");
        Ok(())
    }
}

/// Drop loaded entries that violate the cart invariants, keeping the first
/// occurrence of each item ID.
fn sanitize(entries: Vec<CartEntry>) -> Vec<CartEntry> {
    let mut kept: Vec<CartEntry> = Vec::with_capacity(entries.len());
    let mut dropped = 0usize;

    for entry in entries {
        let duplicate = kept.iter().any(|e| e.item_id() == entry.item_id());
        if entry.is_valid() && !duplicate {
            kept.push(entry);
        } else {
            dropped += 1;
        }
    }

    if dropped > 0 {
        warn!(dropped, "dropped persisted cart entries violating invariants");
    }
    kept
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cartful_core::ItemId;
    use tempfile::tempdir;

    use super::*;

    fn entry(id: i32, quantity: u32) -> CartEntry {
        CartEntry::new(ItemId::new(id), quantity).unwrap()
    }

    #[test]
    fn test_load_absent_key_is_empty() {
        let bridge = PersistenceBridge::new(MemoryStore::new());
        assert!(bridge.load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let mut bridge = PersistenceBridge::new(MemoryStore::new());
        let entries = vec![entry(5, 2), entry(7, 1)];

        bridge.save(&entries).unwrap();
        assert_eq!(bridge.load(), entries);
    }

    #[test]
    fn test_save_writes_wire_shape_under_fixed_key() {
        let mut bridge = PersistenceBridge::new(MemoryStore::new());
        bridge.save(&[entry(5, 2)]).unwrap();

        let raw = bridge.store().get(CART_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"[{"id":5,"quantity":2}]"#);
    }

    #[test]
    fn test_load_malformed_record_is_empty() {
        let mut store = MemoryStore::new();
        store.set(CART_STORAGE_KEY, "not json at all {{{").unwrap();

        let bridge = PersistenceBridge::new(store);
        assert!(bridge.load().is_empty());
    }

    #[test]
    fn test_load_wrong_shape_is_empty() {
        let mut store = MemoryStore::new();
        store
            .set(CART_STORAGE_KEY, r#"{"id":5,"quantity":2}"#)
            .unwrap();

        let bridge = PersistenceBridge::new(store);
        assert!(bridge.load().is_empty());
    }

    #[test]
    fn test_load_drops_invariant_violations() {
        let mut store = MemoryStore::new();
        // quantity 0, duplicate id, and negative id among valid entries
        store
            .set(
                CART_STORAGE_KEY,
                r#"[{"id":5,"quantity":2},{"id":9,"quantity":0},{"id":5,"quantity":4},{"id":-1,"quantity":1},{"id":7,"quantity":1}]"#,
            )
            .unwrap();

        let bridge = PersistenceBridge::new(store);
        assert_eq!(bridge.load(), vec![entry(5, 2), entry(7, 1)]);
    }

    #[test]
    fn test_custom_key_is_honored() {
        let mut bridge = PersistenceBridge::with_key(MemoryStore::new(), "other-cart");
        bridge.save(&[entry(3, 1)]).unwrap();

        assert_eq!(bridge.key(), "other-cart");
        assert!(bridge.store().get(CART_STORAGE_KEY).unwrap().is_none());
        assert!(bridge.store().get("other-cart").unwrap().is_some());
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path().join("cart.json")).unwrap();
        assert!(store.get(CART_STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cart.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        drop(store);

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_file_store_corrupt_map_starts_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cart.json");
        fs::write(&path, "][ definitely not a map").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(store.get(CART_STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_file_store_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("cart.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("a", "1").unwrap();
        assert!(path.exists());
    }
}
