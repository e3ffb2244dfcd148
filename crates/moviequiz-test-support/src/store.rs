//! Test stores — `KeyValueStore` implementations for tests.

use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

use moviequiz_core::storage::{KeyValueStore, StorageError, StoredValue};

/// A store backed by a `HashMap`. Counts `set_all` batches so tests can check
/// that a game is persisted in one write.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    values: Mutex<HashMap<String, StoredValue>>,
    batches: Mutex<usize>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `entries`.
    #[must_use]
    pub fn with_entries(entries: &[(&str, StoredValue)]) -> Self {
        let store = Self::new();
        {
            let mut values = store.values.lock().unwrap();
            for (key, value) in entries {
                values.insert((*key).to_owned(), value.clone());
            }
        }
        store
    }

    /// Returns a copy of the raw value under `key`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn raw(&self, key: &str) -> Option<StoredValue> {
        self.values.lock().unwrap().get(key).cloned()
    }

    /// Returns how many `set_all` batches were applied.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn batch_count(&self) -> usize {
        *self.batches.lock().unwrap()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<StoredValue>, StorageError> {
        let values = self.values.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set_all(&self, entries: &[(&str, StoredValue)]) -> Result<(), StorageError> {
        let mut values = self.values.lock().map_err(|_| StorageError::Poisoned)?;
        for (key, value) in entries {
            values.insert((*key).to_owned(), value.clone());
        }
        *self.batches.lock().map_err(|_| StorageError::Poisoned)? += 1;
        Ok(())
    }
}

/// A store that reads as empty and rejects every write. Useful for testing
/// error-handling paths.
#[derive(Debug)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<StoredValue>, StorageError> {
        Ok(None)
    }

    fn set_all(&self, _entries: &[(&str, StoredValue)]) -> Result<(), StorageError> {
        Err(StorageError::Io(io::Error::other("disk full")))
    }
}
