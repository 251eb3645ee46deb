//! In-memory key-value store - used in tests and for throwaway sessions.

use std::collections::HashMap;
use std::sync::RwLock;

use press_core::StorageError;
use press_core::ports::KeyValueStore;

/// In-memory store using a simple HashMap behind a RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryStore {
    store: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    fn poisoned<E>(_: E) -> StorageError {
        StorageError::Unavailable("store lock poisoned".to_string())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let store = self.store.read().map_err(Self::poisoned)?;
        Ok(store.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut store = self.store.write().map_err(Self::poisoned)?;
        store.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut store = self.store.write().map_err(Self::poisoned)?;
        store.remove(key);
        Ok(())
    }
}
