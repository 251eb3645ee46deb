use crate::error::StorageError;

/// Key-value store trait - abstraction over the persisted client state
/// (browser local storage, a JSON file, an in-memory map).
///
/// Access is synchronous: the client runs on one logical thread and never
/// interleaves two writers.
pub trait KeyValueStore: Send + Sync {
    /// Get a value, `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Set a value, overwriting any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Check if a key exists.
    fn contains(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get(key)?.is_some())
    }
}
