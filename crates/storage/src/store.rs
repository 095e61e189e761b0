//! Storage trait and in-memory implementation.

use crate::StorageResult;

/// Trait for keyed persistence of structured text values.
///
/// Values are opaque to the storage layer; serialization belongs to the
/// consumers. All operations are synchronous.
pub trait KeyValueStorage: Send + Sync {
    /// Reads the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes the value stored under `key`. Removing an absent key is not
    /// an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// In-memory implementation for tests and session-scoped data.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: std::sync::RwLock<std::collections::HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates a new empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let values = self.values.read().unwrap();
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut values = self.values.write().unwrap();
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut values = self.values.write().unwrap();
        values.remove(key);
        Ok(())
    }
}
