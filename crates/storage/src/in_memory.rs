use std::collections::HashMap;
use std::sync::RwLock;

use crate::kv::{KeyValueStore, StorageError};

/// In-memory key/value backend.
///
/// Intended for tests and for sessions with no durable context. Not
/// optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value directly, bypassing the port. Test setup helper.
    pub fn seed(&self, key: impl Into<String>, value: impl Into<String>) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.into(), value.into());
        }
    }

    /// Number of stored keys. Test assertion helper.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for InMemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::LockPoisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn erase(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::LockPoisoned)?;
        entries.remove(key);
        Ok(())
    }
}
