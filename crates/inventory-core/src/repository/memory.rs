//! In-memory key-value store
//!
//! Stand-in for browser storage in tests and non-browser hosts.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::traits::KeyValueStore;
use crate::domain::{InventoryError, InventoryResult};

/// Shared in-memory map; clones see the same data
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> InventoryResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| InventoryError::Storage("memory store lock poisoned".into()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> InventoryResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> InventoryResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> InventoryResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn keys(&self) -> InventoryResult<Vec<String>> {
        Ok(self.lock()?.keys().cloned().collect())
    }
}
