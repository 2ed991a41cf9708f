use std::collections::HashMap;

use super::{StorageError, StorageKey, StoragePort};

/// In-memory adapter for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemStore {
    map: HashMap<StorageKey, String>,
}

impl MemStore {
    pub fn new() -> Self {
        MemStore::default()
    }

    /// Pre-seed a key, e.g. with a malformed blob for decode-failure tests.
    pub fn seed(&mut self, key: StorageKey, value: &str) {
        self.map.insert(key, value.to_string());
    }

    pub fn contains(&self, key: StorageKey) -> bool {
        self.map.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl StoragePort for MemStore {
    fn load(&self, key: StorageKey) -> Option<String> {
        self.map.get(&key).cloned()
    }

    fn save(&mut self, key: StorageKey, value: &str) -> Result<(), StorageError> {
        self.map.insert(key, value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: StorageKey) -> Result<(), StorageError> {
        self.map.remove(&key);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.map.clear();
        Ok(())
    }
}
