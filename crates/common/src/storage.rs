// =============================================================================
// Mobaus Common - Preference Storage
// =============================================================================
// Table of Contents:
// 1. Error Types
// 2. PreferenceStore Trait
// 3. In-Memory Store
// 4. No-op Store
// =============================================================================

use std::collections::HashMap;

use parking_lot::RwLock;
use thiserror::Error;

// -----------------------------------------------------------------------------
// 1. Error Types
// -----------------------------------------------------------------------------

/// Persistence errors. Callers treat every variant as non-fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Write rejected for {key}: {reason}")]
    Rejected { key: String, reason: String },
}

// -----------------------------------------------------------------------------
// 2. PreferenceStore Trait
// -----------------------------------------------------------------------------

/// String key/value persistence for user preferences.
///
/// Implemented by browser `localStorage` in the web crate and by
/// [`MemoryStore`] / [`NoopStore`] here.
pub trait PreferenceStore: Send + Sync {
    /// Read a value. `Ok(None)` means the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

// -----------------------------------------------------------------------------
// 3. In-Memory Store
// -----------------------------------------------------------------------------

/// Process-local store. Survives store re-creation, which is how tests
/// simulate a page reload.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value directly, bypassing any store logic.
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.write().insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// 4. No-op Store
// -----------------------------------------------------------------------------

/// Store for environments without persistent storage. Reads find nothing,
/// writes are accepted and dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStore;

impl PreferenceStore for NoopStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("locale").unwrap(), None);

        store.set("locale", "zh").unwrap();
        store.set("locale", "en").unwrap();

        assert_eq!(store.get("locale").unwrap().as_deref(), Some("en"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_seeded_entry() {
        let store = MemoryStore::new().with_entry("mobaus-theme", "aurora");
        assert_eq!(store.get("mobaus-theme").unwrap().as_deref(), Some("aurora"));
    }

    #[test]
    fn test_noop_store_forgets_writes() {
        let store = NoopStore;
        store.set("locale", "zh").unwrap();
        assert_eq!(store.get("locale").unwrap(), None);
    }
}
