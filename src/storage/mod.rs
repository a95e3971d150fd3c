//! Key-value persistence
//!
//! The state store writes one JSON snapshot under one fixed key. Any
//! string-to-string store works; the browser build uses `localStorage`.

pub mod local_storage;

pub use local_storage::LocalStorage;

use std::collections::HashMap;
use thiserror::Error;

/// Errors reported by a storage backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No backend is reachable (no window, storage disabled)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The backend refused the operation (quota, privacy mode)
    #[error("Storage error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Opaque string storage addressed by key
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites any previous value under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store used natively and in tests
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.into(), value.into());
        store
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
