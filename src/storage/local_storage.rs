//! Browser `localStorage` backend

use wasm_bindgen::JsValue;
use web_sys::Storage;

use super::{KeyValueStore, Result, StorageError};

/// `window.localStorage`, resolved once at construction
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Fails outside a browser window or when storage access is denied
    pub fn from_window() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no global window".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(describe(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;

        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Backend(describe(&e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(describe(&e)))
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
