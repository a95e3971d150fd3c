//! Editor configuration
//!
//! The host page may pass a plain object with any subset of these fields;
//! missing fields fall back to the defaults below.

use serde::{Deserialize, Serialize};

/// Storage key the snapshot is written under
pub const DEFAULT_STORAGE_KEY: &str = "svg-previewer-state";

/// Document shown on first run
pub const DEFAULT_DOCUMENT: &str = r#"<svg width="100" height="100" xmlns="http://www.w3.org/2000/svg">
  <circle cx="50" cy="50" r="40" stroke="black" stroke-width="3" fill="red" />
  <rect x="10" y="10" width="30" height="30" fill="blue" />
  <path d="M80 80 L90 90 L70 90 Z" fill="green" />
</svg>"#;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Key for the persisted `{svgCode, colorProperties}` snapshot
    pub storage_key: String,

    /// Markup used when no snapshot exists
    pub default_document: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_document: DEFAULT_DOCUMENT.to_string(),
        }
    }
}
