//! State store
//!
//! Owns the markup Document and its ColorProperty list, and bridges them
//! to persistent storage. Every replacement of the Document re-extracts
//! the list and rewrites the snapshot; there is no batching.

use thiserror::Error;

use crate::color_sync::{self, SyncError};
use crate::config::EditorConfig;
use crate::markup::{MarkupDocument, SvgDocument};
use crate::models::{ColorAttribute, ColorProperty, EditorState, Snapshot};
use crate::storage::{KeyValueStore, StorageError};

/// Errors while reading or writing the persisted snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Stored value is not a `{svgCode, colorProperties}` object
    #[error("Malformed snapshot: {0}")]
    Malformed(serde_json::Error),

    #[error("Snapshot encoding failed: {0}")]
    Encode(serde_json::Error),
}

/// What `initialize` found in storage
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Document and list were taken from the snapshot
    Restored,

    /// Nothing stored; defaults were extracted
    FirstRun,

    /// Stored value could not be decoded; defaults kept
    Malformed,

    /// Storage could not be read; defaults kept
    Unavailable,
}

pub struct StateStore<S: KeyValueStore> {
    config: EditorConfig,
    storage: S,
    state: EditorState,
}

impl<S: KeyValueStore> StateStore<S> {
    /// Create a store holding the default document and its properties
    ///
    /// Nothing is read from storage until `initialize` is called.
    pub fn new(config: EditorConfig, storage: S) -> Self {
        let (color_properties, parse_error) = derive(&config.default_document);
        let mut state = EditorState::new(String::new(), Vec::new());
        state.replace(config.default_document.clone(), color_properties, parse_error);

        Self {
            config,
            storage,
            state,
        }
    }

    /// Load the persisted snapshot, if there is a usable one
    pub fn initialize(&mut self) -> LoadOutcome {
        match self.load_snapshot() {
            Ok(Some(snapshot)) => {
                log::info!(
                    "Restored snapshot: {} bytes, {} color properties",
                    snapshot.document.len(),
                    snapshot.color_properties.len()
                );
                // The list is trusted; only the error indicator is recomputed
                let parse_error = SvgDocument::parse(&snapshot.document)
                    .err()
                    .map(|e| SyncError::InvalidMarkup(e).to_string());
                self.state = EditorState::from_snapshot(snapshot);
                self.state.set_parse_error(parse_error);
                LoadOutcome::Restored
            }
            Ok(None) => {
                log::info!("No saved state under '{}', using default document", self.config.storage_key);
                let document = self.config.default_document.clone();
                let (color_properties, parse_error) = derive(&document);
                self.state.replace(document, color_properties, parse_error);
                LoadOutcome::FirstRun
            }
            Err(SnapshotError::Malformed(e)) => {
                log::error!("Error loading saved state: {}", e);
                LoadOutcome::Malformed
            }
            Err(e) => {
                log::error!("Error loading saved state: {}", e);
                LoadOutcome::Unavailable
            }
        }
    }

    fn load_snapshot(&self) -> Result<Option<Snapshot>, SnapshotError> {
        let Some(raw) = self.storage.get(&self.config.storage_key)? else {
            return Ok(None);
        };

        Snapshot::from_json(&raw)
            .map(Some)
            .map_err(SnapshotError::Malformed)
    }

    /// Replace the Document, re-derive the list, and persist both
    pub fn on_document_replaced(&mut self, new_text: impl Into<String>) {
        let new_text = new_text.into();
        let (color_properties, parse_error) = derive(&new_text);
        self.state.replace(new_text, color_properties, parse_error);

        if let Err(e) = self.persist() {
            log::error!("Error saving state: {}", e);
        }
    }

    /// Text reported by the editor widget; empty text is ignored
    ///
    /// Returns whether the Document was replaced.
    pub fn on_editor_change(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }

        self.on_document_replaced(text);
        true
    }

    /// Apply one color edit to the current Document
    ///
    /// Returns `false` when nothing changed: the index is stale or the
    /// current Document does not parse.
    pub fn apply_color_change(
        &mut self,
        element_index: usize,
        attribute: ColorAttribute,
        new_value: &str,
    ) -> bool {
        match color_sync::apply_color_change(self.state.document(), element_index, attribute, new_value) {
            Ok(Some(new_text)) => {
                self.on_document_replaced(new_text);
                true
            }
            Ok(None) => false,
            Err(e) => {
                log::warn!("Color change on element {} skipped: {}", element_index, e);
                false
            }
        }
    }

    /// Write the current `{document, colorPropertyList}` under the fixed key
    pub fn persist(&mut self) -> Result<(), SnapshotError> {
        let json = self
            .state
            .to_snapshot()
            .to_json()
            .map_err(SnapshotError::Encode)?;

        self.storage.set(&self.config.storage_key, &json)?;
        Ok(())
    }

    pub fn document(&self) -> &str {
        self.state.document()
    }

    pub fn color_properties(&self) -> &[ColorProperty] {
        self.state.color_properties()
    }

    /// Message from the last failed extraction, if the Document is unparseable
    pub fn parse_error(&self) -> Option<&str> {
        self.state.parse_error()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

/// Extract properties, mapping a parse failure to an empty list plus message
fn derive(text: &str) -> (Vec<ColorProperty>, Option<String>) {
    match color_sync::extract_color_properties(text) {
        Ok(properties) => (properties, None),
        Err(e) => {
            log::warn!("{}", e);
            (Vec::new(), Some(e.to_string()))
        }
    }
}
