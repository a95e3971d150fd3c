//! Editor state management
//!
//! This module contains the EditorState struct: the markup Document and
//! the ColorProperty list derived from it. The two fields are only ever
//! replaced together.

use serde::{Deserialize, Serialize};
use crate::models::{ColorProperty, Snapshot};

/// Complete editor state (WASM-owned source of truth)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EditorState {
    /// The markup being edited
    document: String,

    /// Color properties extracted from `document`
    color_properties: Vec<ColorProperty>,

    /// Why the last extraction failed, if it did
    #[serde(skip)]
    parse_error: Option<String>,
}

impl EditorState {
    /// Create an editor state from a document and its extracted properties
    pub fn new(document: impl Into<String>, color_properties: Vec<ColorProperty>) -> Self {
        Self {
            document: document.into(),
            color_properties,
            parse_error: None,
        }
    }

    /// Restore state from a persisted snapshot, trusting its property list
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self::new(snapshot.document, snapshot.color_properties)
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn color_properties(&self) -> &[ColorProperty] {
        &self.color_properties
    }

    pub fn parse_error(&self) -> Option<&str> {
        self.parse_error.as_deref()
    }

    /// Replace the document and its derived list in one step
    pub fn replace(
        &mut self,
        document: String,
        color_properties: Vec<ColorProperty>,
        parse_error: Option<String>,
    ) {
        self.document = document;
        self.color_properties = color_properties;
        self.parse_error = parse_error;
    }

    /// Record whether `document` currently fails to parse
    pub fn set_parse_error(&mut self, parse_error: Option<String>) {
        self.parse_error = parse_error;
    }

    /// Copy of the persisted fields
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot::new(self.document.clone(), self.color_properties.clone())
    }
}
