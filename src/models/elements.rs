//! Element and attribute enumerations for SVG color editing
//!
//! This module defines the fixed allow-list of color-bearing attributes
//! and the plain view of a markup element used during traversal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Color-bearing attributes that get a control in the editor
///
/// Matching is exact and case-sensitive on the attribute's qualified name.
/// `style="fill:..."` declarations are not recognized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorAttribute {
    /// Interior paint (`fill="..."`)
    Fill,

    /// Outline paint (`stroke="..."`)
    Stroke,
}

impl ColorAttribute {
    /// Attribute name as it appears in markup
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorAttribute::Fill => "fill",
            ColorAttribute::Stroke => "stroke",
        }
    }

    /// Look up an attribute by its exact markup name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fill" => Some(ColorAttribute::Fill),
            "stroke" => Some(ColorAttribute::Stroke),
            _ => None,
        }
    }
}

impl fmt::Display for ColorAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A read-only snapshot of one element seen during traversal
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementView {
    /// Qualified tag name exactly as written (prefix included)
    pub tag: String,

    /// `(qualified name, unescaped value)` pairs in declaration order
    pub attributes: Vec<(String, String)>,
}

impl ElementView {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
        }
    }

    /// Value of the first attribute with this exact name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}
