//! Core data structures for the SVG Previewer
//!
//! `ColorProperty` is one discovered color-bearing attribute. `Snapshot`
//! is what gets written to persistent storage after every edit.

use serde::{Deserialize, Serialize};

pub use super::elements::ColorAttribute;

/// One color-bearing attribute discovered on an element
///
/// Field names on the wire (`element`, `attribute`, `value`, `index`) are
/// shared by the persisted snapshot and the JavaScript API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ColorProperty {
    /// Lowercased tag name of the owning element
    #[serde(rename = "element")]
    pub element_tag: String,

    /// Which allow-listed attribute this is
    #[serde(rename = "attribute")]
    pub attribute_name: ColorAttribute,

    /// Raw attribute value (hex, named color, `rgb()`, `none`, ...)
    pub value: String,

    /// Zero-based pre-order position of the owning element
    #[serde(rename = "index")]
    pub element_index: usize,
}

impl ColorProperty {
    pub fn new(
        element_tag: impl Into<String>,
        attribute_name: ColorAttribute,
        value: impl Into<String>,
        element_index: usize,
    ) -> Self {
        Self {
            element_tag: element_tag.into(),
            attribute_name,
            value: value.into(),
            element_index,
        }
    }

    /// Human-facing control label, e.g. `circle 1 (fill)`
    pub fn label(&self) -> String {
        format!(
            "{} {} ({})",
            self.element_tag,
            self.element_index + 1,
            self.attribute_name
        )
    }

    /// Stable key for one control row, e.g. `circle-0-fill`
    pub fn control_key(&self) -> String {
        format!(
            "{}-{}-{}",
            self.element_tag, self.element_index, self.attribute_name
        )
    }
}

/// Persisted `{document, colorPropertyList}` pair
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    #[serde(rename = "svgCode")]
    pub document: String,

    #[serde(rename = "colorProperties")]
    pub color_properties: Vec<ColorProperty>,
}

impl Snapshot {
    pub fn new(document: impl Into<String>, color_properties: Vec<ColorProperty>) -> Self {
        Self {
            document: document.into(),
            color_properties,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
