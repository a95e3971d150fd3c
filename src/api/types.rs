//! Shared types for the WASM API
//!
//! This module contains the plain objects handed to JavaScript.

use crate::models::{ColorAttribute, ColorProperty};

/// One row of color controls: a picker and a text field share it
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ColorControl {
    pub key: String,                // e.g. "circle-0-fill"
    pub label: String,              // e.g. "circle 1 (fill)"
    pub element: String,
    pub attribute: ColorAttribute,
    pub value: String,
    pub index: usize,
}

impl From<&ColorProperty> for ColorControl {
    fn from(prop: &ColorProperty) -> Self {
        Self {
            key: prop.control_key(),
            label: prop.label(),
            element: prop.element_tag.clone(),
            attribute: prop.attribute_name,
            value: prop.value.clone(),
            index: prop.element_index,
        }
    }
}
