//! SVG Previewer WASM API
//!
//! This module provides the JavaScript-facing API for the SVG previewer.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, validation and error conversion
//! - `types`: Plain objects returned to JavaScript
//! - `editor`: The `SvgEditor` controller (owns document, color list and storage)
//! - `markup`: Stateless extraction and color application

pub mod helpers;
pub mod types;
pub mod editor;
pub mod markup;

pub use editor::SvgEditor;
pub use markup::{extract_color_properties, apply_color_change_to_markup};
pub use types::ColorControl;
