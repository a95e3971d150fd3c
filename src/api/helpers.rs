//! Shared helpers for WASM API operations
//!
//! This module contains common patterns for serialization,
//! deserialization and error conversion across all API operations.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::ColorAttribute;

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Deserialize an optional argument, using `T::default()` for `undefined`/`null`
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    deserialize(value, error_context)
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Validation Helpers
// ============================================================================

/// Validate a color attribute name coming from JavaScript
pub fn parse_color_attribute(name: &str) -> Result<ColorAttribute, String> {
    ColorAttribute::from_name(name).ok_or_else(|| {
        format!(
            "Invalid color attribute: '{}' (must be 'fill' or 'stroke')",
            name
        )
    })
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Convert an error to a JsValue, logging it on the way out
pub fn js_error(err: impl std::fmt::Display) -> JsValue {
    let msg = err.to_string();
    log::error!("{}", msg);
    JsValue::from_str(&msg)
}
