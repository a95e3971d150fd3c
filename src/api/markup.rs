//! Stateless markup operations
//!
//! These expose the color synchronizer directly, for pages that keep
//! their own state.

use wasm_bindgen::prelude::*;

use super::helpers;
use crate::color_sync;

/// Extract `{ element, attribute, value, index }` objects from SVG markup
///
/// Rejects with the parse error message when the markup is not well-formed.
#[wasm_bindgen(js_name = extractColorProperties)]
pub fn extract_color_properties(svg: &str) -> Result<JsValue, JsValue> {
    let properties = color_sync::extract_color_properties(svg).map_err(helpers::js_error)?;
    helpers::serialize(&properties, "Color property serialization error")
}

/// Set one color attribute and return the new markup
///
/// A stale `index` returns `svg` unchanged.
#[wasm_bindgen(js_name = applyColorChangeToMarkup)]
pub fn apply_color_change_to_markup(
    svg: &str,
    index: usize,
    attribute: &str,
    value: &str,
) -> Result<String, JsValue> {
    let attribute = helpers::parse_color_attribute(attribute).map_err(helpers::js_error)?;

    match color_sync::apply_color_change(svg, index, attribute, value) {
        Ok(Some(updated)) => Ok(updated),
        Ok(None) => Ok(svg.to_string()),
        Err(e) => Err(helpers::js_error(e)),
    }
}
