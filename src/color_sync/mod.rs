//! Color synchronizer
//!
//! Maps between raw markup text and the list of color properties in both
//! directions. Extraction always starts from scratch; applying an edit
//! returns new text and leaves re-extraction to the caller, so the list
//! can never drift from the document it was derived from.

use thiserror::Error;

use crate::markup::{MarkupDocument, MarkupError, SvgDocument};
use crate::models::{ColorAttribute, ColorProperty};

/// Errors from the color synchronizer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// The document could not be parsed
    #[error("Cannot read color properties: {0}")]
    InvalidMarkup(MarkupError),

    /// The edited document could not be written back
    #[error("Cannot write color change: {0}")]
    Serialize(MarkupError),
}

pub type Result<T> = std::result::Result<T, SyncError>;

/// Extract every `fill`/`stroke` attribute from SVG markup
///
/// # Example
///
/// ```
/// use svg_previewer_wasm::color_sync::extract_color_properties;
///
/// let props = extract_color_properties(r#"<svg><rect fill="blue"/></svg>"#).unwrap();
/// assert_eq!(props[0].value, "blue");
/// assert_eq!(props[0].element_index, 0);
/// ```
pub fn extract_color_properties(document_text: &str) -> Result<Vec<ColorProperty>> {
    extract_with::<SvgDocument>(document_text)
}

/// Set one color attribute on the element at `element_index`
///
/// Returns `Ok(None)` when no element has that index (a stale index after
/// the tree shrank); the caller keeps its original text in that case.
pub fn apply_color_change(
    document_text: &str,
    element_index: usize,
    attribute: ColorAttribute,
    new_value: &str,
) -> Result<Option<String>> {
    apply_color_change_with::<SvgDocument>(document_text, element_index, attribute, new_value)
}

/// Extraction over any markup implementation
pub fn extract_with<D: MarkupDocument>(document_text: &str) -> Result<Vec<ColorProperty>> {
    let document = D::parse(document_text).map_err(SyncError::InvalidMarkup)?;

    let mut properties = Vec::new();
    for (element_index, element) in document.elements().into_iter().enumerate() {
        let tag = element.tag.to_lowercase();

        for (name, value) in element.attributes {
            if let Some(attribute) = ColorAttribute::from_name(&name) {
                properties.push(ColorProperty::new(tag.clone(), attribute, value, element_index));
            }
        }
    }

    Ok(properties)
}

/// Color application over any markup implementation
pub fn apply_color_change_with<D: MarkupDocument>(
    document_text: &str,
    element_index: usize,
    attribute: ColorAttribute,
    new_value: &str,
) -> Result<Option<String>> {
    let mut document = D::parse(document_text).map_err(SyncError::InvalidMarkup)?;

    let changed = document
        .set_attribute(element_index, attribute.as_str(), new_value)
        .map_err(SyncError::Serialize)?;
    if !changed {
        log::debug!(
            "No element at index {} ({} elements), color change ignored",
            element_index,
            document.element_count()
        );
        return Ok(None);
    }

    document.serialize().map(Some).map_err(SyncError::Serialize)
}
