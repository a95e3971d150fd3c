//! Markup parsing facility
//!
//! The color synchronizer only needs four things from a markup library:
//! parse text into a tree, walk its elements in pre-order, set one
//! attribute, and write the tree back out. `MarkupDocument` is that seam;
//! `SvgDocument` is the implementation used by the editor.

pub mod errors;
pub mod svg_document;

pub use errors::{MarkupError, Result};
pub use svg_document::SvgDocument;

use crate::models::ElementView;

/// A parsed, editable markup document
///
/// Element indices are zero-based positions in a depth-first, pre-order
/// walk of every element nested inside the root element.
pub trait MarkupDocument: Sized {
    /// Parse `text`, rejecting markup that is not well-formed
    fn parse(text: &str) -> Result<Self>;

    /// Write the (possibly edited) tree back to text
    fn serialize(&self) -> Result<String>;

    /// All indexed elements in pre-order
    fn elements(&self) -> Vec<ElementView>;

    /// Number of indexed elements
    fn element_count(&self) -> usize;

    /// Set `name` to `value` on the element at `index`, overwriting or
    /// creating it. Returns `Ok(false)` when no element has that index.
    fn set_attribute(&mut self, index: usize, name: &str, value: &str) -> Result<bool>;
}
