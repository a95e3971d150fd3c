//! Models module for the SVG Previewer
//!
//! This module contains the data models shared by the synchronizer,
//! the state store and the JavaScript API.

pub mod core;
pub mod elements;
pub mod editor_state;

// Re-export commonly used types
pub use self::core::*;
pub use elements::*;
pub use editor_state::EditorState;
