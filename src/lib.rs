//! SVG Previewer WASM Module
//!
//! Core of a browser-based SVG editor: the page supplies the text editor
//! and the preview container, this module keeps the markup, discovers
//! `fill`/`stroke` attributes as editable color properties, writes color
//! edits back into the markup and persists both to `localStorage`.

pub mod models;
pub mod markup;
pub mod color_sync;
pub mod storage;
pub mod state_store;
pub mod config;
pub mod api;

// Re-export commonly used types
pub use models::core::*;
pub use models::elements::*;
pub use config::EditorConfig;
pub use state_store::{LoadOutcome, StateStore};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("SVG Previewer WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", e).into());
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
