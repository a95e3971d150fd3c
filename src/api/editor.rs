//! WASM API for the SVG editor
//!
//! `SvgEditor` is the single controller object the page holds. It owns
//! the state store; the page forwards editor text and color-input events
//! to it and reads back the document and the control list.

use wasm_bindgen::prelude::*;

use super::helpers;
use super::types::ColorControl;
use crate::config::EditorConfig;
use crate::state_store::{LoadOutcome, StateStore};
use crate::storage::{self, KeyValueStore, LocalStorage, MemoryStore};

/// Browser storage, or memory when the page may not use `localStorage`
enum EditorStorage {
    Local(LocalStorage),
    Memory(MemoryStore),
}

impl EditorStorage {
    fn open() -> Self {
        match LocalStorage::from_window() {
            Ok(local) => EditorStorage::Local(local),
            Err(e) => {
                log::warn!("{}; changes will not survive a reload", e);
                EditorStorage::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for EditorStorage {
    fn get(&self, key: &str) -> storage::Result<Option<String>> {
        match self {
            EditorStorage::Local(local) => local.get(key),
            EditorStorage::Memory(memory) => memory.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> storage::Result<()> {
        match self {
            EditorStorage::Local(local) => local.set(key, value),
            EditorStorage::Memory(memory) => memory.set(key, value),
        }
    }
}

#[wasm_bindgen]
pub struct SvgEditor {
    store: StateStore<EditorStorage>,
}

#[wasm_bindgen]
impl SvgEditor {
    /// Create the editor and load any saved state
    ///
    /// # Parameters
    /// - `config`: optional `{ storageKey, defaultDocument }` object
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<SvgEditor, JsValue> {
        let config: EditorConfig = helpers::deserialize_or_default(config, "Invalid editor config")?;

        let mut store = StateStore::new(config, EditorStorage::open());
        match store.initialize() {
            LoadOutcome::Restored | LoadOutcome::FirstRun => {}
            outcome => log::warn!("Started from defaults ({:?})", outcome),
        }
        log::info!(
            "SvgEditor ready: {} color properties",
            store.color_properties().len()
        );

        Ok(SvgEditor { store })
    }

    /// Current markup text
    #[wasm_bindgen(getter)]
    pub fn document(&self) -> String {
        self.store.document().to_string()
    }

    /// Color properties as `{ element, attribute, value, index }` objects
    #[wasm_bindgen(js_name = colorProperties)]
    pub fn color_properties(&self) -> Result<JsValue, JsValue> {
        helpers::serialize(&self.store.color_properties(), "Color property serialization error")
    }

    /// Color properties with a display label and a stable key per row
    #[wasm_bindgen(js_name = colorControls)]
    pub fn color_controls(&self) -> Result<js_sys::Array, JsValue> {
        let result = js_sys::Array::new();
        for prop in self.store.color_properties() {
            let control = ColorControl::from(prop);
            result.push(&helpers::serialize(&control, "Color control serialization error")?);
        }
        Ok(result)
    }

    /// Why the current document cannot be parsed, if it cannot
    #[wasm_bindgen(getter, js_name = parseError)]
    pub fn parse_error(&self) -> Option<String> {
        self.store.parse_error().map(str::to_string)
    }

    /// Forward the editor widget's text; returns whether it was taken
    #[wasm_bindgen(js_name = onEditorChange)]
    pub fn on_editor_change(&mut self, text: &str) -> bool {
        self.store.on_editor_change(text)
    }

    /// Set `attribute` to `value` on the element at `index`
    ///
    /// # Returns
    /// `false` when the index no longer refers to an element
    #[wasm_bindgen(js_name = applyColorChange)]
    pub fn apply_color_change(
        &mut self,
        index: usize,
        attribute: &str,
        value: &str,
    ) -> Result<bool, JsValue> {
        let attribute = helpers::parse_color_attribute(attribute).map_err(helpers::js_error)?;
        Ok(self.store.apply_color_change(index, attribute, value))
    }

    /// Render the current markup into `target`, unsanitized
    #[wasm_bindgen(js_name = renderPreview)]
    pub fn render_preview(&self, target: &web_sys::Element) {
        target.set_inner_html(self.store.document());
    }
}
