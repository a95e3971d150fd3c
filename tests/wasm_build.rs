//! WASM build test
//!
//! Exercises the JavaScript-facing API in a real browser, against the
//! page's actual `localStorage`.

#![cfg(target_arch = "wasm32")]

use svg_previewer_wasm::api::{apply_color_change_to_markup, extract_color_properties, ColorControl, SvgEditor};
use svg_previewer_wasm::config::DEFAULT_STORAGE_KEY;
use svg_previewer_wasm::ColorProperty;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clear_storage() {
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item(DEFAULT_STORAGE_KEY).unwrap();
}

fn properties(editor: &SvgEditor) -> Vec<ColorProperty> {
    serde_wasm_bindgen::from_value(editor.color_properties().unwrap()).unwrap()
}

#[wasm_bindgen_test]
fn test_editor_first_run() {
    clear_storage();
    let editor = SvgEditor::new(JsValue::UNDEFINED).unwrap();

    assert!(editor.document().contains("<circle"));
    assert_eq!(properties(&editor).len(), 4);
    assert!(editor.parse_error().is_none());
}

#[wasm_bindgen_test]
fn test_editor_state_survives_reload() {
    clear_storage();
    let mut editor = SvgEditor::new(JsValue::UNDEFINED).unwrap();

    assert!(editor.on_editor_change(r#"<svg><rect fill="blue"/></svg>"#));
    assert!(editor.apply_color_change(0, "fill", "#00ff00").unwrap());

    let reloaded = SvgEditor::new(JsValue::NULL).unwrap();
    assert_eq!(reloaded.document(), editor.document());
    assert_eq!(properties(&reloaded)[0].value, "#00ff00");
}

#[wasm_bindgen_test]
fn test_editor_rejects_unknown_attribute() {
    clear_storage();
    let mut editor = SvgEditor::new(JsValue::UNDEFINED).unwrap();

    assert!(editor.apply_color_change(0, "stroke-width", "4").is_err());
    assert!(!editor.apply_color_change(99, "fill", "red").unwrap());
}

#[wasm_bindgen_test]
fn test_color_controls_have_labels() {
    clear_storage();
    let editor = SvgEditor::new(JsValue::UNDEFINED).unwrap();

    let controls = editor.color_controls().unwrap();
    assert_eq!(controls.length(), 4);

    let first: ColorControl = serde_wasm_bindgen::from_value(controls.get(0)).unwrap();
    assert_eq!(first.label, "circle 1 (stroke)");
    assert_eq!(first.key, "circle-0-stroke");
}

#[wasm_bindgen_test]
fn test_render_preview_sets_markup() {
    clear_storage();
    let editor = SvgEditor::new(JsValue::UNDEFINED).unwrap();

    let document = web_sys::window().unwrap().document().unwrap();
    let target = document.create_element("div").unwrap();
    editor.render_preview(&target);

    assert!(target.inner_html().contains("circle"));
}

#[wasm_bindgen_test]
fn test_stateless_functions() {
    let svg = r#"<svg><circle fill="red" stroke="black"/><rect fill="blue"/></svg>"#;

    let props: Vec<ColorProperty> =
        serde_wasm_bindgen::from_value(extract_color_properties(svg).unwrap()).unwrap();
    assert_eq!(props.len(), 3);

    let unchanged = apply_color_change_to_markup(svg, 7, "fill", "red").unwrap();
    assert_eq!(unchanged, svg);

    assert!(extract_color_properties("<svg").is_err());
}
