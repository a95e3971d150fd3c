// Extraction and color application over realistic SVG documents

use svg_previewer_wasm::color_sync::{apply_color_change, extract_color_properties};
use svg_previewer_wasm::markup::{MarkupDocument, SvgDocument};
use svg_previewer_wasm::{ColorAttribute, ColorProperty};

const ICON: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="0 0 24 24">
  <!-- badge -->
  <defs>
    <linearGradient id="shine">
      <stop offset="0" stop-color="#fff"/>
    </linearGradient>
  </defs>
  <g stroke="#333" stroke-width="2">
    <circle cx="12" cy="12" r="10" fill="url(#shine)"/>
    <path d="M8 12 l3 3 l5 -6" fill="none" stroke="green"/>
  </g>
  <text x="2" y="22" fill="rgb(10, 20, 30)">ok</text>
</svg>"##;

/// Count fill/stroke attributes below the root with an independent parser
fn count_color_attributes(text: &str) -> usize {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let doc = roxmltree::Document::parse_with_options(text, options).unwrap();

    doc.root_element()
        .descendants()
        .filter(|node| node.is_element())
        .skip(1)
        .flat_map(|node| node.attributes())
        .filter(|attr| attr.namespace().is_none() && matches!(attr.name(), "fill" | "stroke"))
        .count()
}

#[test]
fn test_extraction_is_complete() {
    let props = extract_color_properties(ICON).unwrap();

    assert_eq!(props.len(), count_color_attributes(ICON));
    assert_eq!(props.len(), 5);
}

#[test]
fn test_root_canvas_colors_get_no_controls() {
    // Common icon pattern: paint set on the <svg> itself
    let svg = r#"<svg fill="none" stroke="currentColor"><rect fill="red"/></svg>"#;
    let props = extract_color_properties(svg).unwrap();

    assert_eq!(props, vec![ColorProperty::new("rect", ColorAttribute::Fill, "red", 0)]);
    assert_eq!(props.len(), count_color_attributes(svg));
}

#[test]
fn test_indices_follow_pre_order_traversal() {
    let props = extract_color_properties(ICON).unwrap();

    // defs=0 linearGradient=1 stop=2 g=3 circle=4 path=5 text=6
    assert_eq!(
        props,
        vec![
            ColorProperty::new("g", ColorAttribute::Stroke, "#333", 3),
            ColorProperty::new("circle", ColorAttribute::Fill, "url(#shine)", 4),
            ColorProperty::new("path", ColorAttribute::Fill, "none", 5),
            ColorProperty::new("path", ColorAttribute::Stroke, "green", 5),
            ColorProperty::new("text", ColorAttribute::Fill, "rgb(10, 20, 30)", 6),
        ]
    );
}

#[test]
fn test_stop_color_is_not_a_color_property() {
    let props = extract_color_properties(ICON).unwrap();
    assert!(props.iter().all(|p| p.element_tag != "stop"));
}

#[test]
fn test_apply_then_extract_changes_only_target() {
    let before = extract_color_properties(ICON).unwrap();

    let updated = apply_color_change(ICON, 5, ColorAttribute::Stroke, "#ff0000")
        .unwrap()
        .expect("path exists");
    let after = extract_color_properties(&updated).unwrap();

    let mut expected = before.clone();
    for prop in expected.iter_mut() {
        if prop.element_index == 5 && prop.attribute_name == ColorAttribute::Stroke {
            prop.value = "#ff0000".to_string();
        }
    }
    assert_eq!(after, expected);
}

#[test]
fn test_apply_creates_attribute_at_end_of_list_for_element() {
    let updated = apply_color_change(ICON, 6, ColorAttribute::Stroke, "black")
        .unwrap()
        .unwrap();
    let props = extract_color_properties(&updated).unwrap();

    assert_eq!(props.len(), 6);
    assert_eq!(
        props.last(),
        Some(&ColorProperty::new("text", ColorAttribute::Stroke, "black", 6))
    );
}

#[test]
fn test_apply_preserves_unrelated_markup() {
    let updated = apply_color_change(ICON, 4, ColorAttribute::Fill, "gold")
        .unwrap()
        .unwrap();

    assert!(updated.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(updated.contains("<!-- badge -->"));
    assert!(updated.contains("xmlns:xlink=\"http://www.w3.org/1999/xlink\""));
    assert!(updated.contains(r#"<path d="M8 12 l3 3 l5 -6" fill="none" stroke="green"/>"#));
    assert!(updated.contains(r#"fill="gold""#));
    assert!(!updated.contains("url(#shine)\"/>"));
}

#[test]
fn test_out_of_range_index_leaves_extraction_unchanged() {
    let count = SvgDocument::parse(ICON).unwrap().element_count();

    for index in [count, count + 1, usize::MAX] {
        let result = apply_color_change(ICON, index, ColorAttribute::Fill, "red").unwrap();
        assert_eq!(result, None, "index {} should be a no-op", index);
    }
}

#[test]
fn test_rect_fill_change_leaves_circle_untouched() {
    let svg = r#"<svg><circle fill="red" stroke="black"/><rect fill="blue"/></svg>"#;

    let updated = apply_color_change(svg, 1, ColorAttribute::Fill, "#00ff00")
        .unwrap()
        .unwrap();

    assert_eq!(
        updated,
        r##"<svg><circle fill="red" stroke="black"/><rect fill="#00ff00"/></svg>"##
    );
}

#[test]
fn test_prefixed_elements_keep_their_qualified_tag() {
    let svg = r#"<svg:svg xmlns:svg="http://www.w3.org/2000/svg"><svg:RECT fill="teal"/></svg:svg>"#;
    let props = extract_color_properties(svg).unwrap();

    assert_eq!(
        props,
        vec![ColorProperty::new("svg:rect", ColorAttribute::Fill, "teal", 0)]
    );
}
