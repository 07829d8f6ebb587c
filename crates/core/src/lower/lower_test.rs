use super::*;
use scenemark_ir::{CenterStrategy, NodeKind};
use scenemark_style::{Dimension, Display, FlexBasis, JustifyContent, Position};
use serde_json::{json, Value};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn composition(children: Value) -> Composition {
    Composition::from_value(json!({
        "bounds": { "x": 0, "y": 0, "width": 400, "height": 300 },
        "absOrigin": { "x": 100, "y": 200 },
        "children": children
    }))
    .unwrap()
}

fn lower(children: Value) -> LoweredComposition {
    init_logger();
    lower_composition(&composition(children), &LowerOptions::default()).unwrap()
}

fn rect(id: &str, x: f64, y: f64, w: f64, h: f64) -> Value {
    json!({
        "id": id,
        "type": "RECTANGLE",
        "width": w,
        "height": h,
        "absoluteTransform": [[1, 0, x], [0, 1, y]]
    })
}

#[test]
fn test_top_level_positions_subtract_abs_origin() {
    let lowered = lower(json!([rect("1:1", 110.0, 220.0, 50.0, 40.0)]));
    let node = &lowered.document.children[0];
    assert_eq!(node.kind, NodeKind::Shape);
    assert_eq!(node.layout.position, Position::Absolute);
    assert_eq!((node.layout.left, node.layout.top), (10.0, 20.0));
    assert_eq!(node.layout.width, Dimension::Px(50.0));
    assert!(node.layout.wrapper.is_none());
}

#[test]
fn test_children_are_relative_to_parent() {
    let mut frame = rect("1:1", 150.0, 250.0, 200.0, 100.0);
    frame["type"] = json!("FRAME");
    frame["children"] = json!([rect("1:2", 160.0, 270.0, 10.0, 10.0)]);
    let lowered = lower(json!([frame]));
    let child = &lowered.document.children[0].children()[0];
    assert_eq!((child.layout.left, child.layout.top), (10.0, 20.0));
}

#[test]
fn test_rotation_builds_translate_wrapper() {
    let node = json!({
        "id": "2:1",
        "type": "RECTANGLE",
        "width": 100,
        "height": 50,
        "absoluteTransform": [[0, -1, 100], [1, 0, 200]]
    });
    let lowered = lower(json!([node]));
    let layout = &lowered.document.children[0].layout;
    let wrapper = layout.wrapper.unwrap();
    assert_eq!(wrapper.center_strategy, Some(CenterStrategy::Translate));
    assert_eq!((wrapper.content_width, wrapper.content_height), (100.0, 50.0));
    assert_eq!(layout.width, Dimension::Px(50.0));
    assert_eq!(layout.height, Dimension::Px(100.0));
    assert_eq!((layout.left, layout.top), (-50.0, 0.0));
    assert!(!layout.transform_2x2.is_identity());
}

#[test]
fn test_flip_uses_inset_wrapper() {
    let node = json!({
        "id": "2:2",
        "type": "RECTANGLE",
        "width": 20,
        "height": 10,
        "absoluteTransform": [[-1, 0, 140], [0, 1, 200]]
    });
    let lowered = lower(json!([node]));
    let wrapper = lowered.document.children[0].layout.wrapper.unwrap();
    assert_eq!(wrapper.center_strategy, Some(CenterStrategy::Inset));
}

#[test]
fn test_auto_layout_container_and_items() {
    let frame = json!({
        "id": "3:1",
        "type": "FRAME",
        "width": 300,
        "height": 80,
        "absoluteTransform": [[1, 0, 100], [0, 1, 200]],
        "layoutMode": "HORIZONTAL",
        "itemSpacing": 8,
        "paddingLeft": 16,
        "paddingRight": 16,
        "primaryAxisAlignItems": "SPACE_BETWEEN",
        "counterAxisAlignItems": "CENTER",
        "clipsContent": true,
        "children": [
            { "id": "3:2", "type": "RECTANGLE", "width": 40, "height": 40,
              "absoluteTransform": [[1, 0, 116], [0, 1, 220]] },
            { "id": "3:3", "type": "RECTANGLE", "width": 40, "height": 40,
              "absoluteTransform": [[1, 0, 164], [0, 1, 220]],
              "layoutSizingHorizontal": "FILL", "layoutSizingVertical": "FILL" },
            { "id": "3:4", "type": "RECTANGLE", "width": 10, "height": 10,
              "absoluteTransform": [[1, 0, 105], [0, 1, 205]],
              "layoutPositioning": "ABSOLUTE" }
        ]
    });
    let lowered = lower(json!([frame]));
    let container = &lowered.document.children[0];
    assert_eq!(container.layout.display, Display::Flex);
    assert_eq!(container.layout.justify_content, Some(JustifyContent::SpaceBetween));
    assert_eq!(container.layout.gap, None, "space-between ignores spacing");
    assert_eq!(container.layout.padding.l, 16.0);
    assert_eq!(container.layout.item_spacing, Some(8.0));

    let items = container.children();
    assert_eq!(items[0].layout.position, Position::Relative);
    assert_eq!(items[0].layout.flex_shrink, Some(0.0));
    assert_eq!(items[1].layout.flex_grow, Some(1.0));
    assert_eq!(items[1].layout.flex_basis, Some(FlexBasis::Zero));
    assert!(items[1].layout.width.is_auto() && items[1].layout.height.is_auto());
    assert_eq!(items[2].layout.position, Position::Absolute);
    assert_eq!((items[2].layout.left, items[2].layout.top), (5.0, 5.0));
}

#[test]
fn test_paint_stroke_and_effects() {
    let mut node = rect("4:1", 100.0, 200.0, 40.0, 40.0);
    node["style"] = json!({
        "fills": [
            { "type": "SOLID", "color": { "r": 1, "g": 1, "b": 1 } },
            { "type": "VIDEO" }
        ],
        "strokes": [{ "type": "SOLID", "color": { "r": 0, "g": 0, "b": 0 } }],
        "strokeWeight": 2,
        "strokeAlign": "CENTER",
        "effects": [
            { "type": "DROP_SHADOW", "radius": 8, "offset": { "x": 4, "y": 4 },
              "color": { "r": 0, "g": 0, "b": 0, "a": 0.5 } },
            { "type": "LAYER_BLUR", "radius": 4 }
        ],
        "cornerRadius": 4,
        "opacity": 0.5
    });
    let lowered = lower(json!([node]));
    let ir = &lowered.document.children[0];
    assert_eq!(
        ir.style.box_css,
        "background:#fff;outline:2px solid #000;outline-offset:-1px;border-radius:4px;\
         box-shadow:4px 4px 8px rgba(0,0,0,.5);filter:blur(2px);opacity:0.5;"
    );
    assert!(ir.style.raw.has_visible_stroke);
    assert_eq!(ir.style.raw.fill_count, 2);
}

#[test]
fn test_vector_shadow_becomes_filter() {
    let node = json!({
        "id": "4:2",
        "type": "VECTOR",
        "width": 10,
        "height": 10,
        "absoluteTransform": [[1, 0, 100], [0, 1, 200]],
        "svgContent": "<svg xmlns=\"http://www.w3.org/2000/svg\"/>",
        "style": { "effects": [{ "type": "DROP_SHADOW", "radius": 2, "offset": { "x": 0, "y": 1 } }] }
    });
    let lowered = lower(json!([node]));
    let ir = &lowered.document.children[0];
    assert_eq!(ir.kind, NodeKind::Svg);
    assert_eq!(ir.style.box_css, "filter:drop-shadow(0 1px 2px rgba(0,0,0,.25));");
    match &ir.content {
        NodeContent::Svg { file, markup } => {
            assert_eq!(file, "4-2.svg");
            assert!(markup.is_some());
        }
        other => panic!("expected svg content, got {:?}", other),
    }
}

#[test]
fn test_linear_gradient_and_image_fill() {
    let mut node = rect("4:3", 100.0, 200.0, 100.0, 50.0);
    node["style"] = json!({
        "fills": [
            { "type": "IMAGE", "imageHash": "abc123", "scaleMode": "FIT" },
            { "type": "GRADIENT_LINEAR",
              "gradientTransform": [[1, 0, 0], [0, 1, 0]],
              "gradientStops": [
                  { "position": 0, "color": { "r": 1, "g": 0, "b": 0 } },
                  { "position": 1, "color": { "r": 0, "g": 0, "b": 1 } }
              ] }
        ]
    });
    let lowered = lower(json!([node]));
    assert_eq!(
        lowered.document.children[0].style.box_css,
        "background:linear-gradient(90deg, #f00 0%, #00f 100%), \
         url(images/abc123.png) center / contain no-repeat;"
    );
    assert_eq!(lowered.images, vec!["abc123".to_string()]);
}

#[test]
fn test_single_segment_text_lifts_font_onto_box() {
    let node = json!({
        "id": "5:1",
        "type": "TEXT",
        "width": 120,
        "height": 20,
        "absoluteTransform": [[1, 0, 100], [0, 1, 200]],
        "text": {
            "characters": "Tom & <Jerry>",
            "textAutoResize": "WIDTH_AND_HEIGHT",
            "textAlignHorizontal": "CENTER",
            "segments": [{
                "characters": "Tom & <Jerry>",
                "fontName": { "family": "Inter", "style": "Semi Bold" },
                "fontSize": 16,
                "lineHeight": { "unit": "PERCENT", "value": 150 },
                "fills": [{ "type": "SOLID", "color": { "r": 0, "g": 0, "b": 0 } }]
            }]
        }
    });
    let lowered = lower(json!([node]));
    let ir = &lowered.document.children[0];
    assert!(ir.layout.width.is_auto());
    assert_eq!(
        ir.style.box_css,
        "white-space:pre;text-align:center;font-family:'Inter';font-weight:600;font-size:16px;\
         line-height:150%;color:#000;"
    );
    assert_eq!(ir.content, NodeContent::Text { html: "Tom &amp; &lt;Jerry&gt;".to_string() });
    assert_eq!(lowered.fonts.len(), 1);
    assert_eq!(lowered.fonts[0].weight, 600);
}

#[test]
fn test_multi_segment_text_renders_spans() {
    let node = json!({
        "id": "5:2",
        "type": "TEXT",
        "width": 120,
        "height": 40,
        "absoluteTransform": [[1, 0, 100], [0, 1, 200]],
        "text": {
            "characters": "Hi there",
            "textAlignVertical": "CENTER",
            "segments": [
                { "characters": "Hi ", "fontName": { "family": "Inter", "style": "Bold" } },
                { "characters": "there", "fontName": { "family": "Inter", "style": "Wobbly" } }
            ]
        }
    });
    let lowered = lower(json!([node]));
    let ir = &lowered.document.children[0];
    assert_eq!(ir.layout.display, Display::Flex);
    assert_eq!(ir.layout.justify_content, Some(JustifyContent::Center));
    let NodeContent::Text { html } = &ir.content else {
        panic!("expected text content");
    };
    assert_eq!(
        html,
        "<span style=\"font-family:&apos;Inter&apos;;font-weight:700;\">Hi </span>\
         <span style=\"font-family:&apos;Inter&apos;;font-weight:400;\">there</span>"
    );
    assert_eq!(lowered.fonts.len(), 2);
}

#[test]
fn test_depth_limit() {
    let mut node = rect("deep", 100.0, 200.0, 1.0, 1.0);
    for level in 0..5 {
        node = json!({
            "id": format!("f{}", level),
            "type": "FRAME",
            "absoluteTransform": [[1, 0, 100], [0, 1, 200]],
            "children": [node]
        });
    }
    let composition = composition(json!([node]));
    let result = lower_composition(&composition, &LowerOptions { max_depth: 3 });
    assert!(matches!(result, Err(BuildError::TooDeep { limit: 3, .. })));
    assert!(lower_composition(&composition, &LowerOptions::default()).is_ok());
}
