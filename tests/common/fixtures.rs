//! JSON builders for compositions used across the integration tests.
use serde_json::{json, Value};

/// A 400x300 page whose absolute origin sits at (100, 200).
pub fn composition(children: Value) -> Value {
    json!({
        "bounds": { "x": 0, "y": 0, "width": 400, "height": 300 },
        "absOrigin": { "x": 100, "y": 200 },
        "children": children
    })
}

/// A rectangle at page-relative `(x, y)`.
pub fn rect_node(id: &str, x: f64, y: f64, width: f64, height: f64) -> Value {
    json!({
        "id": id,
        "type": "RECTANGLE",
        "width": width,
        "height": height,
        "absoluteTransform": [[1, 0, 100.0 + x], [0, 1, 200.0 + y]]
    })
}

pub fn solid_rect(id: &str, x: f64, y: f64, size: (f64, f64), (r, g, b): (f64, f64, f64)) -> Value {
    let mut node = rect_node(id, x, y, size.0, size.1);
    node["style"] = json!({ "fills": [{ "type": "SOLID", "color": { "r": r, "g": g, "b": b } }] });
    node
}

pub fn text_node(id: &str, x: f64, y: f64, characters: &str, family: &str) -> Value {
    json!({
        "id": id,
        "type": "TEXT",
        "name": "Headline",
        "width": 200,
        "height": 24,
        "absoluteTransform": [[1, 0, 100.0 + x], [0, 1, 200.0 + y]],
        "text": {
            "characters": characters,
            "segments": [{
                "characters": characters,
                "fontName": { "family": family, "style": "Bold" },
                "fontSize": 18
            }]
        }
    })
}

pub fn vector_node(id: &str, x: f64, y: f64, markup: Option<&str>) -> Value {
    json!({
        "id": id,
        "type": "VECTOR",
        "width": 24,
        "height": 24,
        "absoluteTransform": [[1, 0, 100.0 + x], [0, 1, 200.0 + y]],
        "svgContent": markup
    })
}

/// A horizontal auto-layout frame at `(x, y)` holding `children`.
pub fn auto_layout_frame(id: &str, x: f64, y: f64, spacing: f64, children: Value) -> Value {
    json!({
        "id": id,
        "type": "FRAME",
        "name": "Toolbar",
        "width": 300,
        "height": 60,
        "absoluteTransform": [[1, 0, 100.0 + x], [0, 1, 200.0 + y]],
        "layoutMode": "HORIZONTAL",
        "itemSpacing": spacing,
        "children": children
    })
}

/// A frame at `(x, y)` with absolutely placed `children`.
pub fn frame(id: &str, x: f64, y: f64, width: f64, height: f64, children: Value) -> Value {
    let mut node = rect_node(id, x, y, width, height);
    node["type"] = json!("FRAME");
    node["children"] = children;
    node
}

pub const STAR_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 2l3 7h7l-5.5 4 2 7-6.5-4.5L5.5 20l2-7L2 9h7z" fill="#fc0"/></svg>"##;
