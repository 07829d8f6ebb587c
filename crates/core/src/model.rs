//! The composition JSON: a normalized export of a design-tool scene graph.
//!
//! Field names follow the exporter (`camelCase`, enum values in
//! `SCREAMING_SNAKE_CASE`). Paint and effect types are kept as strings so
//! that types this crate does not understand can be skipped instead of
//! failing the whole document.

use crate::error::BuildError;
use scenemark_types::{Affine, NodeId, Point, Rect, Rgba};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_one() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    #[serde(default)]
    pub bounds: Option<Rect>,
    /// Absolute-space offset subtracted from every descendant.
    #[serde(default)]
    pub abs_origin: Option<Point>,
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

impl Composition {
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, BuildError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Checks the document-level invariants and returns the validated bounds
    /// and origin.
    pub fn validate(&self) -> Result<(Rect, Point), BuildError> {
        let bounds = self.bounds.ok_or(BuildError::MissingBounds)?;
        if !bounds.is_valid() {
            return Err(BuildError::InvalidBounds(format!(
                "{}x{} at ({}, {})",
                bounds.width, bounds.height, bounds.x, bounds.y
            )));
        }
        let origin = self.abs_origin.ok_or(BuildError::MissingAbsOrigin)?;
        if !origin.x.is_finite() || !origin.y.is_finite() {
            return Err(BuildError::MissingAbsOrigin);
        }
        if self.children.is_empty() {
            return Err(BuildError::EmptyComposition);
        }
        Ok((bounds, origin))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    None,
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutWrap {
    NoWrap,
    Wrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AxisAlign {
    Min,
    Center,
    Max,
    SpaceBetween,
    Baseline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutPositioning {
    Auto,
    Absolute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutAlign {
    Inherit,
    Stretch,
    Min,
    Center,
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutSizing {
    Fixed,
    Hug,
    Fill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrokeAlign {
    Inside,
    Center,
    Outside,
}

/// One layer of the scene graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    pub id: NodeId,
    #[serde(rename = "type", alias = "kind")]
    pub node_type: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    /// Node-to-page transform, `[[a, c, e], [b, d, f]]`.
    #[serde(default)]
    pub absolute_transform: Option<Affine>,
    #[serde(default)]
    pub style: NodeStyle,

    // Auto layout (containers)
    #[serde(default)]
    pub layout_mode: Option<LayoutMode>,
    #[serde(default)]
    pub item_spacing: Option<f64>,
    #[serde(default)]
    pub counter_axis_spacing: Option<f64>,
    #[serde(default)]
    pub layout_wrap: Option<LayoutWrap>,
    #[serde(default)]
    pub primary_axis_align_items: Option<AxisAlign>,
    #[serde(default)]
    pub counter_axis_align_items: Option<AxisAlign>,
    #[serde(default)]
    pub padding_top: Option<f64>,
    #[serde(default)]
    pub padding_right: Option<f64>,
    #[serde(default)]
    pub padding_bottom: Option<f64>,
    #[serde(default)]
    pub padding_left: Option<f64>,
    #[serde(default)]
    pub item_reverse_z_index: bool,
    #[serde(default)]
    pub clips_content: bool,

    // Auto layout (children)
    #[serde(default)]
    pub layout_positioning: Option<LayoutPositioning>,
    #[serde(default)]
    pub layout_grow: Option<f64>,
    #[serde(default)]
    pub layout_align: Option<LayoutAlign>,
    #[serde(default)]
    pub layout_sizing_horizontal: Option<LayoutSizing>,
    #[serde(default)]
    pub layout_sizing_vertical: Option<LayoutSizing>,

    #[serde(default)]
    pub is_mask: bool,
    #[serde(default)]
    pub breaks_mask: bool,
    #[serde(default)]
    pub text: Option<TextData>,
    #[serde(default)]
    pub svg_content: Option<String>,
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub strokes: Vec<Paint>,
    #[serde(default)]
    pub stroke_weight: Option<f64>,
    #[serde(default)]
    pub stroke_align: Option<StrokeAlign>,
    #[serde(default)]
    pub dash_pattern: Vec<f64>,
    #[serde(default)]
    pub effects: Vec<Effect>,
    #[serde(default)]
    pub corner_radius: Option<f64>,
    /// `[top-left, top-right, bottom-right, bottom-left]`.
    #[serde(default)]
    pub rectangle_corner_radii: Option<[f64; 4]>,
    #[serde(default)]
    pub opacity: Option<f64>,
    #[serde(default)]
    pub blend_mode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorStop {
    pub position: f64,
    pub color: Rgba,
}

/// A fill or stroke paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    /// `SOLID`, `GRADIENT_LINEAR`, `GRADIENT_RADIAL`, `IMAGE`, ...
    #[serde(rename = "type")]
    pub paint_type: String,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default = "default_one")]
    pub opacity: f64,
    #[serde(default)]
    pub color: Option<Rgba>,
    #[serde(default)]
    pub gradient_stops: Vec<ColorStop>,
    /// Maps the node's unit square onto gradient space.
    #[serde(default)]
    pub gradient_transform: Option<Affine>,
    #[serde(default)]
    pub image_hash: Option<String>,
    /// `FILL`, `FIT`, `TILE`, or `CROP`.
    #[serde(default)]
    pub scale_mode: Option<String>,
}

impl Paint {
    pub fn solid(color: Rgba) -> Self {
        Self {
            paint_type: "SOLID".to_string(),
            visible: true,
            opacity: 1.0,
            color: Some(color),
            gradient_stops: Vec::new(),
            gradient_transform: None,
            image_hash: None,
            scale_mode: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    /// `DROP_SHADOW`, `INNER_SHADOW`, `LAYER_BLUR`, `BACKGROUND_BLUR`.
    #[serde(rename = "type")]
    pub effect_type: String,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub radius: f64,
    #[serde(default)]
    pub color: Option<Rgba>,
    #[serde(default)]
    pub offset: Option<Point>,
    #[serde(default)]
    pub spread: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextData {
    #[serde(default)]
    pub characters: String,
    #[serde(default)]
    pub segments: Vec<TextSegment>,
    /// `LEFT`, `CENTER`, `RIGHT`, `JUSTIFIED`.
    #[serde(default)]
    pub text_align_horizontal: Option<String>,
    /// `TOP`, `CENTER`, `BOTTOM`.
    #[serde(default)]
    pub text_align_vertical: Option<String>,
    /// `NONE`, `WIDTH_AND_HEIGHT`, `HEIGHT`, `TRUNCATE`.
    #[serde(default)]
    pub text_auto_resize: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    #[serde(default)]
    pub style: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricUnit {
    Pixels,
    Percent,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub unit: MetricUnit,
    #[serde(default)]
    pub value: f64,
}

/// A run of characters sharing one text style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSegment {
    pub characters: String,
    #[serde(default)]
    pub font_name: Option<FontName>,
    #[serde(default)]
    pub font_size: Option<f64>,
    /// Explicit numeric weight; wins over the style name.
    #[serde(default)]
    pub font_weight: Option<u16>,
    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub line_height: Option<Metric>,
    #[serde(default)]
    pub letter_spacing: Option<Metric>,
    /// `NONE`, `UNDERLINE`, `STRIKETHROUGH`.
    #[serde(default)]
    pub text_decoration: Option<String>,
    /// `ORIGINAL`, `UPPER`, `LOWER`, `TITLE`.
    #[serde(default)]
    pub text_case: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_accepts_kind_alias() {
        let node: SceneNode = serde_json::from_value(json!({
            "id": "1:2",
            "kind": "RECTANGLE",
            "width": 10,
            "height": 20,
            "absoluteTransform": [[1, 0, 5], [0, 1, 6]],
            "layoutSizingHorizontal": "FILL"
        }))
        .unwrap();
        assert_eq!(node.node_type, "RECTANGLE");
        assert!(node.visible);
        assert_eq!(node.absolute_transform.unwrap().e, 5.0);
        assert_eq!(node.layout_sizing_horizontal, Some(LayoutSizing::Fill));
    }

    #[test]
    fn test_validate_reports_missing_pieces() {
        let missing_origin = Composition::from_value(json!({
            "bounds": { "x": 0, "y": 0, "width": 100, "height": 100 },
            "children": [{ "id": "1", "type": "FRAME" }]
        }))
        .unwrap();
        assert!(matches!(missing_origin.validate(), Err(BuildError::MissingAbsOrigin)));

        let empty = Composition::from_value(json!({
            "bounds": { "x": 0, "y": 0, "width": 100, "height": 100 },
            "absOrigin": { "x": 0, "y": 0 },
            "children": []
        }))
        .unwrap();
        assert!(matches!(empty.validate(), Err(BuildError::EmptyComposition)));

        let no_bounds = Composition::from_value(json!({ "absOrigin": { "x": 0, "y": 0 } })).unwrap();
        assert!(matches!(no_bounds.validate(), Err(BuildError::MissingBounds)));

        let flat = Composition::from_value(json!({
            "bounds": { "x": 0, "y": 0, "width": 0, "height": 100 },
            "absOrigin": { "x": 0, "y": 0 },
            "children": [{ "id": "1", "type": "FRAME" }]
        }))
        .unwrap();
        assert!(matches!(flat.validate(), Err(BuildError::InvalidBounds(_))));
    }

    #[test]
    fn test_non_numeric_origin_is_rejected() {
        let result = Composition::from_value(json!({
            "bounds": { "x": 0, "y": 0, "width": 1, "height": 1 },
            "absOrigin": { "x": "left", "y": 0 },
            "children": []
        }));
        assert!(matches!(result, Err(BuildError::Json(_))));
    }
}
