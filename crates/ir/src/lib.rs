//! Render-node intermediate representation (IR).
//!
//! The IR sits between the design tool's scene graph and the HTML backends.
//! Every node already carries its layout in CSS terms (`LayoutInfo`) and its
//! paint as a flat declaration string (`StyleInfo::box_css`); the renderers
//! only decide how to split, optimize, and emit that information.

use scenemark_style::{
    AlignItems, AlignSelf, BoxSizing, Dimension, Display, FlexBasis, FlexDirection, FlexWrap,
    JustifyContent, Overflow, Padding, Position,
};
use scenemark_types::{NodeId, Rect};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// The closed set of node variants the renderers dispatch over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Frame,
    Text,
    Svg,
    Shape,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Frame => "frame",
            NodeKind::Text => "text",
            NodeKind::Svg => "svg",
            NodeKind::Shape => "shape",
        }
    }
}

/// One visual unit of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderNodeIR {
    pub id: NodeId,
    /// The layer name in the design tool, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub kind: NodeKind,
    pub layout: LayoutInfo,
    #[serde(default)]
    pub style: StyleInfo,
    pub content: NodeContent,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_mask: bool,
    /// Closes any open mask segment: this sibling and the ones after it are
    /// not clipped by a preceding mask.
    #[serde(default, skip_serializing_if = "is_false")]
    pub breaks_mask: bool,
}

impl RenderNodeIR {
    pub fn children(&self) -> &[RenderNodeIR] {
        match &self.content {
            NodeContent::Children { nodes } => nodes,
            _ => &[],
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }
}

/// What a node renders inside its box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeContent {
    Children { nodes: Vec<RenderNodeIR> },
    /// Pre-rendered, already escaped inline HTML.
    Text { html: String },
    /// An externalized vector asset. `markup` is `None` when the export
    /// failed upstream; renderers fall back to a placeholder.
    Svg {
        file: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        markup: Option<String>,
    },
    Empty,
}

/// The 2×2 linear part of a node's transform, CSS `matrix(a, b, c, d, 0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2x2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Default for Transform2x2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2x2 {
    pub const IDENTITY: Transform2x2 = Transform2x2 { a: 1.0, b: 0.0, c: 0.0, d: 1.0 };
    const EPSILON: f64 = 1e-6;

    pub fn is_identity(&self) -> bool {
        (self.a - 1.0).abs() < Self::EPSILON
            && self.b.abs() < Self::EPSILON
            && self.c.abs() < Self::EPSILON
            && (self.d - 1.0).abs() < Self::EPSILON
    }
}

/// `transform-origin` as fractions of the box (`0.5, 0.5` is the center).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

impl Origin {
    pub const CENTER: Origin = Origin { x: 0.5, y: 0.5 };
}

/// How the inner box of a wrapper is centered inside the outer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CenterStrategy {
    /// `inset:0; margin:auto` with an explicit size.
    Inset,
    /// `left:50%; top:50%` with negative half-size margins.
    Translate,
}

/// Present when the node's content box differs from its layout slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrapperInfo {
    pub content_width: f64,
    pub content_height: f64,
    /// Required; `None` only when a producer forgot it, which renderers
    /// reject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_strategy: Option<CenterStrategy>,
}

/// A node's layout, already expressed in CSS box-model terms.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutInfo {
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub width: Dimension,
    #[serde(default)]
    pub height: Dimension,
    #[serde(default)]
    pub display: Display,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_wrap: Option<FlexWrap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_gap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_gap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<JustifyContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_items: Option<AlignItems>,
    #[serde(default)]
    pub padding: Padding,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_sizing: Option<BoxSizing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overflow: Option<Overflow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_grow: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_shrink: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_basis: Option<FlexBasis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_self: Option<AlignSelf>,
    #[serde(default, rename = "transform2x2")]
    pub transform_2x2: Transform2x2,
    #[serde(default)]
    pub origin: Origin,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrapper: Option<WrapperInfo>,
    /// Raw auto-layout spacing between children; may be negative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub item_reverse_z_index: bool,
}

impl LayoutInfo {
    pub fn is_auto_layout(&self) -> bool {
        self.display == Display::Flex
    }

    pub fn is_absolute(&self) -> bool {
        self.position == Position::Absolute
    }
}

/// A node's paint, effects, and text styling.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleInfo {
    /// Semicolon-joined CSS declarations (`prop:value;`).
    #[serde(default)]
    pub box_css: String,
    #[serde(default)]
    pub raw: RawStyle,
}

/// Facts about the source paint that the CSS string cannot express.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStyle {
    #[serde(default, skip_serializing_if = "is_false")]
    pub has_visible_stroke: bool,
    #[serde(default)]
    pub fill_count: usize,
    #[serde(default)]
    pub effect_count: usize,
    /// The node's outline is an ellipse rather than a (rounded) rectangle.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_ellipse: bool,
}

/// A lowered composition: the root bounds plus the top-level nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentIr {
    pub bounds: Rect,
    pub children: Vec<RenderNodeIR>,
}

impl DocumentIr {
    pub fn node_count(&self) -> usize {
        self.children.iter().map(RenderNodeIR::subtree_len).sum()
    }
}
