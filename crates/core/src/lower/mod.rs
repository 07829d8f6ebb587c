//! Lowering of composition nodes into `RenderNodeIR`.
//!
//! The lowering walks the scene graph once, depth first. Each node is placed
//! relative to its parent (`placement`), gets flex container properties when
//! it uses auto layout (`autolayout`), has its paints, strokes, and effects
//! turned into declarations (`paint`), and finally produces its content:
//! child nodes, pre-rendered text (`text`), or an SVG asset reference.

mod autolayout;
mod paint;
mod placement;
mod text;

#[cfg(test)]
mod lower_test;

use crate::error::BuildError;
use crate::model::{Composition, SceneNode};
use placement::FlowContext;
use scenemark_ir::{DocumentIr, NodeContent, NodeKind, RenderNodeIR, StyleInfo};
use scenemark_traits::FontRequest;
use scenemark_types::Affine;
use std::collections::BTreeSet;

/// Default nesting limit for the recursive lowering and rendering.
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowerOptions {
    pub max_depth: usize,
}

impl Default for LowerOptions {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

/// The IR document plus everything collected on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct LoweredComposition {
    pub document: DocumentIr,
    /// Distinct font faces used by text segments, sorted.
    pub fonts: Vec<FontRequest>,
    /// Distinct image hashes referenced by image fills, sorted.
    pub images: Vec<String>,
}

/// Validates `composition` and lowers it into the render IR.
pub fn lower_composition(
    composition: &Composition,
    options: &LowerOptions,
) -> Result<LoweredComposition, BuildError> {
    let (bounds, origin) = composition.validate()?;
    let mut lowerer = Lowerer {
        max_depth: options.max_depth,
        fonts: BTreeSet::new(),
        images: BTreeSet::new(),
    };
    let root = ParentContext { abs: Affine::translate(origin.x, origin.y), flow: None };
    let children = composition
        .children
        .iter()
        .map(|child| lowerer.lower_node(child, &root, 1))
        .collect::<Result<Vec<_>, _>>()?;

    let document = DocumentIr { bounds, children };
    log::info!(
        "Lowered composition: {} nodes, {} font faces, {} images",
        document.node_count(),
        lowerer.fonts.len(),
        lowerer.images.len()
    );
    Ok(LoweredComposition {
        document,
        fonts: lowerer.fonts.into_iter().collect(),
        images: lowerer.images.into_iter().collect(),
    })
}

struct ParentContext {
    /// The parent's node-to-page transform.
    abs: Affine,
    /// Present when the parent lays its children out with auto layout.
    flow: Option<FlowContext>,
}

struct Lowerer {
    max_depth: usize,
    fonts: BTreeSet<FontRequest>,
    images: BTreeSet<String>,
}

impl Lowerer {
    fn lower_node(
        &mut self,
        node: &SceneNode,
        parent: &ParentContext,
        depth: usize,
    ) -> Result<RenderNodeIR, BuildError> {
        if depth > self.max_depth {
            return Err(BuildError::TooDeep {
                node_id: node.id.to_string(),
                limit: self.max_depth,
            });
        }

        let abs = node.absolute_transform.unwrap_or(parent.abs);
        let relative = placement::relative_transform(&parent.abs, &abs);
        let kind = node_kind(node);

        let mut layout = placement::place(node, &relative, parent.flow.as_ref());
        autolayout::apply_container(node, &mut layout);
        let (mut css, raw) = paint::box_paint(node, kind, &mut self.images);

        let content = match kind {
            NodeKind::Frame => {
                let context = ParentContext { abs, flow: autolayout::flow_context(node) };
                let nodes = node
                    .children
                    .iter()
                    .map(|child| self.lower_node(child, &context, depth + 1))
                    .collect::<Result<Vec<_>, _>>()?;
                NodeContent::Children { nodes }
            }
            NodeKind::Text => match &node.text {
                Some(data) => text::lower_text(data, &mut layout, &mut css, &mut self.fonts),
                None => NodeContent::Text { html: String::new() },
            },
            NodeKind::Svg => NodeContent::Svg {
                file: format!("{}.svg", node.id.file_stem()),
                markup: node.svg_content.clone().filter(|m| !m.trim().is_empty()),
            },
            NodeKind::Shape => NodeContent::Empty,
        };

        Ok(RenderNodeIR {
            id: node.id.clone(),
            name: node.name.clone(),
            kind,
            layout,
            style: StyleInfo { box_css: css.to_css(), raw },
            content,
            visible: node.visible,
            is_mask: node.is_mask,
            breaks_mask: node.breaks_mask,
        })
    }
}

fn node_kind(node: &SceneNode) -> NodeKind {
    if node.svg_content.is_some() {
        return NodeKind::Svg;
    }
    match node.node_type.as_str() {
        "TEXT" => NodeKind::Text,
        "VECTOR" | "STAR" | "POLYGON" | "LINE" | "BOOLEAN_OPERATION" => NodeKind::Svg,
        "RECTANGLE" | "ELLIPSE" => NodeKind::Shape,
        "FRAME" | "GROUP" | "COMPONENT" | "COMPONENT_SET" | "INSTANCE" | "SECTION" => {
            NodeKind::Frame
        }
        other => {
            log::debug!("Treating unknown node type '{}' of '{}' as a frame", other, node.id);
            NodeKind::Frame
        }
    }
}
