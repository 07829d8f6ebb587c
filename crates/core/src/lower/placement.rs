//! Placement of a node inside its parent: position, slot size, transform,
//! and flex-item sizing.
use crate::model::{LayoutAlign, LayoutPositioning, LayoutSizing, SceneNode};
use scenemark_ir::{CenterStrategy, LayoutInfo, Origin, Transform2x2, WrapperInfo};
use scenemark_style::{AlignSelf, Dimension, FlexBasis, Position};
use scenemark_types::Affine;

const LINEAR_EPSILON: f64 = 1e-6;

/// The parent's auto-layout main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FlowContext {
    pub column: bool,
}

/// `parent⁻¹ × child`. A singular parent falls back to plain offsetting.
pub(crate) fn relative_transform(parent: &Affine, child: &Affine) -> Affine {
    match parent.inverse() {
        Some(inverse) => inverse.multiply(child),
        None => Affine { e: child.e - parent.e, f: child.f - parent.f, ..*child },
    }
}

pub(crate) fn place(node: &SceneNode, relative: &Affine, flow: Option<&FlowContext>) -> LayoutInfo {
    let width = node.width.max(0.0);
    let height = node.height.max(0.0);
    let mut layout = LayoutInfo::default();

    let (slot_width, slot_height) = if relative.is_linear_identity(LINEAR_EPSILON) {
        layout.left = relative.e;
        layout.top = relative.f;
        (width, height)
    } else {
        let slot = relative.bounds_of(width, height);
        layout.left = slot.x;
        layout.top = slot.y;
        layout.transform_2x2 = Transform2x2 {
            a: relative.a,
            b: relative.b,
            c: relative.c,
            d: relative.d,
        };
        layout.origin = Origin::CENTER;
        let strategy = if relative.is_axis_aligned(LINEAR_EPSILON) {
            CenterStrategy::Inset
        } else {
            CenterStrategy::Translate
        };
        layout.wrapper = Some(WrapperInfo {
            content_width: width,
            content_height: height,
            center_strategy: Some(strategy),
        });
        (slot.width, slot.height)
    };
    layout.width = Dimension::Px(slot_width);
    layout.height = Dimension::Px(slot_height);

    let in_flow = flow.filter(|_| node.layout_positioning != Some(LayoutPositioning::Absolute));
    if let Some(flow) = in_flow {
        place_flow_item(node, flow, &mut layout);
    }
    layout
}

fn place_flow_item(node: &SceneNode, flow: &FlowContext, layout: &mut LayoutInfo) {
    layout.position = Position::Relative;
    layout.left = 0.0;
    layout.top = 0.0;

    let grows = node.layout_grow.is_some_and(|g| g > 0.0);
    let stretches = node.layout_align == Some(LayoutAlign::Stretch);
    let legacy = |main: bool| match (main, grows, stretches) {
        (true, true, _) | (false, _, true) => LayoutSizing::Fill,
        _ => LayoutSizing::Fixed,
    };
    let horizontal = node.layout_sizing_horizontal.unwrap_or_else(|| legacy(!flow.column));
    let vertical = node.layout_sizing_vertical.unwrap_or_else(|| legacy(flow.column));
    let (main, cross) = if flow.column { (vertical, horizontal) } else { (horizontal, vertical) };

    match main {
        LayoutSizing::Fill => {
            layout.flex_grow = Some(1.0);
            layout.flex_basis = Some(FlexBasis::Zero);
            set_main(layout, flow, Dimension::Auto);
        }
        LayoutSizing::Hug => set_main(layout, flow, Dimension::Auto),
        LayoutSizing::Fixed => layout.flex_shrink = Some(0.0),
    }
    match cross {
        LayoutSizing::Fill => {
            layout.align_self = Some(AlignSelf::Stretch);
            set_cross(layout, flow, Dimension::Auto);
        }
        LayoutSizing::Hug => set_cross(layout, flow, Dimension::Auto),
        LayoutSizing::Fixed => {
            layout.align_self = match node.layout_align {
                Some(LayoutAlign::Min) => Some(AlignSelf::FlexStart),
                Some(LayoutAlign::Center) => Some(AlignSelf::Center),
                Some(LayoutAlign::Max) => Some(AlignSelf::FlexEnd),
                _ => None,
            };
        }
    }
}

fn set_main(layout: &mut LayoutInfo, flow: &FlowContext, value: Dimension) {
    if flow.column {
        layout.height = value;
    } else {
        layout.width = value;
    }
}

fn set_cross(layout: &mut LayoutInfo, flow: &FlowContext, value: Dimension) {
    if flow.column {
        layout.width = value;
    } else {
        layout.height = value;
    }
}
