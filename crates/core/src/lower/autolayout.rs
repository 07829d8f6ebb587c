//! Auto-layout containers as flexbox.
use super::placement::FlowContext;
use crate::model::{AxisAlign, LayoutMode, LayoutWrap, SceneNode};
use scenemark_ir::LayoutInfo;
use scenemark_style::{
    AlignItems, BoxSizing, Display, FlexDirection, FlexWrap, JustifyContent, Overflow, Padding,
};

fn auto_layout_mode(node: &SceneNode) -> Option<LayoutMode> {
    node.layout_mode.filter(|mode| *mode != LayoutMode::None)
}

/// The flow context children of `node` are placed in, if it uses auto
/// layout.
pub(crate) fn flow_context(node: &SceneNode) -> Option<FlowContext> {
    auto_layout_mode(node).map(|mode| FlowContext { column: mode == LayoutMode::Vertical })
}

pub(crate) fn apply_container(node: &SceneNode, layout: &mut LayoutInfo) {
    if node.clips_content {
        layout.overflow = Some(Overflow::Hidden);
    }
    let Some(mode) = auto_layout_mode(node) else {
        return;
    };

    layout.display = Display::Flex;
    layout.flex_direction = Some(match mode {
        LayoutMode::Vertical => FlexDirection::Column,
        _ => FlexDirection::Row,
    });

    let spacing = node.item_spacing.unwrap_or(0.0);
    let primary = node.primary_axis_align_items.unwrap_or(AxisAlign::Min);
    let wraps = mode == LayoutMode::Horizontal && node.layout_wrap == Some(LayoutWrap::Wrap);
    if wraps {
        layout.flex_wrap = Some(FlexWrap::Wrap);
        if spacing >= 0.0 && primary != AxisAlign::SpaceBetween {
            layout.column_gap = Some(spacing);
        }
        layout.row_gap = Some(node.counter_axis_spacing.unwrap_or(spacing).max(0.0));
    } else if spacing > 0.0 && primary != AxisAlign::SpaceBetween {
        layout.gap = Some(spacing);
    }

    layout.justify_content = match primary {
        AxisAlign::Min | AxisAlign::Baseline => None,
        AxisAlign::Center => Some(JustifyContent::Center),
        AxisAlign::Max => Some(JustifyContent::FlexEnd),
        AxisAlign::SpaceBetween => Some(JustifyContent::SpaceBetween),
    };
    layout.align_items = Some(match node.counter_axis_align_items.unwrap_or(AxisAlign::Min) {
        AxisAlign::Min | AxisAlign::SpaceBetween => AlignItems::FlexStart,
        AxisAlign::Center => AlignItems::Center,
        AxisAlign::Max => AlignItems::FlexEnd,
        AxisAlign::Baseline => AlignItems::Baseline,
    });

    layout.padding = Padding {
        t: node.padding_top.unwrap_or(0.0),
        r: node.padding_right.unwrap_or(0.0),
        b: node.padding_bottom.unwrap_or(0.0),
        l: node.padding_left.unwrap_or(0.0),
    };
    layout.box_sizing = Some(BoxSizing::BorderBox);
    layout.item_spacing = Some(spacing);
    layout.item_reverse_z_index = node.item_reverse_z_index;
}
