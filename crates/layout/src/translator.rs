//! Translation of one node's `LayoutInfo` into CSS declarations.
use scenemark_ir::LayoutInfo;
use scenemark_style::{format_number, format_percent, normalize_length, Declarations, Position};

/// The four CSS fragments a layout record produces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutCss {
    /// Flex container and box properties (`display`, `gap`, `padding`, ...).
    pub container: Declarations,
    /// `position` plus `left`/`top` for absolutely positioned nodes.
    pub position: Declarations,
    /// Explicit size and flex-item properties.
    pub sizing: Declarations,
    /// `transform-origin` and, when the 2x2 part is not the identity,
    /// `transform`.
    pub transform: Declarations,
}

impl LayoutCss {
    /// All fragments in canonical order: position, sizing, container,
    /// transform.
    pub fn merged(&self) -> Declarations {
        let mut all = self.position.clone();
        all.extend(&self.sizing);
        all.extend(&self.container);
        all.extend(&self.transform);
        all
    }
}

pub fn translate_layout(layout: &LayoutInfo) -> LayoutCss {
    LayoutCss {
        container: container_css(layout),
        position: position_css(layout),
        sizing: sizing_css(layout),
        transform: transform_css(layout),
    }
}

fn container_css(layout: &LayoutInfo) -> Declarations {
    let mut css = Declarations::new();
    if layout.is_auto_layout() {
        css.set("display", "flex");
        if let Some(direction) = layout.flex_direction {
            css.set("flex-direction", direction.as_css());
        }
        if let Some(wrap) = layout.flex_wrap {
            css.set("flex-wrap", wrap.as_css());
        }
        // A one-sided gap must not leak into the other axis through the shorthand.
        match (layout.row_gap.or(layout.gap), layout.column_gap.or(layout.gap)) {
            (Some(row), Some(column)) if (row - column).abs() <= f64::EPSILON => {
                css.set("gap", normalize_length(row));
            }
            (row, column) => {
                if let Some(row) = row {
                    css.set("row-gap", normalize_length(row));
                }
                if let Some(column) = column {
                    css.set("column-gap", normalize_length(column));
                }
            }
        }
        if let Some(justify) = layout.justify_content {
            css.set("justify-content", justify.as_css());
        }
        if let Some(align) = layout.align_items {
            css.set("align-items", align.as_css());
        }
    }
    if !layout.padding.is_zero() {
        css.set("padding", layout.padding.to_css());
    }
    if let Some(overflow) = layout.overflow {
        css.set("overflow", overflow.as_css());
    }
    if let Some(sizing) = layout.box_sizing {
        css.set("box-sizing", sizing.as_css());
    }
    css
}

fn position_css(layout: &LayoutInfo) -> Declarations {
    let mut css = Declarations::new();
    css.set("position", layout.position.as_css());
    if layout.position == Position::Absolute {
        css.set("left", normalize_length(layout.left));
        css.set("top", normalize_length(layout.top));
    }
    css
}

fn sizing_css(layout: &LayoutInfo) -> Declarations {
    let mut css = Declarations::new();
    if let Some(width) = layout.width.px() {
        css.set("width", normalize_length(width));
    }
    if let Some(height) = layout.height.px() {
        css.set("height", normalize_length(height));
    }
    if let Some(grow) = layout.flex_grow.filter(|g| *g > 0.0) {
        css.set("flex-grow", format_number(grow));
        css.set("min-width", "0");
        css.set("min-height", "0");
    }
    if let Some(shrink) = layout.flex_shrink {
        css.set("flex-shrink", format_number(shrink));
    }
    if let Some(basis) = layout.flex_basis {
        css.set("flex-basis", basis.as_css());
    }
    if let Some(align) = layout.align_self {
        css.set("align-self", align.as_css());
    }
    css
}

fn transform_css(layout: &LayoutInfo) -> Declarations {
    let mut css = Declarations::new();
    let origin = layout.origin;
    css.set(
        "transform-origin",
        format!("{} {}", format_percent(origin.x), format_percent(origin.y)),
    );
    let m = layout.transform_2x2;
    if !m.is_identity() {
        css.set(
            "transform",
            format!(
                "matrix({}, {}, {}, {}, 0, 0)",
                format_number(m.a),
                format_number(m.b),
                format_number(m.c),
                format_number(m.d)
            ),
        );
    }
    css
}
