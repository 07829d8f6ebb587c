//! Clip CSS for masked segments.
use scenemark_ir::{LayoutInfo, NodeContent, NodeKind, RenderNodeIR};
use scenemark_layout::translate_layout;
use scenemark_style::{collapse_box, normalize_length, Declarations, Dimension};
use scenemark_types::{Point, Size};

/// Flex properties a flow container copies from its auto-layout parent.
const FLOW_PROPERTIES: &[&str] = &[
    "display",
    "flex-direction",
    "flex-wrap",
    "gap",
    "row-gap",
    "column-gap",
    "justify-content",
    "align-items",
];

/// How a mask node clips the siblings that follow it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum MaskClip {
    /// `mask:url(svgs/<file>)` sized to the mask's slot. The caller
    /// registers the asset.
    Vector { file: String, markup: String },
    Css(Declarations),
    /// The mask has no resolvable geometry; members render unclipped.
    None,
}

/// The full-cover container every masked segment renders into.
pub(crate) fn cover_css() -> Declarations {
    Declarations::from_iter([
        ("position", "absolute"),
        ("left", "0"),
        ("top", "0"),
        ("width", "100%"),
        ("height", "100%"),
    ])
}

/// The container for a masked segment inside an auto-layout parent. It
/// takes the mask's slot in the parent's flow and lays its members out with
/// the parent's flex settings. Returns the container CSS and the mask size,
/// or `None` when the mask has no fixed size.
pub(crate) fn flow_container_css(
    mask: &RenderNodeIR,
    parent: &LayoutInfo,
) -> Option<(Declarations, Size)> {
    let (Dimension::Px(width), Dimension::Px(height)) = (mask.layout.width, mask.layout.height)
    else {
        return None;
    };
    let mut css = Declarations::from_iter([("position", "relative")]);
    css.extend(&translate_layout(&mask.layout).sizing);
    if !css.contains("flex-shrink") {
        css.set("flex-shrink", "0");
    }
    let flex = translate_layout(parent).container;
    for prop in FLOW_PROPERTIES {
        if let Some(value) = flex.get(prop) {
            css.set(*prop, value);
        }
    }
    Some((css, Size { width, height }))
}

/// Derives the clip for `mask` with its box at `origin` inside a segment
/// container of size `area` (when known).
pub(crate) fn mask_clip(mask: &RenderNodeIR, origin: Point, area: Option<Size>) -> MaskClip {
    let (Dimension::Px(width), Dimension::Px(height)) = (mask.layout.width, mask.layout.height)
    else {
        log::debug!("Mask '{}' has an auto size; its segment is not clipped", mask.id);
        return MaskClip::None;
    };
    let left = origin.x;
    let top = origin.y;

    if mask.kind == NodeKind::Svg {
        match &mask.content {
            NodeContent::Svg { file, markup: Some(markup) } => {
                return MaskClip::Vector { file: file.clone(), markup: markup.clone() };
            }
            _ => log::warn!("Vector mask '{}' has no markup; clipping to its box", mask.id),
        }
    }

    let placement = format!(
        "no-repeat {} {} / {} {}",
        normalize_length(left),
        normalize_length(top),
        normalize_length(width),
        normalize_length(height)
    );
    let mut css = Declarations::new();

    if mask.style.raw.is_ellipse {
        let value = format!("radial-gradient(closest-side,#000 100%,transparent 100%) {}", placement);
        css.set("-webkit-mask", value.clone());
        css.set("mask", value);
        return MaskClip::Css(css);
    }

    let paint = Declarations::parse(&mask.style.box_css);
    match (paint.get("border-radius"), area) {
        (Some(radius), Some(area)) => {
            let sides = [
                top,
                area.width - (left + width),
                area.height - (top + height),
                left,
            ]
            .map(normalize_length);
            css.set("clip-path", format!("inset({} round {})", collapse_box(sides), radius));
        }
        _ => {
            let value = format!("linear-gradient(#000,#000) {}", placement);
            css.set("-webkit-mask", value.clone());
            css.set("mask", value);
        }
    }
    MaskClip::Css(css)
}

/// `mask:url(...)` declarations for a vector mask asset.
pub(crate) fn vector_mask_css(mask: &RenderNodeIR, file: &str, origin: Point) -> Declarations {
    let mut css = Declarations::new();
    let value = format!(
        "url(svgs/{}) no-repeat {} {} / {} {}",
        file,
        normalize_length(origin.x),
        normalize_length(origin.y),
        normalize_length(mask.layout.width.px().unwrap_or(0.0)),
        normalize_length(mask.layout.height.px().unwrap_or(0.0))
    );
    css.set("-webkit-mask", value.clone());
    css.set("mask", value);
    css
}
