//! Composition of a node's box: a single element, or an outer slot element
//! wrapping a transformed inner content element.
use crate::shadow::{migrate_shadows, needs_shadow_migration};
use crate::translator::translate_layout;
use crate::LayoutError;
use scenemark_ir::{CenterStrategy, LayoutInfo};
use scenemark_style::{normalize_length, Declarations};
use scenemark_types::NodeId;

/// The CSS for the one or two elements that make up a node's box.
#[derive(Debug, Clone, PartialEq)]
pub enum BoxLayout {
    Single(Declarations),
    /// `outer` occupies the layout slot; `inner` carries the content size,
    /// the transform, the container properties, and the paint.
    Wrapper { outer: Declarations, inner: Declarations },
}

impl BoxLayout {
    /// The element that receives the node's children and paint.
    pub fn content(&self) -> &Declarations {
        match self {
            BoxLayout::Single(css) => css,
            BoxLayout::Wrapper { inner, .. } => inner,
        }
    }

    pub fn content_mut(&mut self) -> &mut Declarations {
        match self {
            BoxLayout::Single(css) => css,
            BoxLayout::Wrapper { inner, .. } => inner,
        }
    }

    /// The element placed in the parent (the one sibling-level CSS such as
    /// `z-index` belongs to).
    pub fn slot_mut(&mut self) -> &mut Declarations {
        match self {
            BoxLayout::Single(css) => css,
            BoxLayout::Wrapper { outer, .. } => outer,
        }
    }

    pub fn is_wrapper(&self) -> bool {
        matches!(self, BoxLayout::Wrapper { .. })
    }
}

/// Builds the box CSS for a node from its layout record and paint
/// declarations.
pub fn compose_box(
    id: &NodeId,
    layout: &LayoutInfo,
    paint: &Declarations,
) -> Result<BoxLayout, LayoutError> {
    match &layout.wrapper {
        None => Ok(BoxLayout::Single(single_box(layout, paint))),
        Some(wrapper) => {
            let strategy = wrapper.center_strategy.ok_or_else(|| {
                LayoutError::MissingCenterStrategy { node_id: id.to_string() }
            })?;
            let (mut outer, mut inner) =
                wrapper_box(layout, paint, strategy, wrapper.content_width, wrapper.content_height);
            if needs_shadow_migration(layout) {
                let moved = migrate_shadows(&mut outer, &mut inner);
                if moved > 0 {
                    log::debug!("Moved {} shadow(s) of '{}' onto its wrapper", moved, id);
                }
            }
            Ok(BoxLayout::Wrapper { outer, inner })
        }
    }
}

fn single_box(layout: &LayoutInfo, paint: &Declarations) -> Declarations {
    let mut css = translate_layout(layout).merged();
    css.extend(paint);
    if layout.width.is_auto() {
        css.remove("width");
    }
    if layout.height.is_auto() {
        css.remove("height");
    }
    css
}

fn wrapper_box(
    layout: &LayoutInfo,
    paint: &Declarations,
    strategy: CenterStrategy,
    content_width: f64,
    content_height: f64,
) -> (Declarations, Declarations) {
    let fragments = translate_layout(layout);

    let mut outer = fragments.position.clone();
    outer.extend(&fragments.sizing);

    let mut inner = Declarations::new();
    inner.set("position", "absolute");
    match strategy {
        CenterStrategy::Inset => {
            inner.set("inset", "0");
            inner.set("margin", "auto");
        }
        CenterStrategy::Translate => {
            inner.set("left", "50%");
            inner.set("top", "50%");
        }
    }
    inner.set("width", normalize_length(content_width));
    inner.set("height", normalize_length(content_height));
    if strategy == CenterStrategy::Translate {
        inner.set("margin-left", normalize_length(-content_width / 2.0));
        inner.set("margin-top", normalize_length(-content_height / 2.0));
    }
    inner.extend(&fragments.container);
    inner.extend(&fragments.transform);
    for (prop, value) in paint.iter() {
        if !matches!(prop, "width" | "height") {
            inner.set(prop, value);
        }
    }
    (outer, inner)
}
