//! Semantic class names derived from layer names.
use scenemark_optimize::is_reserved_class;

/// Layer names the design tool assigns by default. They say nothing about
/// the element and would only add noise to the markup.
const GENERIC_NAMES: &[&str] = &[
    "frame", "group", "rectangle", "ellipse", "vector", "text", "line", "polygon", "star",
    "image", "component", "instance", "layer", "union", "subtract", "intersect", "exclude",
    "mask", "section", "slice", "arrow", "boolean", "shape", "container", "auto-layout",
];

/// Returns the class name for a layer, or `None` when the name is missing,
/// generic, starts with a digit, or would collide with a generated class.
pub fn semantic_class(name: Option<&str>) -> Option<String> {
    let slug = slug::slugify(name?.trim());
    if slug.is_empty() || slug.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    if is_generic(&slug) || is_reserved_class(&slug) {
        return None;
    }
    Some(slug)
}

fn is_generic(slug: &str) -> bool {
    let base = slug.trim_end_matches(|c: char| c.is_ascii_digit()).trim_end_matches('-');
    GENERIC_NAMES.contains(&base)
}
