//! Named value scales for utility classes.
use scenemark_style::format_number;

/// Spacing step in pixels.
const SPACING_UNIT: f64 = 4.0;
const MAX_SPACING_STEP: f64 = 96.0;
const EPSILON: f64 = 1e-9;

/// The spacing-scale suffix for a pixel value: `0`, `px` (1px), whole
/// steps of 4px up to 384px, and half steps below 16px.
pub fn spacing_step(px: f64) -> Option<String> {
    if px.abs() < EPSILON {
        return Some("0".to_string());
    }
    if (px - 1.0).abs() < EPSILON {
        return Some("px".to_string());
    }
    if px < 0.0 {
        return None;
    }
    let step = px / SPACING_UNIT;
    let doubled = step * 2.0;
    if (doubled - doubled.round()).abs() > EPSILON || step > MAX_SPACING_STEP {
        return None;
    }
    let whole = (step - step.round()).abs() < EPSILON;
    if !whole && step > 4.0 {
        return None;
    }
    Some(format_number(step))
}

const FONT_SIZES: &[(f64, &str)] = &[
    (12.0, "xs"),
    (14.0, "sm"),
    (16.0, "base"),
    (18.0, "lg"),
    (20.0, "xl"),
    (24.0, "2xl"),
    (30.0, "3xl"),
    (36.0, "4xl"),
    (48.0, "5xl"),
    (60.0, "6xl"),
    (72.0, "7xl"),
    (96.0, "8xl"),
    (128.0, "9xl"),
];

pub fn font_size_name(px: f64) -> Option<&'static str> {
    FONT_SIZES
        .iter()
        .find(|(size, _)| (size - px).abs() < EPSILON)
        .map(|(_, name)| *name)
}

pub fn font_weight_name(value: &str) -> Option<&'static str> {
    Some(match value {
        "100" => "thin",
        "200" => "extralight",
        "300" => "light",
        "400" | "normal" => "normal",
        "500" => "medium",
        "600" => "semibold",
        "700" | "bold" => "bold",
        "800" => "extrabold",
        "900" => "black",
        _ => return None,
    })
}

/// Border-radius classes; `None` inside `Some` is the bare `rounded` class.
const RADII: &[(f64, Option<&str>)] = &[
    (0.0, Some("none")),
    (2.0, Some("sm")),
    (4.0, None),
    (6.0, Some("md")),
    (8.0, Some("lg")),
    (12.0, Some("xl")),
    (16.0, Some("2xl")),
    (24.0, Some("3xl")),
    (9999.0, Some("full")),
];

pub fn radius_name(px: f64) -> Option<Option<&'static str>> {
    RADII
        .iter()
        .find(|(radius, _)| (radius - px).abs() < EPSILON)
        .map(|(_, name)| *name)
}

pub fn outline_width_step(px: f64) -> Option<&'static str> {
    [(0.0, "0"), (1.0, "1"), (2.0, "2"), (4.0, "4"), (8.0, "8")]
        .iter()
        .find(|(width, _)| (width - px).abs() < EPSILON)
        .map(|(_, name)| *name)
}
