//! Fills, strokes, effects, corners, opacity, and blending as box CSS.
use crate::model::{Effect, Paint, SceneNode, StrokeAlign};
use itertools::Itertools;
use scenemark_ir::{NodeKind, RawStyle};
use scenemark_style::{
    collapse_box, css_color, format_number, format_percent, normalize_angle, normalize_length,
    Declarations,
};
use scenemark_types::{Affine, Point, Rgba};
use std::collections::BTreeSet;

const EPSILON: f64 = 1e-9;

pub(crate) fn box_paint(
    node: &SceneNode,
    kind: NodeKind,
    images: &mut BTreeSet<String>,
) -> (Declarations, RawStyle) {
    let style = &node.style;
    let mut css = Declarations::new();
    let fills: Vec<&Paint> = style.fills.iter().filter(|p| p.visible).collect();
    let effects: Vec<&Effect> = style.effects.iter().filter(|e| e.visible).collect();
    let is_ellipse = node.node_type == "ELLIPSE";

    match kind {
        NodeKind::Text => {
            if let Some(color) = top_solid(&fills) {
                css.set("color", css_color(&color));
            }
        }
        NodeKind::Svg => {}
        NodeKind::Frame | NodeKind::Shape => {
            if let Some(background) = backgrounds(&fills, node.width, node.height, images) {
                css.set("background", background);
            }
        }
    }

    let has_visible_stroke = stroke(node, kind, &mut css);

    if kind != NodeKind::Svg {
        if is_ellipse {
            css.set("border-radius", "50%");
        } else if let Some(radius) = corner_radius(node) {
            css.set("border-radius", radius);
        }
    }

    apply_effects(&effects, kind, &mut css);

    if let Some(opacity) = style.opacity.filter(|o| *o < 1.0 - EPSILON) {
        css.set("opacity", format_number(opacity.max(0.0)));
    }
    if let Some(mode) = style.blend_mode.as_deref().and_then(blend_mode) {
        css.set("mix-blend-mode", mode);
    }

    let raw = RawStyle {
        has_visible_stroke,
        fill_count: fills.len(),
        effect_count: effects.len(),
        is_ellipse,
    };
    (css, raw)
}

/// The topmost visible solid color of a paint stack.
pub(crate) fn top_solid(paints: &[&Paint]) -> Option<Rgba> {
    paints
        .iter()
        .rev()
        .find(|p| p.paint_type == "SOLID")
        .and_then(|p| p.color.map(|c| c.with_opacity(p.opacity)))
}

/// A `background` value layering `fills` (listed bottom first) top first.
fn backgrounds(
    fills: &[&Paint],
    width: f64,
    height: f64,
    images: &mut BTreeSet<String>,
) -> Option<String> {
    let count = fills.len();
    let layers: Vec<String> = fills
        .iter()
        .rev()
        .enumerate()
        .filter_map(|(position, paint)| {
            let bottom = position + 1 == count;
            layer(paint, bottom, width, height, images)
        })
        .collect();
    (!layers.is_empty()).then(|| layers.join(", "))
}

fn layer(
    paint: &Paint,
    bottom: bool,
    width: f64,
    height: f64,
    images: &mut BTreeSet<String>,
) -> Option<String> {
    match paint.paint_type.as_str() {
        "SOLID" => {
            let color = css_color(&paint.color?.with_opacity(paint.opacity));
            Some(if bottom { color } else { format!("linear-gradient({0}, {0})", color) })
        }
        "GRADIENT_LINEAR" => linear_gradient(paint, width, height),
        "GRADIENT_RADIAL" => radial_gradient(paint, width, height),
        "IMAGE" => {
            let hash = paint.image_hash.as_deref()?;
            images.insert(hash.to_string());
            if paint.opacity < 1.0 - EPSILON {
                log::debug!("Image fill opacity {} is not representable; ignored", paint.opacity);
            }
            let url = format!("url(images/{}.png)", hash);
            Some(match paint.scale_mode.as_deref().unwrap_or("FILL") {
                "FIT" => format!("{} center / contain no-repeat", url),
                "TILE" => format!("{} repeat", url),
                "CROP" => format!("{} center / 100% 100% no-repeat", url),
                _ => format!("{} center / cover no-repeat", url),
            })
        }
        other => {
            log::debug!("Skipping unsupported paint type '{}'", other);
            None
        }
    }
}

/// Maps a point of the gradient's unit space back into node pixels.
fn gradient_point(inverse: &Affine, x: f64, y: f64, width: f64, height: f64) -> Point {
    let p = inverse.apply(Point::new(x, y));
    Point::new(p.x * width, p.y * height)
}

fn gradient_inverse(paint: &Paint) -> Affine {
    paint
        .gradient_transform
        .and_then(|t| t.inverse())
        .unwrap_or(Affine::IDENTITY)
}

fn stops(paint: &Paint, position: impl Fn(f64) -> f64) -> Option<String> {
    if paint.gradient_stops.is_empty() {
        return None;
    }
    Some(
        paint
            .gradient_stops
            .iter()
            .map(|stop| {
                format!(
                    "{} {}",
                    css_color(&stop.color.with_opacity(paint.opacity)),
                    format_percent(position(stop.position))
                )
            })
            .join(", "),
    )
}

fn linear_gradient(paint: &Paint, width: f64, height: f64) -> Option<String> {
    let inverse = gradient_inverse(paint);
    let start = gradient_point(&inverse, 0.0, 0.5, width, height);
    let end = gradient_point(&inverse, 1.0, 0.5, width, height);
    let (dx, dy) = (end.x - start.x, end.y - start.y);
    let theta = if dx.abs() < EPSILON && dy.abs() < EPSILON {
        std::f64::consts::FRAC_PI_2
    } else {
        dx.atan2(-dy)
    };
    let (ux, uy) = (theta.sin(), -theta.cos());
    let length = (width * theta.sin()).abs() + (height * theta.cos()).abs();
    let css_start = Point::new(width / 2.0 - ux * length / 2.0, height / 2.0 - uy * length / 2.0);

    let stops = stops(paint, |t| {
        if length < EPSILON {
            return t;
        }
        let p = Point::new(start.x + t * dx, start.y + t * dy);
        ((p.x - css_start.x) * ux + (p.y - css_start.y) * uy) / length
    })?;
    Some(format!("linear-gradient({}, {})", normalize_angle(theta.to_degrees()), stops))
}

fn radial_gradient(paint: &Paint, width: f64, height: f64) -> Option<String> {
    let inverse = gradient_inverse(paint);
    let center = gradient_point(&inverse, 0.5, 0.5, width, height);
    let rx_handle = gradient_point(&inverse, 1.0, 0.5, width, height);
    let ry_handle = gradient_point(&inverse, 0.5, 1.0, width, height);
    let rx = (rx_handle.x - center.x).hypot(rx_handle.y - center.y);
    let ry = (ry_handle.x - center.x).hypot(ry_handle.y - center.y);
    let stops = stops(paint, |t| t)?;
    Some(format!(
        "radial-gradient(ellipse {} {} at {} {}, {})",
        normalize_length(rx),
        normalize_length(ry),
        normalize_length(center.x),
        normalize_length(center.y),
        stops
    ))
}

/// Writes the stroke declarations; returns whether a visible stroke exists.
fn stroke(node: &SceneNode, kind: NodeKind, css: &mut Declarations) -> bool {
    let style = &node.style;
    let weight = style.stroke_weight.unwrap_or(1.0);
    let Some(paint) = style.strokes.iter().rev().find(|p| p.visible) else {
        return false;
    };
    if weight <= EPSILON {
        return false;
    }
    let color = match (paint.paint_type.as_str(), paint.color) {
        ("SOLID", Some(color)) => color.with_opacity(paint.opacity),
        (other, _) => {
            log::debug!("Skipping unsupported stroke paint '{}' on '{}'", other, node.id);
            return kind == NodeKind::Svg;
        }
    };
    let width = normalize_length(weight);
    match kind {
        NodeKind::Svg => {}
        NodeKind::Text => {
            css.set("-webkit-text-stroke", format!("{} {}", width, css_color(&color)));
        }
        NodeKind::Frame | NodeKind::Shape => {
            let line = if style.dash_pattern.iter().any(|d| *d > 0.0) { "dashed" } else { "solid" };
            css.set("outline", format!("{} {} {}", width, line, css_color(&color)));
            let offset = match style.stroke_align.unwrap_or(StrokeAlign::Inside) {
                StrokeAlign::Inside => -weight,
                StrokeAlign::Center => -weight / 2.0,
                StrokeAlign::Outside => 0.0,
            };
            css.set("outline-offset", normalize_length(offset));
        }
    }
    true
}

fn corner_radius(node: &SceneNode) -> Option<String> {
    if let Some(radii) = node.style.rectangle_corner_radii {
        if radii.iter().any(|r| *r > EPSILON) {
            return Some(collapse_box(radii.map(normalize_length)));
        }
        return None;
    }
    node.style
        .corner_radius
        .filter(|r| *r > EPSILON)
        .map(normalize_length)
}

fn shadow_color(effect: &Effect) -> String {
    css_color(&effect.color.unwrap_or(Rgba::new(0.0, 0.0, 0.0, 0.25)))
}

fn apply_effects(effects: &[&Effect], kind: NodeKind, css: &mut Declarations) {
    let mut shadows = Vec::new();
    let mut filters = Vec::new();
    let mut backdrop = Vec::new();
    for effect in effects {
        let offset = effect.offset.unwrap_or_default();
        let (x, y) = (normalize_length(offset.x), normalize_length(offset.y));
        let blur = normalize_length(effect.radius);
        match (effect.effect_type.as_str(), kind) {
            ("DROP_SHADOW", NodeKind::Svg) => {
                filters.push(format!("drop-shadow({} {} {} {})", x, y, blur, shadow_color(effect)));
            }
            ("DROP_SHADOW", _) | ("INNER_SHADOW", NodeKind::Frame | NodeKind::Shape) => {
                let mut parts = Vec::with_capacity(6);
                if effect.effect_type == "INNER_SHADOW" {
                    parts.push("inset".to_string());
                }
                parts.extend([x, y, blur]);
                if effect.spread.abs() > EPSILON && kind != NodeKind::Text {
                    parts.push(normalize_length(effect.spread));
                }
                parts.push(shadow_color(effect));
                shadows.push(parts.join(" "));
            }
            ("LAYER_BLUR", _) => filters.push(format!("blur({})", normalize_length(effect.radius / 2.0))),
            ("BACKGROUND_BLUR", _) => {
                backdrop.push(format!("blur({})", normalize_length(effect.radius / 2.0)))
            }
            (other, _) => log::debug!("Skipping effect '{}' on a {} node", other, kind.as_str()),
        }
    }
    if kind == NodeKind::Text && !shadows.is_empty() {
        css.set("text-shadow", shadows.join(", "));
    } else if !shadows.is_empty() {
        css.set("box-shadow", shadows.join(", "));
    }
    if !filters.is_empty() {
        css.set("filter", filters.join(" "));
    }
    if !backdrop.is_empty() {
        css.set("backdrop-filter", backdrop.join(" "));
    }
}

fn blend_mode(mode: &str) -> Option<&'static str> {
    Some(match mode {
        "MULTIPLY" => "multiply",
        "SCREEN" => "screen",
        "OVERLAY" => "overlay",
        "DARKEN" => "darken",
        "LIGHTEN" => "lighten",
        "COLOR_DODGE" => "color-dodge",
        "COLOR_BURN" => "color-burn",
        "HARD_LIGHT" => "hard-light",
        "SOFT_LIGHT" => "soft-light",
        "DIFFERENCE" => "difference",
        "EXCLUSION" => "exclusion",
        "HUE" => "hue",
        "SATURATION" => "saturation",
        "COLOR" => "color",
        "LUMINOSITY" => "luminosity",
        "NORMAL" | "PASS_THROUGH" => return None,
        other => {
            log::debug!("Blend mode '{}' has no CSS equivalent", other);
            return None;
        }
    })
}
