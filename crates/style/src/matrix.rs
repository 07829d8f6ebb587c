//! Classification of 2D affine matrices into CSS transform functions.
use crate::units::{format_number, normalize_angle};

/// Tolerance for structural checks such as `b ≈ 0` or `a ≈ d`.
const STRUCTURAL_EPSILON: f64 = 1e-6;
/// Tolerance for snapping a scale factor to exactly one.
const SNAP_EPSILON: f64 = 1e-3;

/// Returns the shortest CSS transform list equivalent to
/// `matrix(a, b, c, d, e, f)`.
///
/// Candidates are tried in a fixed order and the first match wins:
/// identity (`""`), pure translation, uniform scale, pure rotation,
/// rotation with uniform scale, and finally the literal `matrix(...)`.
/// Translation, when present, is emitted as a leading `translate(...)`
/// because CSS applies the list right to left.
pub fn decompose_matrix(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> String {
    let near = |x: f64, y: f64| (x - y).abs() < STRUCTURAL_EPSILON;
    let has_translation = !near(e, 0.0) || !near(f, 0.0);
    let prefixed = |body: String| {
        if has_translation {
            format!("{} {}", translate(e, f), body)
        } else {
            body
        }
    };

    if near(a, 1.0) && near(b, 0.0) && near(c, 0.0) && near(d, 1.0) {
        return if has_translation { translate(e, f) } else { String::new() };
    }

    if near(b, 0.0) && near(c, 0.0) && near(a, d) {
        return prefixed(format!("scale({})", format_number(a)));
    }

    if near(a, d) && near(b, -c) {
        let scale = a.hypot(b);
        let angle = normalize_angle(b.atan2(a).to_degrees());
        if (scale - 1.0).abs() < SNAP_EPSILON {
            return prefixed(format!("rotate({})", angle));
        }
        return prefixed(format!("rotate({}) scale({})", angle, format_number(scale)));
    }

    format!(
        "matrix({}, {}, {}, {}, {}, {})",
        format_number(a),
        format_number(b),
        format_number(c),
        format_number(d),
        format_number(e),
        format_number(f)
    )
}

fn translate(e: f64, f: f64) -> String {
    format!("translate({}px, {}px)", format_number(e), format_number(f))
}
