//! Length, angle, and number formatting.

const ZERO_EPSILON: f64 = 1e-10;
const SNAP_EPSILON: f64 = 1e-3;

/// Formats a number with up to `decimals` fraction digits.
///
/// Values within 1e-3 of an integer snap to that integer. Trailing zeros of
/// the fixed representation are dropped, so `1.5` prints as `1.5` and
/// `2.0004` as `2`. Never prints `-0`.
pub fn format_fixed(n: f64, decimals: usize) -> String {
    if !n.is_finite() {
        return "0".to_string();
    }
    let rounded = n.round();
    if (n - rounded).abs() < SNAP_EPSILON {
        if rounded == 0.0 {
            return "0".to_string();
        }
        return format!("{}", rounded as i64);
    }
    let fixed = format!("{:.*}", decimals, n);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Formats a plain CSS number (scale factors, matrix entries, unitless
/// line heights) with three decimals of precision.
pub fn format_number(n: f64) -> String {
    format_fixed(n, 3)
}

/// Formats a pixel length.
///
/// Values within 1e-10 of zero render as the bare sentinel `0`; everything
/// else carries a `px` suffix.
pub fn normalize_length(n: f64) -> String {
    if !n.is_finite() || n.abs() < ZERO_EPSILON {
        return "0".to_string();
    }
    format!("{}px", format_number(n))
}

/// Formats an angle in degrees reduced to `[0, 360)`.
pub fn normalize_angle(degrees: f64) -> String {
    if !degrees.is_finite() {
        return "0deg".to_string();
    }
    let mut reduced = degrees % 360.0;
    if reduced < 0.0 {
        reduced += 360.0;
    }
    let snapped = reduced.round();
    if (reduced - snapped).abs() < SNAP_EPSILON {
        let whole = if snapped >= 360.0 { 0 } else { snapped as i64 };
        return format!("{}deg", whole);
    }
    let text = format_fixed(reduced, 2);
    if text == "360" {
        return "0deg".to_string();
    }
    format!("{}deg", text)
}

/// Formats an alpha channel with two decimals and no leading zero (`.5`).
pub fn format_alpha(a: f64) -> String {
    let text = format_fixed(a.clamp(0.0, 1.0), 2);
    match text.strip_prefix("0.") {
        Some(fraction) => format!(".{}", fraction),
        None => text,
    }
}

/// Formats a `0..=1` fraction as a CSS percentage.
pub fn format_percent(fraction: f64) -> String {
    format!("{}%", format_fixed(fraction * 100.0, 2))
}
