//! Shorthand collapsing for four-sided values and hex colors.
use crate::units::format_alpha;
use scenemark_types::Rgba;

/// Collapses a `[top, right, bottom, left]` quadruple into the shortest
/// equivalent CSS shorthand value (1 to 4 components).
pub fn collapse_box<S: AsRef<str>>(sides: [S; 4]) -> String {
    let [t, r, b, l] = sides.each_ref().map(|s| s.as_ref());
    if t == r && r == b && b == l {
        t.to_string()
    } else if t == b && r == l {
        format!("{} {}", t, r)
    } else if r == l {
        format!("{} {} {}", t, r, b)
    } else {
        format!("{} {} {} {}", t, r, b, l)
    }
}

/// Collapses `#rrggbb` into `#rgb` when every channel is a doubled digit.
/// Anything else is returned unchanged (lower-cased if it is a hex color).
pub fn collapse_hex(color: &str) -> String {
    let Some(hex) = color.strip_prefix('#') else {
        return color.to_string();
    };
    let hex = hex.to_ascii_lowercase();
    let bytes = hex.as_bytes();
    if bytes.len() == 6
        && bytes.iter().all(u8::is_ascii_hexdigit)
        && bytes[0] == bytes[1]
        && bytes[2] == bytes[3]
        && bytes[4] == bytes[5]
    {
        return format!("#{}{}{}", &hex[0..1], &hex[2..3], &hex[4..5]);
    }
    format!("#{}", hex)
}

/// Formats a design-tool color as the shortest CSS color: collapsed hex when
/// opaque, `rgba(r,g,b,.a)` otherwise.
pub fn css_color(color: &Rgba) -> String {
    let [r, g, b] = color.to_rgb8();
    if color.is_opaque() {
        collapse_hex(&format!("#{:02x}{:02x}{:02x}", r, g, b))
    } else {
        format!("rgba({},{},{},{})", r, g, b, format_alpha(color.a))
    }
}
