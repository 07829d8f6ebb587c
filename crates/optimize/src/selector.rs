/// Escapes a class name for use in a CSS selector.
///
/// Only `[A-Za-z0-9_-]` pass through; everything else is backslash-escaped,
/// and a leading digit uses the hex form (`\31 `).
pub fn escape_class(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (idx, c) in name.chars().enumerate() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            if idx == 0 && c.is_ascii_digit() {
                out.push_str(&format!("\\{:x} ", c as u32));
            } else {
                out.push(c);
            }
        } else {
            out.push('\\');
            out.push(c);
        }
    }
    out
}
