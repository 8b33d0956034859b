// ============================================================================
// CSS identifier escaping (the CSS.escape serialization algorithm)
// ============================================================================

/// Escape a string so it can be used as a CSS identifier (the value after
/// `#` or `.` in a selector).
///
/// Follows the CSSOM "serialize an identifier" rules:
/// - NUL becomes U+FFFD
/// - control characters and a leading digit are hex-escaped
/// - a lone `-` is backslash-escaped
/// - ASCII letters, digits, `-`, `_`, and anything >= U+0080 pass through
/// - every other character gets a literal backslash escape
pub fn escape_css_identifier(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let mut out = String::with_capacity(value.len());

    for (i, &c) in chars.iter().enumerate() {
        match c {
            '\0' => out.push('\u{fffd}'),
            '\u{1}'..='\u{1f}' | '\u{7f}' => push_hex_escape(&mut out, c),
            '0'..='9' if i == 0 => push_hex_escape(&mut out, c),
            '0'..='9' if i == 1 && chars[0] == '-' => push_hex_escape(&mut out, c),
            '-' if i == 0 && chars.len() == 1 => {
                out.push('\\');
                out.push('-');
            }
            _ if c >= '\u{80}' || c == '-' || c == '_' || c.is_ascii_alphanumeric() => {
                out.push(c);
            }
            _ => {
                out.push('\\');
                out.push(c);
            }
        }
    }

    out
}

/// Hex escape with the trailing space the serialization rules require,
/// so a following hex digit is not swallowed into the escape.
fn push_hex_escape(out: &mut String, c: char) {
    out.push_str(&format!("\\{:x} ", c as u32));
}
