//! Code point helpers for glyph output and its transcript.

/// `\u` followed by the lower-case hex code point, unpadded (`a` → `\u61`).
pub fn escape_code_point(c: char) -> String {
    format!("\\u{:x}", c as u32)
}

/// Escape every code point of `glyphs`, in order.
pub fn transcript(glyphs: &str) -> String {
    glyphs.chars().map(escape_code_point).collect()
}
