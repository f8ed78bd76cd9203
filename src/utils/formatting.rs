//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Left-align `s` in a field of `width` terminal columns.
/// Longer values are never truncated.
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = UnicodeWidthStr::width(s);
    if visible >= width {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(width - visible))
}

/// Quote a value as an SQL string literal.
pub fn sql_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}
