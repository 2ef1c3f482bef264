//! Text wrapping by display width.

use unicode_width::UnicodeWidthStr;

/// Greedy word wrap.
///
/// Words longer than the width get their own line and are left for the
/// renderer to truncate. Always returns at least one line so callers
/// can rely on the row count.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Rows `text` takes when wrapped to `width`.
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    wrap_text(text, width).len() as u16
}
