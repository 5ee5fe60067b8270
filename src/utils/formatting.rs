//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad on the right to `width` terminal columns (accented text counts once).
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", s, " ".repeat(fill))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", " ".repeat(fill), s)
}

/// Horizontal rule built from the configured separator character.
pub fn separator(sep: &str, width: usize) -> String {
    let ch = sep.chars().next().unwrap_or('-');
    std::iter::repeat_n(ch, width).collect()
}

/// "1 ponto" / "N pontos"
pub fn points(n: i64) -> String {
    if n == 1 || n == -1 {
        format!("{} ponto", n)
    } else {
        format!("{} pontos", n)
    }
}
