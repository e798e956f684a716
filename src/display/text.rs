use unicode_width::UnicodeWidthChar;

use super::palette::{Palette, Tone};

/// Terminal columns taken by a string, ignoring ANSI escape sequences.
/// Wide (East Asian) characters count as two columns.
pub fn visible_len(s: &str) -> usize {
    let mut len = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else if c == '\x1b' {
            in_escape = true;
        } else {
            len += UnicodeWidthChar::width(c).unwrap_or(0);
        }
    }
    len
}

/// A `─` rule as wide as the widest line of `content`.
pub fn horizontal_rule(content: &str, palette: &Palette) -> String {
    let width = content.lines().map(visible_len).max().unwrap_or(0);
    palette.paint(Tone::Rule, &"─".repeat(width))
}

/// Surround `line` with rules above and below.
pub fn with_rules(line: String, palette: &Palette) -> String {
    let rule = horizontal_rule(&line, palette);
    format!("{rule}\n{line}\n{rule}")
}

/// Abbreviate a token count: `999`, `1.2k`, `3.4M`.
///
/// The decimal digit is truncated, so 1999 is `1.9k`.
pub fn format_tokens(tokens: u64) -> String {
    if tokens >= 1_000_000 {
        let tenths = tokens / 100_000;
        return format!("{}.{}M", tenths / 10, tenths % 10);
    }
    if tokens >= 1000 {
        let tenths = tokens / 100;
        return format!("{}.{}k", tenths / 10, tenths % 10);
    }
    tokens.to_string()
}

/// Whole-number percentage as shown next to the bars (`78.9` → `78%`).
pub fn format_percent(percentage: f64) -> String {
    format!("{}%", percentage as u32)
}
