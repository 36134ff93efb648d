//! Text Measurement
//!
//! Display widths come from `unicode-width`: ASCII is 1 cell, CJK and most
//! emoji are 2, combining marks are 0.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal cells.
pub fn display_width(s: &str) -> u16 {
    UnicodeWidthStr::width(s).min(u16::MAX as usize) as u16
}

/// Display width of one character.
pub fn char_width(c: char) -> u16 {
    UnicodeWidthChar::width(c).unwrap_or(0) as u16
}

/// Word-wrap text to a given width.
///
/// Breaks at whitespace; a word wider than `width` is split across lines.
/// Explicit newlines start a new line. Empty input gives no lines.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0u16;

        for word in paragraph.split_whitespace() {
            let word_width = display_width(word);

            if current_width > 0 && current_width + 1 + word_width <= width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
                continue;
            }

            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            // Hard-break an over-long word
            for c in word.chars() {
                let w = char_width(c);
                if current_width + w > width && current_width > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(c);
                current_width += w;
            }
        }

        lines.push(current);
    }

    lines
}

/// Truncate text to fit within a given width, ending with `…` when cut.
pub fn truncate_text(text: &str, width: u16) -> String {
    if width == 0 {
        return String::new();
    }
    if display_width(text) <= width {
        return text.to_string();
    }

    let target = width.saturating_sub(1);
    let mut result = String::new();
    let mut current = 0u16;
    for c in text.chars() {
        let w = char_width(c);
        if current + w > target {
            break;
        }
        result.push(c);
        current += w;
    }
    result.push('…');
    result
}

/// Greedy flow of inline tokens (tags, chips) into rows no wider than `width`.
///
/// Tokens are separated by one space. A token wider than `width` gets its own row.
pub fn flow_tokens<S: AsRef<str>>(tokens: &[S], width: u16) -> Vec<Vec<usize>> {
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut row = Vec::new();
    let mut row_width = 0u16;

    for (idx, token) in tokens.iter().enumerate() {
        let token_width = display_width(token.as_ref());
        let needed = if row.is_empty() { token_width } else { row_width + 1 + token_width };
        if !row.is_empty() && needed > width {
            rows.push(std::mem::take(&mut row));
            row_width = token_width;
        } else {
            row_width = needed;
        }
        row.push(idx);
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("‹ • ›"), 5);
    }

    #[test]
    fn test_wrap_at_word_boundaries() {
        let lines = wrap_text("Real-time data processing and analytics", 16);
        assert_eq!(lines, vec!["Real-time data", "processing and", "analytics"]);
        assert!(lines.iter().all(|l| display_width(l) <= 16));
    }

    #[test]
    fn test_wrap_long_word_is_split() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_keeps_explicit_newlines() {
        assert_eq!(wrap_text("one\ntwo", 20), vec!["one", "two"]);
    }

    #[test]
    fn test_wrap_empty_and_zero_width() {
        assert!(wrap_text("", 10).is_empty());
        assert_eq!(wrap_text("abc", 0), vec!["abc"]);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("Hello, World!", 8), "Hello, …");
        assert_eq!(truncate_text("abc", 0), "");
    }

    #[test]
    fn test_flow_tokens() {
        let tokens = ["[Java]", "[Spring Boot]", "[MySQL]", "[Razorpay]"];
        let rows = flow_tokens(&tokens, 22);
        assert_eq!(rows, vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn test_flow_oversized_token_gets_own_row() {
        let tokens = ["[a]", "[a very long token]", "[b]"];
        let rows = flow_tokens(&tokens, 8);
        assert_eq!(rows, vec![vec![0], vec![1], vec![2]]);
    }
}
