//! Display-width aware string helpers
//!
//! Widths are terminal columns, so CJK characters and most emoji count as two.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Terminal column width of `text`
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Cut `text` to at most `max_width` columns, ending in `…` when cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > budget {
            break;
        }
        width += ch_width;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

/// Break one logical line into rows of at most `width` columns
///
/// Prefers breaking after whitespace; words longer than a row are split.
/// Always returns at least one row (empty input gives one empty row).
pub fn wrap_to_width(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;
    // Byte offset in `row` just after the last whitespace, and the width up to it
    let mut last_break: Option<(usize, usize)> = None;

    for ch in line.chars() {
        let ch_width = ch.width().unwrap_or(0);

        if row_width + ch_width > width && !row.is_empty() && ch.is_whitespace() {
            // Break here and drop the whitespace
            let trimmed = row.trim_end();
            if !trimmed.is_empty() {
                rows.push(trimmed.to_string());
            }
            row.clear();
            row_width = 0;
            last_break = None;
            continue;
        }

        while row_width + ch_width > width && !row.is_empty() {
            match last_break.take() {
                Some((byte, break_width))
                    if byte < row.len() && !row[..byte].trim().is_empty() =>
                {
                    let rest = row.split_off(byte);
                    rows.push(row.trim_end().to_string());
                    row = rest;
                    row_width -= break_width;
                }
                _ => {
                    rows.push(std::mem::take(&mut row).trim_end().to_string());
                    row_width = 0;
                }
            }
        }

        row.push(ch);
        row_width += ch_width;
        if ch.is_whitespace() {
            last_break = Some((row.len(), row_width));
        }
    }

    rows.push(row);
    rows
}

#[cfg(test)]
#[path = "text_width_tests.rs"]
mod text_width_tests;
