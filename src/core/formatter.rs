//! Display formatting helpers for ferry.
//!
//! Sizes are rendered with humansize, names are cut to a column width with unicode-width so wide
//! glyphs never overflow a row. Used by the view model and the ratatui renderer.

use humansize::{DECIMAL, format_size};
use unicode_width::UnicodeWidthChar;

use std::time::Duration;

const ELLIPSIS: char = '…';

/// Formats a file size into a human-readable string, "-" for directories or unknown sizes.
pub fn format_file_size(size: Option<u64>, is_dir: bool) -> String {
    match size {
        Some(sz) if !is_dir => format_size(sz, DECIMAL),
        _ => "-".to_string(),
    }
}

/// Whole seconds left before the result screen closes, rounded up.
pub fn format_countdown(delay: Duration) -> String {
    let secs = delay.as_millis().div_ceil(1000);
    match secs {
        1 => "1 second".to_string(),
        n => format!("{n} seconds"),
    }
}

/// Cuts `text` so its display width is at most `max_width` columns.
///
/// Control characters are dropped and tabs become a single space. When the text does not fit,
/// the last column is replaced by an ellipsis.
pub fn fit_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let cleaned = text
        .chars()
        .filter_map(|c| match c {
            '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect::<Vec<_>>();

    let total: usize = cleaned.iter().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return cleaned.into_iter().collect();
    }

    let mut out = String::with_capacity(max_width);
    let mut current_w = 0;
    for c in cleaned {
        let w = c.width().unwrap_or(0);
        if current_w + w > max_width - 1 {
            break;
        }
        out.push(c);
        current_w += w;
    }
    out.push(ELLIPSIS);
    out
}
