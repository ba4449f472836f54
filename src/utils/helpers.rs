//! Helpers for ferry.
//!
//! - Lexical path normalization, so selection keys and destinations stay stable
//! - Color parsing from names or hex codes for the theme
//! - Displaying the home directory as "~" in the path bar
//! - Clamping the result screen delay

use ratatui::style::Color;
use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};
use std::time::Duration;

/// Default time the result screen stays up before the session ends.
pub const DEFAULT_RESULT_DELAY_MS: u64 = 2000;
/// Upper bound for the configured result delay.
pub const MAX_RESULT_DELAY_MS: u64 = 60_000;

/// Makes `path` absolute against the working directory and resolves `.` and `..` lexically.
///
/// Symlinks are not resolved. Going above the root stays at the root.
pub fn normalize_path(path: &Path) -> PathBuf {
    let abs = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut out = PathBuf::new();
    for comp in abs.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Parses a string (color name or hex) into a ratatui::style::Color
///
/// Supports standard names (red, green, etc.) as well as hex values (#RRGGBB or #RGB)
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        "gray" => Color::Gray,
        "darkgray" => Color::DarkGray,
        _ => s
            .strip_prefix('#')
            .and_then(parse_hex)
            .unwrap_or(Color::Reset),
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let expanded = match hex.len() {
        6 => hex.to_string(),
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        _ => return None,
    };
    let rgb = u32::from_str_radix(&expanded, 16).ok()?;
    Some(Color::Rgb(
        ((rgb >> 16) & 0xFF) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        (rgb & 0xFF) as u8,
    ))
}

/// Shortens the home directory to ~ for the path bar.
pub fn shorten_home_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if let Some(home_dir) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home_dir)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~{}{}", MAIN_SEPARATOR, stripped.display());
    }
    path.display().to_string()
}

/// Clamps the configured result delay into a sane range.
pub fn clamp_result_delay(ms: u64) -> Duration {
    if ms > MAX_RESULT_DELAY_MS {
        tracing::warn!(
            "result_delay_ms={} above {}, clamped",
            ms,
            MAX_RESULT_DELAY_MS
        );
    }
    Duration::from_millis(ms.min(MAX_RESULT_DELAY_MS))
}
