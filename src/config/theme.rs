//! Theme configuration options for ferry
//!
//! This module defines the `[theme]` options read from the ferry.toml configuration file.
//! Colors left at "default" fall back to the internal theme.

use crate::utils::parse_color;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use std::sync::LazyLock;

/// Theme configuration options
/// # Examples
/// ```toml
/// [theme.accent]
/// fg = "cyan"
/// [theme.selection]
/// bg = "#303030"
/// ```
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Theme {
    accent: ColorPair,
    directory: ColorPair,
    selection: ColorPair,
    marker: ColorPair,
    path: ColorPair,
    success: ColorPair,
    error: ColorPair,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            accent: ColorPair {
                fg: Color::Cyan,
                ..ColorPair::default()
            },
            directory: ColorPair {
                fg: Color::Blue,
                ..ColorPair::default()
            },
            selection: ColorPair {
                bg: Color::Indexed(236),
                ..ColorPair::default()
            },
            marker: ColorPair {
                fg: Color::Yellow,
                ..ColorPair::default()
            },
            path: ColorPair {
                fg: Color::Magenta,
                ..ColorPair::default()
            },
            success: ColorPair {
                fg: Color::Green,
                ..ColorPair::default()
            },
            error: ColorPair {
                fg: Color::Red,
                ..ColorPair::default()
            },
        }
    }
}

impl Theme {
    /// Internal default theme, used for fallback when a color is set to Reset.
    pub fn internal_defaults() -> &'static Self {
        static DEFAULT: LazyLock<Theme> = LazyLock::new(Theme::default);
        &DEFAULT
    }

    pub fn accent_style(&self) -> Style {
        self.accent.style_or(&Theme::internal_defaults().accent)
    }

    pub fn directory_style(&self) -> Style {
        self.directory.style_or(&Theme::internal_defaults().directory)
    }

    pub fn selection_style(&self) -> Style {
        self.selection
            .style_or(&Theme::internal_defaults().selection)
            .add_modifier(Modifier::BOLD)
    }

    pub fn marker_style(&self) -> Style {
        self.marker.style_or(&Theme::internal_defaults().marker)
    }

    pub fn path_style(&self) -> Style {
        self.path.style_or(&Theme::internal_defaults().path)
    }

    pub fn success_style(&self) -> Style {
        self.success
            .style_or(&Theme::internal_defaults().success)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        self.error
            .style_or(&Theme::internal_defaults().error)
            .add_modifier(Modifier::BOLD)
    }
}

/// Foreground and background color of one themed element.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    #[serde(default, deserialize_with = "deserialize_color_field")]
    fg: Color,
    #[serde(default, deserialize_with = "deserialize_color_field")]
    bg: Color,
}

/// Sets both foreground and background to Color::Reset
impl Default for ColorPair {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

impl ColorPair {
    /// Replaces Reset colors with those from another ColorPair.
    pub fn resolve(&self, other: &ColorPair) -> Self {
        Self {
            fg: if self.fg == Color::Reset {
                other.fg
            } else {
                self.fg
            },
            bg: if self.bg == Color::Reset {
                other.bg
            } else {
                self.bg
            },
        }
    }

    /// Converts the ColorPair to a Style, falling back to `fallback` for Reset colors.
    pub fn style_or(&self, fallback: &ColorPair) -> Style {
        let resolved = self.resolve(fallback);
        Style::default().fg(resolved.fg).bg(resolved.bg)
    }
}

// Helper function to deserialize Theme colors
fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(parse_color(&s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_colors_override_defaults() {
        let theme: Theme = toml::from_str(
            r##"
            [accent]
            fg = "#ff0000"
            [error]
            bg = "white"
            "##,
        )
        .expect("parse");
        assert_eq!(theme.accent_style().fg, Some(Color::Rgb(255, 0, 0)));
        assert_eq!(theme.error_style().fg, Some(Color::Red));
        assert_eq!(theme.error_style().bg, Some(Color::White));
    }

    #[test]
    fn reset_falls_back_to_internal() {
        let theme: Theme = toml::from_str("[directory]\nfg = \"default\"").expect("parse");
        assert_eq!(theme.directory_style().fg, Some(Color::Blue));
    }
}
