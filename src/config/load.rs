//! The main config loading module for ferry.
//!
//! Handles loading and deserializing settings from `ferry.toml`.
//!
//! Provides the main [Config] struct, as well as the internal [RawConfig] used for parsing and
//! processing. Also writes a commented default file for `fy --init`.

use crate::config::{Display, General, InternalGeneral, Keys, Theme};
use crate::core::error::{AppError, Result};

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{fs, io};

/// Raw configuration as read from the toml file.
/// Deserialized directly, then converted into the main [Config] struct.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    display: Display,
    theme: Theme,
    log: LogConfig,
    keys: Keys,
}

/// `[log]` table. Both values are optional, the binary decides the fallbacks.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct LogConfig {
    level: Option<String>,
    dir: Option<PathBuf>,
}

impl LogConfig {
    #[inline]
    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }

    #[inline]
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }
}

/// Main configuration struct for ferry
/// Holds the processed configuration options.
#[derive(Debug, Clone)]
pub struct Config {
    general: InternalGeneral,
    display: Display,
    theme: Theme,
    log: LogConfig,
    keys: Keys,
}

/// Conversion from RawConfig to Config
impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: InternalGeneral::from(raw.general),
            display: raw.display,
            theme: raw.theme,
            log: raw.log,
            keys: raw.keys,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        RawConfig::default().into()
    }
}

impl Config {
    /// Load configuration from `explicit`, or from [Config::default_path] when none is given.
    /// A missing or unparsable file yields the defaults; the reason is printed on stderr since
    /// logging is not up yet at this point.
    pub fn load(explicit: Option<&Path>) -> Self {
        let path = explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_path);

        if !path.exists() {
            eprintln!(
                "No ferry.toml config file found. Using internal defaults. (Tip: run 'fy --init' to generate a config file.)"
            );
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<RawConfig>(content)
            .map(Config::from)
            .map_err(|e| AppError::Config(e.to_string()))
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &InternalGeneral {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    /// Determine the default configuration file path.
    /// Checks the FERRY_CONFIG environment variable first,
    /// XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/ferry/ferry.toml.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("FERRY_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("ferry/ferry.toml");
        }

        if let Some(home) = dirs::home_dir() {
            return home.join(".config/ferry/ferry.toml");
        }
        PathBuf::from("ferry.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path, minimal: bool) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = if minimal { MINIMAL_TOML } else { FULL_TOML };
        fs::write(path, content)?;
        println!(
            "{} Default config generated at {:?}",
            if minimal { "Minimal" } else { "Full" },
            path
        );
        Ok(())
    }
}

const FULL_TOML: &str = r##"# ferry.toml - default configuration for ferry

# Note:
# Commented values are the internal defaults of ferry
# Use hex codes (eg. "#RRGGBB") or terminal colors ("cyan")

[general]
# Milliseconds the result screen stays up before ferry exits (max 60000)
result_delay_ms = 2000
# Remove sends entries to the trash instead of deleting them
move_to_trash = false

[display]
# show_size = true
# selection_icon = ">"
# marker_icon = "*"
# dir_marker = true

# [theme.accent]
# fg = "cyan"
# [theme.directory]
# fg = "blue"
# [theme.selection]
# bg = "#303030"
# [theme.marker]
# fg = "yellow"
# [theme.path]
# fg = "magenta"
# [theme.success]
# fg = "green"
# [theme.error]
# fg = "red"

# [log]
# level = "info"
# dir = "/home/me/.local/share/ferry"

# [keys]
# up = ["k", "up"]
# down = ["j", "down"]
# open = ["l", "right", "enter"]
# back = ["h", "left", "backspace"]
# toggle = ["space"]
# advance = ["tab"]
# confirm = ["enter", "y"]
# quit = ["q", "esc", "ctrl+c"]
"##;

const MINIMAL_TOML: &str = r##"# ferry.toml - minimal configuration
# Only a few basic options. The rest uses internal defaults.
# Run 'fy --init-full' for the complete list.

[general]
result_delay_ms = 2000
move_to_trash = false
"##;
