//! Display configuration options for ferry
//!
//! This module defines the `[display]` options read from the ferry.toml configuration file.

use serde::Deserialize;

/// Display configuration options
///
/// Controls what the pickers draw next to each entry.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Display {
    show_size: bool,
    selection_icon: String,
    marker_icon: String,
    dir_marker: bool,
}

impl Default for Display {
    fn default() -> Self {
        Display {
            show_size: true,
            selection_icon: ">".into(),
            marker_icon: "*".into(),
            dir_marker: true,
        }
    }
}

/// Public methods for accessing display configuration options
impl Display {
    pub fn show_size(&self) -> bool {
        self.show_size
    }

    /// Drawn in front of the entry under the cursor.
    pub fn selection_icon(&self) -> &str {
        &self.selection_icon
    }

    /// Drawn in front of entries marked for the action.
    pub fn marker_icon(&self) -> &str {
        &self.marker_icon
    }

    /// Append a `/` to directory names.
    pub fn dir_marker(&self) -> bool {
        self.dir_marker
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_table_keeps_defaults() {
        let d: Display = toml::from_str("marker_icon = \"+\"").expect("parse");
        assert_eq!(d.marker_icon(), "+");
        assert_eq!(d.selection_icon(), ">");
        assert!(d.show_size());
        assert!(d.dir_marker());
    }
}
