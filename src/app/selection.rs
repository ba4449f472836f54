//! Selection set for the source picker.
//!
//! Keys are absolute paths, not cursor positions, so a marked entry stays marked while the user
//! walks in and out of directories.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Absolute path -> chosen flag.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionSet {
    chosen: BTreeMap<PathBuf, bool>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the flag for `path`. An unknown path counts as unselected, so the first toggle
    /// selects.
    pub fn toggle(mut self, path: PathBuf) -> Self {
        let flag = self.chosen.entry(path).or_insert(false);
        *flag = !*flag;
        self
    }

    #[inline]
    pub fn is_selected(&self, path: &Path) -> bool {
        self.chosen.get(path).copied().unwrap_or(false)
    }

    /// Every path currently selected, in sorted order.
    pub fn selected_paths(&self) -> Vec<PathBuf> {
        self.chosen
            .iter()
            .filter(|(_, chosen)| **chosen)
            .map(|(path, _)| path.clone())
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.chosen.values().filter(|chosen| **chosen).count()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_count() == 0
    }
}
