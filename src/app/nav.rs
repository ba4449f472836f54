//! Navigation state for ferry's directory pickers.
//!
//! Holds the current directory, its sorted listing and the cursor. Every move consumes the old
//! state and returns the next one; descending and ascending re-read the directory through a
//! [DirLister]. The same type drives both the source and the destination picker.

use crate::core::{DirLister, FileEntry, ListingError};
use crate::utils::normalize_path;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Holds the listing and cursor of one picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    current_dir: PathBuf,
    entries: Vec<FileEntry>,
    selected: usize,
}

impl NavState {
    /// Lists `path` and places the cursor on the first entry.
    ///
    /// The stored path is absolute and free of `.`/`..` components.
    pub fn open(path: &Path, lister: &dyn DirLister) -> Result<Self, ListingError> {
        let current_dir = normalize_path(path);
        let entries = lister.list(&current_dir)?;
        tracing::debug!(dir = %current_dir.display(), count = entries.len(), "listed directory");
        Ok(Self {
            current_dir,
            entries,
            selected: 0,
        })
    }

    // Getters / Accessors

    #[inline]
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    #[inline]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    #[inline]
    pub fn selected_idx(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.entries.get(self.selected)
    }

    /// Absolute path of the entry under the cursor.
    pub fn selected_path(&self) -> Option<PathBuf> {
        self.selected_entry().map(|e| self.current_dir.join(e.name()))
    }

    // Navigation functions

    /// Moves the cursor by `delta`, clamped to the listing. No-op on an empty listing.
    pub fn move_cursor(mut self, delta: isize) -> Self {
        let len = self.entries.len();
        if len == 0 {
            return self;
        }
        let target = self.selected.saturating_add_signed(delta);
        self.selected = target.min(len - 1);
        self
    }

    /// Enters the child directory `name`.
    ///
    /// Returns the state unchanged if `name` is not a directory of the current listing.
    pub fn descend(self, name: &OsStr, lister: &dyn DirLister) -> Result<Self, ListingError> {
        let is_dir = self
            .entries
            .iter()
            .any(|e| e.name() == name && e.is_dir());
        if !is_dir {
            return Ok(self);
        }
        Self::open(&self.current_dir.join(name), lister)
    }

    /// Enters the parent directory. At the filesystem root nothing is re-read.
    pub fn ascend(self, lister: &dyn DirLister) -> Result<Self, ListingError> {
        let Some(parent) = self.current_dir.parent().map(Path::to_path_buf) else {
            return Ok(self);
        };
        Self::open(&parent, lister)
    }

    /// Descends into the entry under the cursor, if it is a directory.
    pub fn open_selected(self, lister: &dyn DirLister) -> Result<Self, ListingError> {
        match self.selected_entry().map(|e| e.name().to_os_string()) {
            Some(name) => self.descend(&name, lister),
            None => Ok(self),
        }
    }
}
