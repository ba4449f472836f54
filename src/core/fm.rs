//! Directory listing for ferry.
//!
//! Provides the [FileEntry] snapshot used by every navigation screen and the [DirLister] seam
//! the workflow reads directories through. [FsLister] is the real filesystem implementation.

use crate::core::error::ListingError;

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;

/// A single entry of a directory listing.
///
/// Holds the name, whether the entry is a directory and, for files, the size in bytes.
/// Immutable once created by a [DirLister].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    name: Box<OsStr>,
    is_dir: bool,
    size: Option<u64>,
}

impl FileEntry {
    pub fn new(name: impl Into<OsString>, is_dir: bool, size: Option<u64>) -> Self {
        FileEntry {
            name: name.into().into_boxed_os_str(),
            is_dir,
            // directories never report a size
            size: if is_dir { None } else { size },
        }
    }

    pub fn file(name: impl Into<OsString>, size: u64) -> Self {
        Self::new(name, false, Some(size))
    }

    pub fn dir(name: impl Into<OsString>) -> Self {
        Self::new(name, true, None)
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    #[inline]
    pub fn size(&self) -> Option<u64> {
        self.size
    }
}

/// Reads the immediate children of a directory.
///
/// Implementations must return entries sorted by name, ascending and case-sensitive.
pub trait DirLister {
    fn list(&self, path: &Path) -> Result<Vec<FileEntry>, ListingError>;
}

/// [DirLister] backed by the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLister;

impl DirLister for FsLister {
    fn list(&self, path: &Path) -> Result<Vec<FileEntry>, ListingError> {
        browse_dir(path)
    }
}

/// Reads the contents of the provided directory and returns them sorted by name.
///
/// Entries that cannot be read are skipped. A file whose metadata cannot be read is kept with
/// no size. Symlinks are followed to decide whether they are directories.
pub fn browse_dir(path: &Path) -> Result<Vec<FileEntry>, ListingError> {
    let read = fs::read_dir(path).map_err(|e| ListingError::io(path, e))?;
    let mut entries = Vec::with_capacity(64);

    for entry in read {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let ft = match entry.file_type() {
            Ok(ft) => ft,
            Err(_) => continue,
        };

        let md = if ft.is_symlink() {
            fs::metadata(entry.path()).ok()
        } else {
            entry.metadata().ok()
        };

        let is_dir = ft.is_dir() || md.as_ref().is_some_and(|m| m.is_dir());
        let size = md.filter(|m| m.is_file()).map(|m| m.len());

        entries.push(FileEntry::new(entry.file_name(), is_dir, size));
    }

    sort_entries(&mut entries);
    Ok(entries)
}

/// Sorts entries by raw name, byte-wise. Directories are not grouped.
pub fn sort_entries(entries: &mut [FileEntry]) {
    entries.sort_by(|a, b| a.name.cmp(&b.name));
}
