//! Error types for ferry.
//!
//! [ListingError] is raised by directory listings and ends the session on the result screen.
//! [ExecError] never leaves the executor, it is turned into a failed outcome there.
//! [AppError] covers the binary shell: terminal setup, config and logging.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors that can occur while listing a directory.
#[derive(Debug, Error)]
pub enum ListingError {
    /// Permission denied for a path.
    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Path exists but is not a directory.
    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ListingError {
    /// Create a listing error with path context, picking the variant from the error kind.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            _ => Self::Io { path, source },
        }
    }

    /// The path the listing failed on.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::PermissionDenied { path }
            | Self::NotFound { path }
            | Self::NotADirectory { path }
            | Self::Io { path, .. } => path,
        }
    }
}

/// Errors produced while executing a file operation.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("No destination set for {action}")]
    MissingDestination { action: &'static str },

    #[error("No source paths given")]
    NoSources,

    #[error("'{tool}' was not found in PATH")]
    ToolNotFound { tool: &'static str },

    #[error("Failed to spawn '{tool}': {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("'{tool}' failed ({status})")]
    Failed {
        tool: &'static str,
        status: ExitStatus,
        output: String,
    },

    #[error("Trash error: {0}")]
    Trash(String),
}

impl ExecError {
    /// Captured command output, if the command ran at all.
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Failed { output, .. } => Some(output),
            _ => None,
        }
    }
}

/// Errors of the application shell.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

/// Application result type alias
pub type Result<T> = std::result::Result<T, AppError>;
