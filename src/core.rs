//! Core runtime logic for ferry.
//!
//! This module contains the non-UI "engine" pieces used by the application:
//! - [fm]: directory listing (see [browse_dir], [FileEntry], [DirLister]).
//! - [exec]: the file operation executor (see [Executor], [CommandExecutor]).
//! - [error]: error types shared by the engine and the binary shell.
//! - [formatter]: size and width formatting for display.
//! - [terminal]: terminal setup/teardown and the crossterm/ratatui event loop.

pub mod error;
pub mod exec;
pub mod fm;
pub mod formatter;
pub mod terminal;

pub use error::{AppError, ExecError, ListingError};
pub use exec::{ActionKind, ActionRequest, CommandExecutor, Executor, Outcome};
pub use fm::{DirLister, FileEntry, FsLister, browse_dir};
pub use formatter::{fit_to_width, format_countdown, format_file_size};
