//! File operation execution for ferry.
//!
//! This is the only place where ferry mutates the filesystem. An [ActionRequest] is turned into
//! exactly one external invocation (`cp -r`, `mv` or `rm -rf`), or into a trash call when
//! removal goes to the trash bin. Every failure is folded into a failed [Outcome]; nothing is
//! thrown past [Executor::run].

use crate::core::error::ExecError;

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// The file operation a session performs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Copy,
    Move,
    Remove,
}

impl ActionKind {
    /// Fixed order used by the action picker.
    pub const ALL: [ActionKind; 3] = [ActionKind::Copy, ActionKind::Move, ActionKind::Remove];

    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Copy => "Copy",
            ActionKind::Move => "Move",
            ActionKind::Remove => "Remove",
        }
    }

    /// Copy and Move need a destination directory, Remove does not.
    pub fn requires_destination(self) -> bool {
        !matches!(self, ActionKind::Remove)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A fully resolved operation handed to an [Executor].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    pub action: ActionKind,
    pub sources: Vec<PathBuf>,
    pub destination: Option<PathBuf>,
}

/// Result of a session, shown on the result screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub succeeded: bool,
    pub message: String,
}

impl Outcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            message: message.into(),
        }
    }
}

impl From<ExecError> for Outcome {
    fn from(err: ExecError) -> Self {
        let message = match err.output() {
            Some(out) if !out.trim().is_empty() => format!("{err}\n{out}"),
            _ => err.to_string(),
        };
        Outcome::failure(message)
    }
}

/// Performs file operations. Implementations report failure through the [Outcome].
pub trait Executor {
    fn run(&mut self, request: &ActionRequest) -> Outcome;
}

/// [Executor] that shells out to the platform `cp`, `mv` and `rm` tools.
#[derive(Debug, Default, Clone)]
pub struct CommandExecutor {
    move_to_trash: bool,
}

impl CommandExecutor {
    pub fn new(move_to_trash: bool) -> Self {
        Self { move_to_trash }
    }

    /// Builds the tool name and argument list for a request.
    ///
    /// Fails when the request breaks the workflow's guarantees (no sources, or no destination
    /// for copy/move).
    pub fn command_for(
        request: &ActionRequest,
    ) -> Result<(&'static str, Vec<OsString>), ExecError> {
        if request.sources.is_empty() {
            return Err(ExecError::NoSources);
        }
        let dest = if request.action.requires_destination() {
            Some(destination(request)?)
        } else {
            None
        };

        let (tool, mut args): (&'static str, Vec<OsString>) = match request.action {
            ActionKind::Copy => ("cp", vec![OsString::from("-r")]),
            ActionKind::Move => ("mv", Vec::new()),
            ActionKind::Remove => ("rm", vec![OsString::from("-rf")]),
        };
        args.extend(request.sources.iter().map(|p| p.as_os_str().to_os_string()));
        args.extend(dest);
        Ok((tool, args))
    }

    /// Whether `action` goes to the platform trash instead of an external command.
    pub fn uses_trash(&self, action: ActionKind) -> bool {
        self.move_to_trash && action == ActionKind::Remove
    }

    fn run_command(&self, request: &ActionRequest) -> Result<String, ExecError> {
        let (tool, args) = Self::command_for(request)?;
        let program = which::which(tool).map_err(|_| ExecError::ToolNotFound { tool })?;

        tracing::debug!(tool, args = ?args, "spawning file operation");

        let output = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ExecError::Spawn { tool, source })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if output.status.success() {
            Ok(combined)
        } else {
            Err(ExecError::Failed {
                tool,
                status: output.status,
                output: combined,
            })
        }
    }

    fn run_trash(&self, request: &ActionRequest) -> Result<String, ExecError> {
        if request.sources.is_empty() {
            return Err(ExecError::NoSources);
        }
        trash::delete_all(&request.sources).map_err(|e| ExecError::Trash(e.to_string()))?;
        Ok(format!("Moved {} item(s) to trash", request.sources.len()))
    }
}

impl Executor for CommandExecutor {
    fn run(&mut self, request: &ActionRequest) -> Outcome {
        let result = if self.uses_trash(request.action) {
            self.run_trash(request)
        } else {
            self.run_command(request)
        };

        match result {
            Ok(output) => {
                let count = request.sources.len();
                tracing::info!(action = %request.action, count, "operation succeeded");
                Outcome::success(output)
            }
            Err(err) => {
                tracing::error!(action = %request.action, error = %err, "operation failed");
                Outcome::from(err)
            }
        }
    }
}

fn destination(request: &ActionRequest) -> Result<OsString, ExecError> {
    request
        .destination
        .as_ref()
        .map(|d| d.as_os_str().to_os_string())
        .ok_or(ExecError::MissingDestination {
            action: request.action.label(),
        })
}
