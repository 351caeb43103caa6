//! Error types for mediatab-core.
//!
//! All fallible operations in the library return [`CoreResult`]. The CLI maps
//! any error that reaches `main` to exit code 1.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors produced by the core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Required dependency '{0}' not found or not executable")]
    DependencyNotFound(String),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] std::io::Error),

    #[error("Command '{command}' failed with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Failed to parse probe output: {0}")]
    ProbeParse(String),

    #[error("JSON error: {0}")]
    JsonParse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("Unknown column '{0}'")]
    InvalidColumn(String),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
}

/// Result type for mediatab-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a [`CoreError::CommandStart`] for a command that could not be spawned.
pub fn command_start_error(command: impl Into<String>, err: std::io::Error) -> CoreError {
    CoreError::CommandStart(command.into(), err)
}

/// Builds a [`CoreError::CommandFailed`] for a command that exited unsuccessfully.
pub fn command_failed_error(
    command: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        command: command.into(),
        status,
        stderr: stderr.into().trim().to_string(),
    }
}

impl CoreError {
    /// Convenience constructor for filter parse errors.
    pub(crate) fn invalid_filter(filter: &str, reason: impl Into<String>) -> Self {
        CoreError::InvalidFilter {
            filter: filter.to_string(),
            reason: reason.into(),
        }
    }
}
