//! Shared CLI error handling and output plumbing.

use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::path::Path;

use crate::parser::{to_pretty_string, write_json};

/// Result alias for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// CLI-level failure, mapped to a process exit code.
#[derive(Debug)]
pub enum CliError {
    /// Input or output could not be read or written
    Io(String),
    /// Input was readable but semantically or structurally invalid
    Validation(String),
}

impl CliError {
    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        CliError::Io(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        CliError::Validation(message.into())
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Validation(_) => 1,
            CliError::Io(_) => 2,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(message) | CliError::Validation(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Writes a document to the output path when one is given, or to standard
/// output otherwise. File writes are atomic (temp file + rename).
pub fn emit_json<T: Serialize>(value: &T, output: Option<&Path>) -> CliResult<()> {
    match output {
        Some(path) => write_json(value, path)
            .map_err(|e| CliError::io(format!("Failed to write output: {e:#}"))),
        None => {
            let text = to_pretty_string(value)
                .map_err(|e| CliError::io(format!("Failed to serialize output: {e:#}")))?;
            std::io::stdout()
                .write_all(text.as_bytes())
                .map_err(|e| CliError::io(format!("Failed to write to stdout: {e}")))
        }
    }
}
