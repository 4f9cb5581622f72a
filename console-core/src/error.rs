//! Error types for console operations

use std::io;
use thiserror::Error;

/// Broad classification of a [`ConsoleError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An external command could not be spawned or exited unsuccessfully
    ExternalCommand,
    /// The size query produced output that could not be interpreted
    Parse,
    /// The console reported an unusable geometry
    Configuration,
}

/// Console error type
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Failed to spawn an external command
    #[error("failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// External command exited with a non-zero status
    #[error("'{command}' exited unsuccessfully ({})", exit_description(.code))]
    ExitStatus { command: String, code: Option<i32> },

    /// Size query output had fewer than two fields
    #[error("invalid output of 'stty size' command: {output:?}")]
    Parse { output: String },

    /// Geometry resolved to a non-positive row or column count
    #[error("invalid size of console - {rows} rows, {columns} columns")]
    InvalidGeometry { rows: i32, columns: i32 },

    /// Console construction failed while applying a font
    #[error("could not set font {font}: {source}")]
    Font {
        font: String,
        #[source]
        source: Box<ConsoleError>,
    },
}

impl ConsoleError {
    /// Classify this error; a [`ConsoleError::Font`] reports the kind of its cause
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConsoleError::Spawn { .. } | ConsoleError::ExitStatus { .. } => {
                ErrorKind::ExternalCommand
            }
            ConsoleError::Parse { .. } => ErrorKind::Parse,
            ConsoleError::InvalidGeometry { .. } => ErrorKind::Configuration,
            ConsoleError::Font { source, .. } => source.kind(),
        }
    }
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Result type for console operations
pub type Result<T> = std::result::Result<T, ConsoleError>;
