//! Error types for stint.

use thiserror::Error;

/// Errors that can occur while running stint.
#[derive(Error, Debug)]
pub enum StintError {
    /// A session was started without a task label.
    #[error("Task name cannot be empty")]
    EmptyTask,

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The session database failed.
    #[error("Database error: {0}")]
    Database(String),

    /// Filesystem or terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input or stored data could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The terminal UI could not be driven.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl From<serde_json::Error> for StintError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<rusqlite::Error> for StintError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err.to_string())
    }
}
