//! Error types for the CLI

use core_types::HostError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Error raised by a `bytearray` entry point
    #[error("{0}")]
    HostError(#[from] HostError),

    /// File I/O error
    #[error("File error: {0}")]
    IoError(#[from] std::io::Error),

    /// Command syntax error
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Configuration file error
    #[error("Config error: {0}")]
    ConfigError(String),

    /// REPL error
    #[error("REPL error: {0}")]
    ReplError(String),
}

impl CliError {
    /// Whether the error must abort the session
    pub fn is_fatal(&self) -> bool {
        match self {
            CliError::HostError(e) => e.kind.is_fatal(),
            _ => false,
        }
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
