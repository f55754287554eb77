//! CLI-specific error types and mappings.
//!
//! This module maps core failures onto exit codes. The message text of a
//! core error is carried through unchanged.

use filament_core::{CoreError, PathError, RepositoryError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A requested record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Argument or input error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// A collection file could not be read or written.
    #[error("{0}")]
    Io(String),

    /// Path resolution or storage setup failed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Stored data is malformed or fails a precondition.
    #[error("{0}")]
    Data(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Data(_) => 65,     // EX_DATAERR
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Validation(msg) => Self::Data(msg),
        }
    }
}

impl From<RepositoryError> for CliError {
    fn from(err: RepositoryError) -> Self {
        let msg = err.to_string();
        match err {
            RepositoryError::NotFound { .. } => Self::NotFound(msg),
            RepositoryError::Read { .. } | RepositoryError::Write { .. } => Self::Io(msg),
            RepositoryError::Parse { .. }
            | RepositoryError::IdsExhausted { .. }
            | RepositoryError::Serialization(_) => Self::Data(msg),
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
