//! CLI-level errors (wraps domain and configuration errors)

use thiserror::Error;

use crate::config::SettingsError;
use crate::domain::{PlanError, SearchError};
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Search(#[from] SearchError),

    #[error("{0}")]
    Plan(#[from] PlanError),

    #[error("{0}")]
    Settings(#[from] SettingsError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => exitcode::USAGE,
            CliError::Settings(_) => exitcode::CONFIG,
            CliError::Plan(e) => match e {
                PlanError::FileNotFound(_) | PlanError::Io { .. } => exitcode::IOERR,
                PlanError::InvalidFormat { .. } | PlanError::UnknownTopic(_) => exitcode::DATAERR,
            },
            CliError::Search(_) => exitcode::SOFTWARE,
        }
    }
}
