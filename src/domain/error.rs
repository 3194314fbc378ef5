//! Domain-level errors (no external dependencies beyond thiserror)

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while running a search strategy.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("expansion limit of {limit} nodes exceeded")]
    ExpansionLimit { limit: usize },

    #[error("invalid problem definition: {0}")]
    InvalidProblem(String),

    #[error("internal search tree operation failed: {0}")]
    InternalError(String),
}

/// Result type for search operations.
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors raised while loading a study plan file.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("plan file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read plan file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid plan format in {path}: {source}")]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("plan references unknown topic in dependencies: {0}")]
    UnknownTopic(String),
}
