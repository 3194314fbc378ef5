//! CLI layer: argument parsing and command dispatch

pub mod args;
pub mod commands;
pub mod error;

pub use args::{AlgorithmArg, Cli, Commands};
pub use error::{CliError, CliResult};
