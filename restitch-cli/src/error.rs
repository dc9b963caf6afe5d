//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Input source yielded no fragments
    NoFragments(String),
    /// Output file could not be created
    OutputUnwritable(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoFragments(source) => write!(f, "No fragments found in {source}"),
            CliError::OutputUnwritable(path) => write!(f, "Cannot write output file: {path}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
