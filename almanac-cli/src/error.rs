//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error occurred while parsing the almanac
    #[error("Parse error: {0}")]
    Parse(#[from] almanac_solver::ParseError),

    /// Error occurred while solving a part
    #[error("Solve error: {0}")]
    Solve(#[from] almanac_solver::SolveError),

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),
}
