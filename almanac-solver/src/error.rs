//! Error types for the puzzle layer

use thiserror::Error;

/// Error type for parsing almanac input text
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input doesn't match the expected almanac structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
}

/// Error type for solving a puzzle part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is out of range
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}
