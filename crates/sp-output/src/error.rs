//! Error types for sp-output.

use thiserror::Error;

/// Errors that can occur when writing a solution.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("solution has {got} placements, problem has {expected} musicians")]
    MusicianCount {
        expected: usize,
        got:      usize,
    },
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
