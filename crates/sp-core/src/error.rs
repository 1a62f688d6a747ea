//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors raised while constructing core value types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{what} must be strictly positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("{what} is not a finite number")]
    NotFinite { what: &'static str },
}

/// Shorthand result type for `sp-core`.
pub type CoreResult<T> = Result<T, CoreError>;
