//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `sp-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    /// The stage cannot hold a single margin-inset cell.  Unrecoverable.
    #[error("stage too small for placement grid: {width} x {height}")]
    StageTooSmall { width: f64, height: f64 },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
