use sp_spatial::SpatialError;
use thiserror::Error;

use crate::VerifyReport;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("solver configuration error: {0}")]
    Config(String),

    #[error("grid error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("stage holds {cells} cells but the roster has {musicians} musicians")]
    StageFull {
        cells:     usize,
        musicians: usize,
    },

    #[error("upgrade lowered the score: old {old}, new {new}")]
    UpgradeRegressed {
        old: f64,
        new: f64,
    },

    #[error("solution failed verification: {0}")]
    Verification(VerifyReport),
}

pub type SolveResult<T> = Result<T, SolveError>;
