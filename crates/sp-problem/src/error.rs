use sp_core::{CoreError, XY};
use thiserror::Error;

/// Errors raised while validating or loading a problem or a solution.
#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("invalid geometry: {0}")]
    Geometry(#[from] CoreError),

    #[error("stage of size {stage_size} at {bottom_left} does not fit in room {room_size}")]
    StageOutOfRoom {
        room_size:   XY,
        stage_size:  XY,
        bottom_left: XY,
    },

    #[error("problem has no listeners")]
    NoListeners,

    #[error("problem has no musicians")]
    NoMusicians,

    #[error("pillar {index} at {center} has non-positive radius {radius}")]
    BadPillar { index: usize, center: XY, radius: f64 },

    #[error("listener {index} has {got} tastes, expected {expected}")]
    TasteCount { index: usize, got: usize, expected: usize },

    #[error("bad solution: {0}")]
    BadSolution(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ProblemResult<T> = Result<T, ProblemError>;
