//! The `SolutionWriter` trait implemented by all output formats.

use sp_core::Solution;
use sp_problem::Problem;

use crate::{OutputError, OutputResult};

/// Trait implemented by the JSON, SVG and CSV writers.
pub trait SolutionWriter {
    /// Write one solution for `problem`.
    fn write_solution(&mut self, problem: &Problem, solution: &Solution) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Reject solutions whose placement count does not match the roster.
pub(crate) fn check_count(problem: &Problem, solution: &Solution) -> OutputResult<()> {
    let expected = problem.musician_count();
    let got = solution.placements.len();
    if got != expected {
        return Err(OutputError::MusicianCount { expected, got });
    }
    Ok(())
}
