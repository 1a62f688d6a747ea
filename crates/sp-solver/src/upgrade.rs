//! Volume-only improvement of an existing solution.

use sp_core::{Counters, ERROR_SCORE, MusicianId, Solution, XY};
use sp_problem::Problem;
use sp_score::ScoreEvaluator;
use tracing::info;

use crate::{SolveError, SolveResult, verify};

/// Mute every musician whose full-volume contribution is negative; set the
/// rest to 10.  Positions are not touched.
pub fn adjust_volumes(eval: &ScoreEvaluator<'_>, placements: &[XY], volumes: &mut [f64]) {
    for (i, volume) in volumes.iter_mut().enumerate() {
        let contribution = eval.full_volume_contribution(placements, MusicianId(i as u32));
        *volume = if contribution < 0.0 { 0.0 } else { 10.0 };
    }
}

/// Re-verify `solution` and recompute its volumes with positions fixed.
///
/// Counters are cleared.  Fails with [`SolveError::Verification`] if the
/// input is structurally invalid and with [`SolveError::UpgradeRegressed`]
/// if the new volumes score lower than the old ones.
pub fn upgrade_solution(problem: &Problem, mut solution: Solution) -> SolveResult<Solution> {
    solution.counters = Counters::default();
    solution.score = ERROR_SCORE;

    let report = verify(problem, &solution.placements, &solution.volumes);
    if !report.is_ok() {
        return Err(SolveError::Verification(report));
    }

    let eval = ScoreEvaluator::new(problem);
    let old = eval.full_score(&solution.placements, &solution.volumes);
    adjust_volumes(&eval, &solution.placements, &mut solution.volumes);
    let new = eval.full_score(&solution.placements, &solution.volumes);

    info!(old, new, change = new - old, "volumes upgraded");
    if new < old {
        return Err(SolveError::UpgradeRegressed { old, new });
    }
    solution.score = new;
    Ok(solution)
}
