//! The `Solver` and its search state machine.

use std::fmt;

use sp_core::{Deadline, Solution, SolveRng, WallClockDeadline};
use sp_problem::Problem;
use sp_score::ScoreEvaluator;
use sp_spatial::SpatialGrid;
use tracing::{debug, info};

use crate::dance::{self, GroupTrials, RoundOutcome};
use crate::search::{Search, restore};
use crate::seeding::seed;
use crate::{NoopObserver, SolveError, SolveObserver, SolveResult, SolverConfig, verify};

// ── SearchPhase ───────────────────────────────────────────────────────────────

/// Where the search loop currently is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchPhase {
    /// Initial force-directed placement.  Runs once, before the deadline is
    /// first polled.
    Seeding,
    /// Grouped randomized local search rounds.
    GroupSearch,
    /// Re-seeding after a streak of fruitless rounds.
    Resetting,
}

impl fmt::Display for SearchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchPhase::Seeding     => "seeding",
            SearchPhase::GroupSearch => "group-search",
            SearchPhase::Resetting   => "resetting",
        };
        f.write_str(name)
    }
}

// ── Solver ────────────────────────────────────────────────────────────────────

/// Time-boxed placement optimizer.
///
/// Create via [`SolverBuilder`][crate::SolverBuilder].  A solver can be
/// reused; its random generator carries over between solves.
pub struct Solver {
    pub(crate) config: SolverConfig,
    pub(crate) rng:    SolveRng,
}

impl Solver {
    #[inline]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve against the configured wall-clock budget, without callbacks.
    pub fn solve(&mut self, problem: &Problem) -> SolveResult<Solution> {
        let mut deadline = WallClockDeadline::new(self.config.run_duration);
        self.solve_with(problem, &mut deadline, &mut NoopObserver)
    }

    /// Solve, polling `deadline` once per group-search round.
    ///
    /// Seeding always completes, so a deadline that is already expired still
    /// yields a full, verified solution.  Every volume is 10.  A layout that
    /// fails verification is returned with `ERROR_SCORE`.
    pub fn solve_with<D: Deadline, O: SolveObserver>(
        &mut self,
        problem:  &Problem,
        deadline: &mut D,
        observer: &mut O,
    ) -> SolveResult<Solution> {
        let grid = SpatialGrid::new(problem.stage())?;
        let musicians = problem.musician_count();
        if grid.cell_count() < musicians {
            return Err(SolveError::StageFull { cells: grid.cell_count(), musicians });
        }

        let cfg = &self.config;
        let rng = &mut self.rng;
        let eval = ScoreEvaluator::new(problem).with_extensions(cfg.closeness.resolve(problem));
        let mut search = Search::new(eval, grid, cfg.sample_size);
        let mut trials = GroupTrials::new(cfg.group_count);

        info!(
            musicians,
            listeners = problem.listeners().len(),
            pillars = problem.pillars().len(),
            extensions = eval.extensions(),
            "solve started"
        );

        let mut phase = SearchPhase::Seeding;
        observer.on_phase(phase);
        loop {
            let next = match phase {
                SearchPhase::Seeding => {
                    seed(&mut search, rng, cfg.max_init_steps, observer);
                    search.rebase();
                    SearchPhase::GroupSearch
                }
                SearchPhase::GroupSearch => {
                    if deadline.expired() {
                        break;
                    }
                    let outcome = dance::round(&mut search, &mut trials, rng, cfg.mutation_count);
                    search.round += 1;
                    search.counters.dance_iterations += 1;
                    if let RoundOutcome::Improved { moved } = outcome {
                        observer.on_improvement(search.round, search.best_score, moved);
                    }
                    observer.on_round(search.round, search.best_score);
                    if search.no_ops >= cfg.max_consecutive_no_ops {
                        SearchPhase::Resetting
                    } else {
                        SearchPhase::GroupSearch
                    }
                }
                SearchPhase::Resetting => {
                    let steps = reset(&mut search, rng, cfg.max_init_steps, observer);
                    debug!(
                        round = search.round,
                        steps,
                        score = search.best_score,
                        best = search.best_seen.1,
                        "search reset"
                    );
                    observer.on_reset(search.counters.dance_resets, search.best_score);
                    SearchPhase::GroupSearch
                }
            };
            if next != phase {
                observer.on_phase(next);
                phase = next;
            }
        }

        // ── Finalize ──────────────────────────────────────────────────────
        if search.best_seen.1 > search.best_score {
            let n = search.placements.len();
            restore(&mut search.grid, &mut search.placements, &search.best_seen.0, 0..n);
        }

        let mut solution = Solution::new(search.placements, search.volumes);
        solution.counters = search.counters;
        let report = verify(problem, &solution.placements, &solution.volumes);
        if report.is_ok() {
            solution.score = ScoreEvaluator::new(problem)
                .full_score(&solution.placements, &solution.volumes);
        }

        info!(
            score = solution.score,
            rounds = solution.counters.dance_iterations,
            resets = solution.counters.dance_resets,
            counters = %solution.counters,
            "solve finished"
        );
        observer.on_solve_end(&solution);
        Ok(solution)
    }
}

/// Re-seed with a random number of force passes (at most half of
/// `max_init_steps`), unfreeze everyone and re-score.  Returns the pass budget.
pub(crate) fn reset<O: SolveObserver>(
    search:         &mut Search<'_>,
    rng:            &mut SolveRng,
    max_init_steps: u32,
    observer:       &mut O,
) -> u32 {
    let steps = rng.gen_range(0..=max_init_steps / 2);
    seed(search, rng, steps, observer);
    search.unfreeze_all();
    search.rebase();
    search.counters.dance_resets += 1;
    steps
}
