//! Solve observer trait for progress reporting.

use sp_core::Solution;

use crate::SearchPhase;

/// Callbacks invoked by [`Solver::solve_with`][crate::Solver::solve_with] at
/// key points of the search.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: improvement printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl SolveObserver for Progress {
///     fn on_improvement(&mut self, round: u64, score: f64, _moved: usize) {
///         println!("round {round}: {score}");
///     }
/// }
/// ```
pub trait SolveObserver {
    /// Called whenever the search enters a new phase, starting with
    /// `Seeding`.
    fn on_phase(&mut self, _phase: SearchPhase) {}

    /// Called after every force-directed pass with the number of musicians
    /// that moved.
    fn on_seed_pass(&mut self, _pass: u64, _moved: usize) {}

    /// Called at the end of every group-search round with the running best
    /// sampled score.
    fn on_round(&mut self, _round: u64, _best_score: f64) {}

    /// Called when a round commits a group move.
    fn on_improvement(&mut self, _round: u64, _score: f64, _moved: usize) {}

    /// Called after a reset, with the total reset count and the sampled
    /// score of the re-seeded layout.
    fn on_reset(&mut self, _resets: u64, _score: f64) {}

    /// Called once with the verified, fully scored solution.
    fn on_solve_end(&mut self, _solution: &Solution) {}
}

/// A [`SolveObserver`] that does nothing.
pub struct NoopObserver;

impl SolveObserver for NoopObserver {}
