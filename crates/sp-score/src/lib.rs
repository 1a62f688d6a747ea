//! `sp-score`: the placement score.
//!
//! # Scoring rule
//!
//! ```text
//! score = Σ_musician Σ_listener  ceil( ceil(1e6 · taste / d²) · volume · q )
//! ```
//!
//! where a (listener, musician) pair is skipped when any other musician
//! (radius 5) or any pillar obstructs the straight line between them, and
//! `q` is the closeness factor (see [`closeness`]).
//!
//! # Two modes
//!
//! | Method                                   | Listeners        | Illegal placement |
//! |------------------------------------------|------------------|-------------------|
//! | [`ScoreEvaluator::full_score`]           | all              | scored anyway     |
//! | [`ScoreEvaluator::sampled_score`]        | first `limit`    | `ERROR_SCORE`     |
//!
//! The sampled mode is the optimizer's inner loop; it leans on the listener
//! list being sorted by influence range.  The full mode is only used after
//! verification and when upgrading an existing solution.

pub mod closeness;
pub mod evaluator;

#[cfg(test)]
mod tests;

pub use closeness::closeness_factor;
pub use evaluator::ScoreEvaluator;
