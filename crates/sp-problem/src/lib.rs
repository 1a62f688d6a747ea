//! `sp-problem`: the immutable problem descriptor and its loaders.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`problem`]   | `Problem`, `RoomSpec`, `Pillar`, `Listener`, `Roster`    |
//! | [`influence`] | Listener influence bounds used to rank listeners         |
//! | [`loader`]    | `load_problem_json`, `load_solution_json` and `_reader`s |
//! | [`error`]     | `ProblemError`, `ProblemResult<T>`                       |
//!
//! # Listener order
//!
//! `Problem::new` sorts listeners by descending influence range, so the
//! first `k` listeners are the ones whose score moves most with placement.
//! The sampled evaluator in `sp-score` relies on this order.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Computes influence bounds with Rayon.                   |

pub mod error;
pub mod influence;
pub mod loader;
pub mod problem;

#[cfg(test)]
mod tests;

pub use error::{ProblemError, ProblemResult};
pub use loader::{load_problem_json, load_problem_reader, load_solution_json, load_solution_reader};
pub use problem::{Listener, Pillar, Problem, RoomSpec, Roster};
