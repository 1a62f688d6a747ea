//! `sp-solver`: the placement optimizer.
//!
//! # Search
//!
//! ```text
//! Seeding      : one musician per shuffled candidate cell, then force passes
//!                pull each musician one cell at a time toward listeners that
//!                like its instrument.
//! GroupSearch  : until the deadline:
//!                  split movable musicians into `group_count` random groups;
//!                  try `mutation_count` random relocations per group;
//!                  commit the best group if it beats the running best;
//!                  freeze everyone outside that group.
//! Resetting    : after `max_consecutive_no_ops` fruitless rounds, re-seed
//!                with a short random number of force passes and unfreeze
//!                everyone.
//! ```
//!
//! The deadline is polled once per round, so every round commits atomically.
//! Once it expires the best layout seen is verified and scored with the full
//! evaluator.
//!
//! # Modules
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`config`]   | `SolverConfig` and its `full` / `lightning` profiles   |
//! | [`builder`]  | `SolverBuilder`                                        |
//! | [`optimizer`]| `Solver`, `SearchPhase`                                |
//! | [`observer`] | `SolveObserver` progress hooks                         |
//! | [`verify`]   | structural checks on a finished solution               |
//! | [`upgrade`]  | volume-only improvement of an existing solution        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sp_solver::{NoopObserver, SolverBuilder, SolverConfig};
//!
//! let mut solver = SolverBuilder::new(SolverConfig::lightning()).seed(7).build()?;
//! let solution = solver.solve(&problem)?;
//! println!("score {}", solution.score);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod optimizer;
pub mod upgrade;
pub mod verify;

mod dance;
mod search;
mod seeding;


pub use builder::SolverBuilder;
pub use config::{Closeness, SolverConfig};
pub use error::{SolveError, SolveResult};
pub use observer::{NoopObserver, SolveObserver};
pub use optimizer::{SearchPhase, Solver};
pub use upgrade::{adjust_volumes, upgrade_solution};
pub use verify::{Violation, VerifyReport, verify};
