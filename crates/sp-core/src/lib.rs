//! `sp-core`: foundational types for the stage placement optimizer.
//!
//! This crate is a dependency of every other `sp-*` crate.  It has no `sp-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`ids`]        | `MusicianId`, `InstrumentId`, `ListenerId`             |
//! | [`geo`]        | `XY`, `Stage`, separation constants                    |
//! | [`rng`]        | `SolveRng` (one per solve)                             |
//! | [`deadline`]   | `Deadline` trait, `WallClockDeadline`, `RoundLimit`    |
//! | [`solution`]   | `Solution`, `Counters`, `ERROR_SCORE`                  |
//! | [`error`]      | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod deadline;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod solution;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use deadline::{Deadline, RoundLimit, WallClockDeadline};
pub use error::{CoreError, CoreResult};
pub use geo::{MUSICIAN_MARGIN, Stage, XY};
pub use ids::{InstrumentId, ListenerId, MusicianId};
pub use rng::SolveRng;
pub use solution::{Counters, ERROR_SCORE, Solution};
