//! `sp-spatial`: stage occupancy grid, obstruction geometry, point index.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`grid`]     | `SpatialGrid`, `Cell`, `CELL_SIZE`                        |
//! | [`blocking`] | `is_blocked`, `MUSICIAN_BLOCKING_RADIUS`                  |
//! | [`index`]    | `PointIndex` (R-tree) for separation queries              |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Cell`.                 |

pub mod blocking;
pub mod error;
pub mod grid;
pub mod index;

#[cfg(test)]
mod tests;

pub use blocking::{MUSICIAN_BLOCKING_RADIUS, is_blocked};
pub use error::{SpatialError, SpatialResult};
pub use grid::{CELL_SIZE, Cell, SpatialGrid};
pub use index::PointIndex;
