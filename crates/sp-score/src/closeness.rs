//! Closeness factor: musicians play better next to colleagues on the same
//! instrument.
//!
//! ```text
//! q(i) = 1 + Σ_{j ≠ i, instrument(j) = instrument(i)} 1 / distance(i, j)
//! ```
//!
//! Coincident pairs (distance 0) contribute nothing.

use sp_core::{MusicianId, XY};
use sp_problem::Roster;

/// Closeness factor for musician `m` under `placements`.
pub fn closeness_factor(roster: &Roster, placements: &[XY], m: MusicianId) -> f64 {
    let instrument = roster.instrument(m);
    let here = placements[m.index()];
    let mut q = 1.0;
    for (j, (&other, &pos)) in roster.musicians().iter().zip(placements).enumerate() {
        if j == m.index() || other != instrument {
            continue;
        }
        let d = here.distance(pos);
        if d > 0.0 {
            q += 1.0 / d;
        }
    }
    q
}
