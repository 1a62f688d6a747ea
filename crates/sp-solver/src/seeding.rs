//! Force-directed seeding.
//!
//! Every listener pulls a musician toward itself with strength
//! `taste / d²` (pushes, for negative tastes).  Each pass visits musicians in
//! random order and steps each one cell along any axis whose net force
//! exceeds 1 in magnitude, provided the target cell is free.

use sp_core::{MusicianId, SolveRng, XY};
use sp_spatial::Cell;
use tracing::debug;

use crate::SolveObserver;
use crate::search::{Search, move_musician};

/// Shuffle the candidate cells and place musician `i` on the `i`-th one, then
/// run up to `max_steps` force passes, stopping early once a pass moves nobody.
///
/// The caller guarantees there are at least as many cells as musicians.
pub(crate) fn seed<O: SolveObserver>(
    search:    &mut Search<'_>,
    rng:       &mut SolveRng,
    max_steps: u32,
    observer:  &mut O,
) {
    let n = search.placements.len();
    search.grid.reset();
    search.grid.shuffle_points(rng);
    for i in 0..n {
        let cell = search.grid.points()[i];
        search.grid.set(cell, true);
        search.placements[i] = search.grid.to_xy(cell);
    }

    let mut order: Vec<usize> = (0..n).collect();
    let mut passes = 0u64;
    let mut movements = 0u64;
    for _ in 0..max_steps {
        rng.shuffle(&mut order);
        let moved = order.iter().filter(|&&m| force_step(search, m)).count();

        passes += 1;
        movements += moved as u64;
        search.counters.initial_iterations += 1;
        search.counters.initial_movements += moved as u64;
        observer.on_seed_pass(search.counters.initial_iterations, moved);

        if moved == 0 {
            break;
        }
    }
    debug!(passes, movements, "seeding finished");
}

/// Net listener force on musician `m`.
fn taste_force(search: &Search<'_>, m: usize) -> XY {
    let problem = search.eval.problem();
    let position = search.placements[m];
    let instrument = problem.roster().instrument(MusicianId(m as u32));

    let mut force = XY::default();
    for listener in problem.listeners() {
        let delta = listener.position - position;
        let d2 = delta.x * delta.x + delta.y * delta.y;
        if d2 <= 0.0 {
            continue;
        }
        let scale = listener.taste(instrument) / d2;
        force.x += scale * delta.x;
        force.y += scale * delta.y;
    }
    force
}

#[inline]
fn axis_step(force: f64) -> i64 {
    if force < -1.0 {
        -1
    } else if force > 1.0 {
        1
    } else {
        0
    }
}

/// Move musician `m` one cell along the net force.  Returns `true` if it moved.
fn force_step(search: &mut Search<'_>, m: usize) -> bool {
    let force = taste_force(search, m);
    let (column, row) = search.grid.from_xy(search.placements[m]);

    let mut next_column = column + axis_step(force.x);
    let mut next_row = row + axis_step(force.y);
    if !search.grid.contains(next_column, row) {
        next_column = column;
    }
    if !search.grid.contains(column, next_row) {
        next_row = row;
    }
    if (next_column, next_row) == (column, row) {
        return false;
    }

    let cell = Cell::new(next_column as u32, next_row as u32);
    if search.grid.is_occupied(cell) {
        return false;
    }
    move_musician(&mut search.grid, &mut search.placements, m, cell);
    true
}
