//! One round of grouped randomized local search.

use sp_core::{SolveRng, XY};
use sp_spatial::SpatialGrid;

use crate::search::{Search, move_musician, restore};

/// What a round did to the committed layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum RoundOutcome {
    /// Too few movable musicians to fill every group; all were unfrozen.
    Regrouped,
    /// The best group beat the running best and was committed.
    Improved { moved: usize },
    /// No group beat the running best.
    NoOp,
}

/// Scratch buffers reused across rounds.
pub(crate) struct GroupTrials {
    best_score:     Vec<f64>,
    best_placement: Vec<Vec<XY>>,
    members:        Vec<usize>,
}

impl GroupTrials {
    pub fn new(group_count: u32) -> Self {
        Self {
            best_score:     vec![0.0; group_count as usize],
            best_placement: vec![Vec::new(); group_count as usize],
            members:        vec![0; group_count as usize],
        }
    }

    #[inline]
    fn group_count(&self) -> u32 {
        self.best_score.len() as u32
    }
}

/// Run one round.
pub(crate) fn round(
    search:         &mut Search<'_>,
    trials:         &mut GroupTrials,
    rng:            &mut SolveRng,
    mutation_count: u32,
) -> RoundOutcome {
    let group_count = trials.group_count();

    // ── Split movable musicians into groups ───────────────────────────────
    trials.members.fill(0);
    for g in search.groups.iter_mut().filter(|g| **g != 0) {
        *g = rng.gen_range(1..=group_count);
        trials.members[(*g - 1) as usize] += 1;
    }
    if trials.members.contains(&0) {
        search.unfreeze_all();
        return RoundOutcome::Regrouped;
    }

    // ── Trial relocations per group ───────────────────────────────────────
    search.trial.clone_from(&search.placements);
    trials.best_score.fill(search.best_score);
    for group in 1..=group_count {
        let slot = (group - 1) as usize;
        for _ in 0..mutation_count {
            move_group(&mut search.grid, &mut search.trial, &search.groups, group, rng);
            let score = search.sampled(&search.trial);
            if score > trials.best_score[slot] {
                trials.best_score[slot] = score;
                trials.best_placement[slot].clone_from(&search.trial);
            }
            let n = search.trial.len();
            restore(&mut search.grid, &mut search.trial, &search.placements, (0..n).rev());
        }
    }

    // First group with the highest trial score wins ties.
    let mut best = 0;
    for slot in 1..group_count as usize {
        if trials.best_score[slot] > trials.best_score[best] {
            best = slot;
        }
    }
    let winner = best as u32 + 1;

    let outcome = if trials.best_score[best] > search.best_score {
        let n = search.placements.len();
        restore(&mut search.grid, &mut search.placements, &trials.best_placement[best], 0..n);
        search.best_score = trials.best_score[best];
        search.remember_best();
        let moved = trials.members[best];
        search.counters.dance_movements += moved as u64;
        RoundOutcome::Improved { moved }
    } else {
        search.no_ops += 1;
        RoundOutcome::NoOp
    };

    // Freeze everyone outside the winning group, improvement or not.
    for g in search.groups.iter_mut() {
        if *g != winner {
            *g = 0;
        }
    }
    outcome
}

/// Relocate every member of `group` to the next free candidate cell after a
/// fresh shuffle.  A member stays put when no cell is free.
fn move_group(
    grid:      &mut SpatialGrid,
    positions: &mut [XY],
    groups:    &[u32],
    group:     u32,
    rng:       &mut SolveRng,
) {
    grid.shuffle_points(rng);
    let len = grid.points().len();
    let mut cursor = 0;
    for m in (0..groups.len()).filter(|&m| groups[m] == group) {
        for _ in 0..len {
            let cell = grid.points()[cursor];
            cursor = (cursor + 1) % len;
            if !grid.is_occupied(cell) {
                move_musician(grid, positions, m, cell);
                break;
            }
        }
    }
}
