//! Mutable state shared by seeding and group search.

use sp_core::{Counters, ERROR_SCORE, XY};
use sp_score::ScoreEvaluator;
use sp_spatial::{Cell, SpatialGrid};

/// Grid, committed layout and bookkeeping for one solve.
///
/// `grid` always mirrors `placements` outside of a group trial.
pub(crate) struct Search<'p> {
    pub eval:        ScoreEvaluator<'p>,
    pub grid:        SpatialGrid,
    /// Committed layout.
    pub placements:  Vec<XY>,
    /// Scratch layout for group trials.
    pub trial:       Vec<XY>,
    pub volumes:     Vec<f64>,
    /// Per-musician group, `0` = frozen.
    pub groups:      Vec<u32>,
    pub sample_size: usize,
    /// Sampled score of `placements`.
    pub best_score:  f64,
    /// Best committed layout since the solve started; survives resets.
    pub best_seen:   (Vec<XY>, f64),
    pub no_ops:      u32,
    pub round:       u64,
    pub counters:    Counters,
}

impl<'p> Search<'p> {
    pub fn new(eval: ScoreEvaluator<'p>, grid: SpatialGrid, sample_size: usize) -> Self {
        let n = eval.problem().musician_count();
        Self {
            eval,
            grid,
            placements:  vec![XY::default(); n],
            trial:       Vec::with_capacity(n),
            volumes:     vec![10.0; n],
            groups:      vec![1; n],
            sample_size,
            best_score:  ERROR_SCORE,
            best_seen:   (Vec::new(), f64::NEG_INFINITY),
            no_ops:      0,
            round:       0,
            counters:    Counters::default(),
        }
    }

    #[inline]
    pub fn sampled(&self, placements: &[XY]) -> f64 {
        self.eval.sampled_score(placements, &self.volumes, self.sample_size)
    }

    /// Re-score the committed layout after seeding and clear the no-op streak.
    pub fn rebase(&mut self) {
        self.best_score = self.sampled(&self.placements);
        self.no_ops = 0;
        self.remember_best();
    }

    /// Make every musician movable again.
    pub fn unfreeze_all(&mut self) {
        self.groups.fill(1);
    }

    /// Record the committed layout if it beats everything seen so far.
    pub fn remember_best(&mut self) {
        if self.best_score > self.best_seen.1 {
            self.best_seen.0.clone_from(&self.placements);
            self.best_seen.1 = self.best_score;
        }
    }
}

/// Move musician `m` to `cell`, mirroring the move in `grid`.
///
/// The musician's previous cell is released first.
#[inline]
pub(crate) fn move_musician(grid: &mut SpatialGrid, positions: &mut [XY], m: usize, cell: Cell) {
    if let Some(old) = grid.cell_at(positions[m]) {
        grid.set(old, false);
    }
    grid.set(cell, true);
    positions[m] = grid.to_xy(cell);
}

/// Move every musician whose position differs from `target`, in `order`.
pub(crate) fn restore<I>(grid: &mut SpatialGrid, positions: &mut [XY], target: &[XY], order: I)
where
    I: IntoIterator<Item = usize>,
{
    for m in order {
        if positions[m] == target[m] {
            continue;
        }
        if let Some(cell) = grid.cell_at(target[m]) {
            move_musician(grid, positions, m, cell);
        }
    }
}
