//! Stage occupancy grid.
//!
//! # Layout
//!
//! The stage interior is covered by square cells of [`CELL_SIZE`].  Cell
//! `(0, 0)` sits one cell in from the stage's bottom-left corner, so every
//! cell center already respects the edge margin:
//!
//! ```text
//! to_xy(c, r) = (stage.x + 10 + 10·c,  stage.y + 10 + 10·r)
//! columns     = floor(stage_w / 10) − 1
//! rows        = floor(stage_h / 10) − 1
//! ```
//!
//! Cell spacing equals the minimum musician separation, so "one musician per
//! cell" is enough to keep every pair legally apart.
//!
//! Occupancy is one byte per cell, row-major.  The grid also owns the
//! candidate list: every cell, in an order the optimizer reshuffles before
//! each group move.

use sp_core::{MUSICIAN_MARGIN, SolveRng, Stage, XY};

use crate::{SpatialError, SpatialResult};

/// Side length of one grid cell.
pub const CELL_SIZE: f64 = MUSICIAN_MARGIN;

/// A `(column, row)` grid address.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub column: u32,
    pub row:    u32,
}

impl Cell {
    #[inline]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

/// Single-occupant grid over the margin-inset stage.
pub struct SpatialGrid {
    /// Position of cell (0, 0).
    min:     XY,
    columns: u32,
    rows:    u32,
    /// Row-major occupancy, `0` = free.
    cells:   Vec<u8>,
    /// Candidate cells.  Column-major until the first shuffle.
    points:  Vec<Cell>,
}

impl SpatialGrid {
    /// Build an empty grid sized to `stage`.
    ///
    /// Fails with [`SpatialError::StageTooSmall`] when the stage cannot hold
    /// one inset cell in either direction.
    pub fn new(stage: &Stage) -> SpatialResult<Self> {
        let columns = (stage.size.x / CELL_SIZE).floor() as i64 - 1;
        let rows    = (stage.size.y / CELL_SIZE).floor() as i64 - 1;
        if columns <= 0 || rows <= 0 {
            return Err(SpatialError::StageTooSmall {
                width:  stage.size.x,
                height: stage.size.y,
            });
        }
        let (columns, rows) = (columns as u32, rows as u32);

        let mut points = Vec::with_capacity(columns as usize * rows as usize);
        for column in 0..columns {
            for row in 0..rows {
                points.push(Cell::new(column, row));
            }
        }

        Ok(Self {
            min: stage.bottom_left + XY::new(CELL_SIZE, CELL_SIZE),
            columns,
            rows,
            cells: vec![0; columns as usize * rows as usize],
            points,
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// `true` if signed indices fall inside the grid.
    #[inline]
    pub fn contains(&self, column: i64, row: i64) -> bool {
        column >= 0 && row >= 0 && column < self.columns as i64 && row < self.rows as i64
    }

    // ── Coordinate mapping ────────────────────────────────────────────────

    /// Center of `cell` in room coordinates.
    #[inline]
    pub fn to_xy(&self, cell: Cell) -> XY {
        XY::new(
            self.min.x + cell.column as f64 * CELL_SIZE,
            self.min.y + cell.row as f64 * CELL_SIZE,
        )
    }

    /// Signed `(column, row)` of the cell nearest to `p`.
    ///
    /// Rounds rather than truncates so that positions produced by
    /// [`to_xy`](Self::to_xy) map back exactly even for fractional stage
    /// offsets.  Results may lie outside the grid; see
    /// [`cell_at`](Self::cell_at).
    #[inline]
    pub fn from_xy(&self, p: XY) -> (i64, i64) {
        (
            ((p.x - self.min.x) / CELL_SIZE).round() as i64,
            ((p.y - self.min.y) / CELL_SIZE).round() as i64,
        )
    }

    /// The in-bounds cell nearest to `p`, if any.
    #[inline]
    pub fn cell_at(&self, p: XY) -> Option<Cell> {
        let (column, row) = self.from_xy(p);
        self.contains(column, row)
            .then(|| Cell::new(column as u32, row as u32))
    }

    // ── Occupancy ─────────────────────────────────────────────────────────

    #[inline]
    fn offset(&self, cell: Cell) -> usize {
        debug_assert!(cell.column < self.columns && cell.row < self.rows);
        cell.row as usize * self.columns as usize + cell.column as usize
    }

    #[inline]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.cells[self.offset(cell)] != 0
    }

    #[inline]
    pub fn set(&mut self, cell: Cell, occupied: bool) {
        let i = self.offset(cell);
        self.cells[i] = occupied as u8;
    }

    /// Clear every cell.  The candidate order is left untouched.
    pub fn reset(&mut self) {
        self.cells.fill(0);
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    // ── Candidate list ────────────────────────────────────────────────────

    /// Every cell, in the current candidate order.
    #[inline]
    pub fn points(&self) -> &[Cell] {
        &self.points
    }

    /// Replace the candidate order with a fresh uniform permutation.
    pub fn shuffle_points(&mut self, rng: &mut SolveRng) {
        rng.shuffle(&mut self.points);
    }
}
