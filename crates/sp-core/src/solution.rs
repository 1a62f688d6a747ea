//! The solution record exchanged between the optimizer and its callers.

use std::fmt;

use crate::XY;

/// Score reported for a solution that failed verification, or returned by
/// the fast evaluator when it meets an illegal placement.
pub const ERROR_SCORE: f64 = -1e9;

// ── Counters ──────────────────────────────────────────────────────────────────

/// Diagnostic counters accumulated during a solve.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Counters {
    /// Force-directed passes, summed over the initial seeding and every reset.
    pub initial_iterations: u64,
    /// Accepted one-cell seeding steps.
    pub initial_movements:  u64,
    /// Group-search rounds started.
    pub dance_iterations:   u64,
    /// Musicians relocated by committed group moves.
    pub dance_movements:    u64,
    /// Re-seeds triggered by consecutive non-improving rounds.
    pub dance_resets:       u64,
}

impl Counters {
    /// Counters in declaration order, for compact reporting.
    pub fn as_array(&self) -> [u64; 5] {
        [
            self.initial_iterations,
            self.initial_movements,
            self.dance_iterations,
            self.dance_movements,
            self.dance_resets,
        ]
    }
}

impl fmt::Display for Counters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e] = self.as_array();
        write!(f, "{a},{b},{c},{d},{e}")
    }
}

// ── Solution ──────────────────────────────────────────────────────────────────

/// Musician positions and volumes plus their score.
///
/// `placements` and `volumes` are index-aligned with the problem's roster.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub placements: Vec<XY>,
    pub volumes:    Vec<f64>,
    pub score:      f64,
    pub counters:   Counters,
}

impl Solution {
    /// A solution that has not been scored yet.
    pub fn new(placements: Vec<XY>, volumes: Vec<f64>) -> Self {
        Self {
            placements,
            volumes,
            score: ERROR_SCORE,
            counters: Counters::default(),
        }
    }

    pub fn musician_count(&self) -> usize {
        self.placements.len()
    }

    /// `true` if the score is the error sentinel.
    pub fn is_error(&self) -> bool {
        self.score <= ERROR_SCORE
    }
}
