//! Stop conditions for the time-boxed search.
//!
//! The optimizer polls a [`Deadline`] once per search round and never looks
//! at a clock directly, so the same loop runs against wall time in
//! production and against a round counter in tests.

use std::time::{Duration, Instant};

/// Decides when the search loop must stop.
pub trait Deadline {
    /// `true` once no further round may start.
    fn expired(&mut self) -> bool;
}

// ── WallClockDeadline ─────────────────────────────────────────────────────────

/// Expires a fixed wall-clock duration after construction.
#[derive(Clone, Debug)]
pub struct WallClockDeadline {
    start:  Instant,
    budget: Duration,
}

impl WallClockDeadline {
    /// Start the clock now.
    pub fn new(budget: Duration) -> Self {
        Self { start: Instant::now(), budget }
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    #[inline]
    pub fn budget(&self) -> Duration {
        self.budget
    }
}

impl Deadline for WallClockDeadline {
    #[inline]
    fn expired(&mut self) -> bool {
        self.start.elapsed() >= self.budget
    }
}

// ── RoundLimit ────────────────────────────────────────────────────────────────

/// Expires after a fixed number of polls.
///
/// `RoundLimit::new(n)` lets exactly `n` rounds run.
#[derive(Clone, Debug)]
pub struct RoundLimit {
    remaining: u64,
}

impl RoundLimit {
    pub fn new(rounds: u64) -> Self {
        Self { remaining: rounds }
    }
}

impl Deadline for RoundLimit {
    fn expired(&mut self) -> bool {
        if self.remaining == 0 {
            return true;
        }
        self.remaining -= 1;
        false
    }
}
