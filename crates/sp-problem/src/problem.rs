//! The problem descriptor.
//!
//! A [`Problem`] is validated and built once, then shared read-only by the
//! grid, the evaluator, the optimizer and the verifier.

use sp_core::{CoreError, InstrumentId, MusicianId, Stage, XY};
use sp_spatial::{PointIndex, is_blocked};

use crate::influence::compute_influences;
use crate::{ProblemError, ProblemResult};

// ── RoomSpec ──────────────────────────────────────────────────────────────────

/// Room dimensions and the stage placed inside it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoomSpec {
    pub room_size: XY,
    pub stage:     Stage,
}

impl RoomSpec {
    /// Validate that every size is positive and the stage lies inside the room.
    pub fn new(room_size: XY, stage_bottom_left: XY, stage_size: XY) -> ProblemResult<Self> {
        for (what, value) in [("room width", room_size.x), ("room height", room_size.y)] {
            if !value.is_finite() {
                return Err(CoreError::NotFinite { what }.into());
            }
            if value <= 0.0 {
                return Err(CoreError::NonPositive { what, value }.into());
            }
        }
        let stage = Stage::new(stage_bottom_left, stage_size)?;

        let top_right = stage.top_right();
        if stage_bottom_left.x < 0.0
            || stage_bottom_left.y < 0.0
            || top_right.x > room_size.x
            || top_right.y > room_size.y
        {
            return Err(ProblemError::StageOutOfRoom {
                room_size,
                stage_size,
                bottom_left: stage_bottom_left,
            });
        }
        Ok(Self { room_size, stage })
    }
}

// ── Pillar ────────────────────────────────────────────────────────────────────

/// A static circular obstruction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pillar {
    pub center: XY,
    pub radius: f64,
}

// ── Listener ──────────────────────────────────────────────────────────────────

/// A fixed listener with one signed taste per instrument.
#[derive(Clone, Debug, PartialEq)]
pub struct Listener {
    pub position: XY,
    pub tastes:   Vec<f64>,
    /// Smallest total influence over the probe grid; filled by `Problem::new`.
    pub min_influence: f64,
    /// Largest total influence over the probe grid; filled by `Problem::new`.
    pub max_influence: f64,
}

impl Listener {
    pub fn new(position: XY, tastes: Vec<f64>) -> Self {
        Self { position, tastes, min_influence: 0.0, max_influence: 0.0 }
    }

    #[inline]
    pub fn taste(&self, instrument: InstrumentId) -> f64 {
        self.tastes[instrument.index()]
    }

    /// How much this listener's score can swing with placement.
    #[inline]
    pub fn influence_range(&self) -> f64 {
        self.max_influence - self.min_influence
    }
}

// ── Roster ────────────────────────────────────────────────────────────────────

/// The instrument played by each musician, plus per-instrument head counts.
#[derive(Clone, Debug, PartialEq)]
pub struct Roster {
    musicians:         Vec<InstrumentId>,
    instrument_counts: Vec<u32>,
}

impl Roster {
    pub fn new(musicians: Vec<InstrumentId>) -> ProblemResult<Self> {
        let Some(max) = musicians.iter().max() else {
            return Err(ProblemError::NoMusicians);
        };
        let mut instrument_counts = vec![0u32; max.index() + 1];
        for m in &musicians {
            instrument_counts[m.index()] += 1;
        }
        Ok(Self { musicians, instrument_counts })
    }

    /// Number of musicians.
    #[inline]
    pub fn len(&self) -> usize {
        self.musicians.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.musicians.is_empty()
    }

    #[inline]
    pub fn instrument(&self, musician: MusicianId) -> InstrumentId {
        self.musicians[musician.index()]
    }

    /// Instrument of every musician, indexed by `MusicianId`.
    #[inline]
    pub fn musicians(&self) -> &[InstrumentId] {
        &self.musicians
    }

    /// Musicians per instrument, indexed by `InstrumentId`.
    #[inline]
    pub fn instrument_counts(&self) -> &[u32] {
        &self.instrument_counts
    }

    /// Number of distinct instrument ids (`max id + 1`).
    #[inline]
    pub fn instrument_types(&self) -> usize {
        self.instrument_counts.len()
    }
}

// ── Problem ───────────────────────────────────────────────────────────────────

/// Validated, immutable problem descriptor.
pub struct Problem {
    room:           RoomSpec,
    pillars:        Vec<Pillar>,
    /// Sorted by descending influence range.
    listeners:      Vec<Listener>,
    roster:         Roster,
    listener_index: PointIndex,
}

impl Problem {
    /// Validate inputs, compute listener influence bounds and rank listeners.
    ///
    /// Influence bounds already present on `listeners` are overwritten.
    pub fn new(
        room:          RoomSpec,
        pillars:       Vec<Pillar>,
        mut listeners: Vec<Listener>,
        roster:        Roster,
    ) -> ProblemResult<Self> {
        if listeners.is_empty() {
            return Err(ProblemError::NoListeners);
        }
        for (index, p) in pillars.iter().enumerate() {
            if p.radius.is_nan() || p.radius <= 0.0 {
                return Err(ProblemError::BadPillar { index, center: p.center, radius: p.radius });
            }
        }
        let expected = roster.instrument_types();
        for (index, l) in listeners.iter().enumerate() {
            if l.tastes.len() != expected {
                return Err(ProblemError::TasteCount { index, got: l.tastes.len(), expected });
            }
        }

        compute_influences(&mut listeners, &room.stage, &pillars, roster.instrument_counts());
        listeners.sort_by(|a, b| b.influence_range().total_cmp(&a.influence_range()));

        let listener_index = PointIndex::build(listeners.iter().map(|l| l.position));

        Ok(Self { room, pillars, listeners, roster, listener_index })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn room(&self) -> &RoomSpec {
        &self.room
    }

    #[inline]
    pub fn stage(&self) -> &Stage {
        &self.room.stage
    }

    #[inline]
    pub fn pillars(&self) -> &[Pillar] {
        &self.pillars
    }

    #[inline]
    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    #[inline]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[inline]
    pub fn musician_count(&self) -> usize {
        self.roster.len()
    }

    /// R-tree over listener positions, ids matching `listeners()` order.
    #[inline]
    pub fn listener_index(&self) -> &PointIndex {
        &self.listener_index
    }

    /// The closeness bonus applies only to problems with pillars.
    #[inline]
    pub fn uses_closeness_extension(&self) -> bool {
        !self.pillars.is_empty()
    }

    /// `true` if any pillar obstructs the segment `u`–`v`.
    #[inline]
    pub fn blocked_by_pillar(&self, u: XY, v: XY) -> bool {
        blocked_by_any(&self.pillars, u, v)
    }
}

#[inline]
pub(crate) fn blocked_by_any(pillars: &[Pillar], u: XY, v: XY) -> bool {
    pillars.iter().any(|p| is_blocked(u, v, p.center, p.radius))
}
