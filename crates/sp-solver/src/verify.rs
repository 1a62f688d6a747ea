//! Structural checks on a finished solution.
//!
//! Every violation is collected; nothing short-circuits except a length
//! mismatch, which makes per-musician checks meaningless.  Violations are
//! ordered by musician index, then by check kind in declaration order of
//! [`Violation`], then by the other party's index.

use std::fmt;

use sp_core::{ListenerId, MUSICIAN_MARGIN, MusicianId, XY};
use sp_problem::Problem;
use sp_spatial::PointIndex;
use tracing::warn;

/// One failed check.
#[derive(Clone, Debug, PartialEq)]
pub enum Violation {
    LengthMismatch {
        musicians:  usize,
        placements: usize,
        volumes:    usize,
    },
    OffStage {
        musician: MusicianId,
        position: XY,
    },
    VolumeOutOfRange {
        musician: MusicianId,
        volume:   f64,
    },
    ListenerCollision {
        musician: MusicianId,
        listener: ListenerId,
    },
    MusicianCollision {
        musician: MusicianId,
        other:    MusicianId,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::LengthMismatch { musicians, placements, volumes } => write!(
                f,
                "expected {musicians} musicians, got {placements} placements and {volumes} volumes"
            ),
            Violation::OffStage { musician, position } => {
                write!(f, "{musician} at {position} is not on stage")
            }
            Violation::VolumeOutOfRange { musician, volume } => {
                write!(f, "{musician} volume {volume} is outside [0, 10]")
            }
            Violation::ListenerCollision { musician, listener } => {
                write!(f, "{musician} collides with {listener}")
            }
            Violation::MusicianCollision { musician, other } => {
                write!(f, "{musician} collides with {other}")
            }
        }
    }
}

/// All violations found in one solution.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VerifyReport {
    violations: Vec<Violation>,
}

impl VerifyReport {
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    #[inline]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for VerifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.violations.is_empty() {
            return f.write_str("no violations");
        }
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Check `placements` and `volumes` against `problem`.
///
/// Listener and musician collisions are found through R-tree range queries.
pub fn verify(problem: &Problem, placements: &[XY], volumes: &[f64]) -> VerifyReport {
    let musicians = problem.musician_count();
    let mut violations = Vec::new();

    if placements.len() != musicians || volumes.len() != musicians {
        violations.push(Violation::LengthMismatch {
            musicians,
            placements: placements.len(),
            volumes:    volumes.len(),
        });
        return finish(violations);
    }

    let stage = problem.stage();
    let listeners = problem.listener_index();
    let others = PointIndex::build(placements.iter().copied());

    for (i, (&position, &volume)) in placements.iter().zip(volumes).enumerate() {
        let musician = MusicianId(i as u32);
        if !stage.contains_inset(position, MUSICIAN_MARGIN) {
            violations.push(Violation::OffStage { musician, position });
        }
        if !(0.0..=10.0).contains(&volume) {
            violations.push(Violation::VolumeOutOfRange { musician, volume });
        }
        for id in listeners.within(position, MUSICIAN_MARGIN) {
            violations.push(Violation::ListenerCollision { musician, listener: ListenerId(id) });
        }
        for id in others.within(position, MUSICIAN_MARGIN) {
            if id as usize > i {
                violations.push(Violation::MusicianCollision { musician, other: MusicianId(id) });
            }
        }
    }
    finish(violations)
}

fn finish(violations: Vec<Violation>) -> VerifyReport {
    for v in &violations {
        warn!(violation = %v, "solution check failed");
    }
    VerifyReport { violations }
}
