//! JSON loaders for problems and previously produced solutions.
//!
//! # Problem format
//!
//! ```json
//! {
//!   "room_width": 2000.0, "room_height": 5000.0,
//!   "stage_width": 1000.0, "stage_height": 200.0,
//!   "stage_bottom_left": [500.0, 0.0],
//!   "musicians": [0, 1, 0],
//!   "attendees": [ {"x": 100.0, "y": 500.0, "tastes": [1000.0, -1000.0]} ],
//!   "pillars":   [ {"center": [345.0, 255.0], "radius": 4.0} ]
//! }
//! ```
//!
//! `pillars` may be omitted.
//!
//! # Solution format
//!
//! ```json
//! { "placements": [ {"x": 590.0, "y": 10.0} ], "volumes": [10.0] }
//! ```
//!
//! `volumes` may be omitted or shorter than `placements`; missing entries
//! default to full volume (10).  Negative coordinates and surplus volumes are
//! rejected.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use sp_core::{InstrumentId, Solution, XY};

use crate::{Listener, Pillar, Problem, ProblemError, ProblemResult, RoomSpec, Roster};

/// Volume assigned to musicians a loaded solution does not mention.
const DEFAULT_VOLUME: f64 = 10.0;

// ── JSON records ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ProblemRecord {
    room_width:        f64,
    room_height:       f64,
    stage_width:       f64,
    stage_height:      f64,
    stage_bottom_left: [f64; 2],
    musicians:         Vec<u32>,
    attendees:         Vec<AttendeeRecord>,
    #[serde(default)]
    pillars:           Vec<PillarRecord>,
}

#[derive(Deserialize)]
struct AttendeeRecord {
    x:      f64,
    y:      f64,
    tastes: Vec<f64>,
}

#[derive(Deserialize)]
struct PillarRecord {
    center: [f64; 2],
    radius: f64,
}

#[derive(Deserialize)]
struct SolutionRecord {
    placements: Vec<PlacementRecord>,
    #[serde(default)]
    volumes:    Vec<f64>,
}

#[derive(Deserialize)]
struct PlacementRecord {
    x: f64,
    y: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate a problem from a JSON file.
pub fn load_problem_json(path: &Path) -> ProblemResult<Problem> {
    let file = std::fs::File::open(path)?;
    load_problem_reader(std::io::BufReader::new(file))
}

/// Like [`load_problem_json`] but accepts any `Read` source.
pub fn load_problem_reader<R: Read>(reader: R) -> ProblemResult<Problem> {
    let record: ProblemRecord = serde_json::from_reader(reader)?;

    let room = RoomSpec::new(
        XY::new(record.room_width, record.room_height),
        XY::new(record.stage_bottom_left[0], record.stage_bottom_left[1]),
        XY::new(record.stage_width, record.stage_height),
    )?;

    let listeners = record
        .attendees
        .into_iter()
        .map(|a| Listener::new(XY::new(a.x, a.y), a.tastes))
        .collect();

    let pillars = record
        .pillars
        .into_iter()
        .map(|p| Pillar { center: XY::new(p.center[0], p.center[1]), radius: p.radius })
        .collect();

    let roster = Roster::new(record.musicians.into_iter().map(InstrumentId).collect())?;

    Problem::new(room, pillars, listeners, roster)
}

/// Load a previously written solution from a JSON file.
///
/// The returned solution is unscored; pass it to the upgrade path to verify
/// and rescore it against a problem.
pub fn load_solution_json(path: &Path) -> ProblemResult<Solution> {
    let file = std::fs::File::open(path)?;
    load_solution_reader(std::io::BufReader::new(file))
}

/// Like [`load_solution_json`] but accepts any `Read` source.
pub fn load_solution_reader<R: Read>(reader: R) -> ProblemResult<Solution> {
    let record: SolutionRecord = serde_json::from_reader(reader)?;

    let mut placements = Vec::with_capacity(record.placements.len());
    for (i, p) in record.placements.into_iter().enumerate() {
        if p.x < 0.0 || p.y < 0.0 {
            return Err(ProblemError::BadSolution(format!(
                "placement {i} has negative coordinate ({}, {})",
                p.x, p.y
            )));
        }
        placements.push(XY::new(p.x, p.y));
    }

    let mut volumes = record.volumes;
    if volumes.len() > placements.len() {
        return Err(ProblemError::BadSolution(format!(
            "unexpected volume entries: expected {}, got {}",
            placements.len(),
            volumes.len()
        )));
    }
    volumes.resize(placements.len(), DEFAULT_VOLUME);

    Ok(Solution::new(placements, volumes))
}
