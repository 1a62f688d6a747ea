//! Unit tests for sp-problem.

use std::io::Cursor;

use sp_core::{InstrumentId, XY};

use crate::{Listener, Pillar, Problem, RoomSpec, Roster};

// ── Helpers ───────────────────────────────────────────────────────────────────

const SAMPLE_PROBLEM: &str = r#"{
    "room_width": 2000.0,
    "room_height": 5000.0,
    "stage_width": 1000.0,
    "stage_height": 200.0,
    "stage_bottom_left": [500.0, 0.0],
    "musicians": [0, 1, 0],
    "attendees": [
        {"x": 100.0,  "y": 500.0,  "tastes": [1000.0, -1000.0]},
        {"x": 200.0,  "y": 1000.0, "tastes": [200.0, 200.0]},
        {"x": 1100.0, "y": 800.0,  "tastes": [800.0, 1500.0]}
    ],
    "pillars": []
}"#;

fn wide_room() -> RoomSpec {
    RoomSpec::new(
        XY::new(2000.0, 5000.0),
        XY::new(500.0, 0.0),
        XY::new(1000.0, 200.0),
    )
    .unwrap()
}

fn roster(ids: &[u32]) -> Roster {
    Roster::new(ids.iter().copied().map(InstrumentId).collect()).unwrap()
}

// ── RoomSpec ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod room {
    use super::*;
    use crate::ProblemError;

    #[test]
    fn valid_room() {
        let room = wide_room();
        assert_eq!(room.stage.top_right(), XY::new(1500.0, 200.0));
    }

    #[test]
    fn stage_must_fit() {
        let r = RoomSpec::new(XY::new(1000.0, 1000.0), XY::new(500.0, 0.0), XY::new(600.0, 100.0));
        assert!(matches!(r, Err(ProblemError::StageOutOfRoom { .. })));
        let r = RoomSpec::new(XY::new(1000.0, 1000.0), XY::new(-1.0, 0.0), XY::new(100.0, 100.0));
        assert!(matches!(r, Err(ProblemError::StageOutOfRoom { .. })));
    }

    #[test]
    fn sizes_must_be_positive() {
        let r = RoomSpec::new(XY::new(0.0, 1000.0), XY::new(0.0, 0.0), XY::new(10.0, 10.0));
        assert!(matches!(r, Err(ProblemError::Geometry(_))));
        let r = RoomSpec::new(XY::new(100.0, 100.0), XY::new(0.0, 0.0), XY::new(10.0, -1.0));
        assert!(matches!(r, Err(ProblemError::Geometry(_))));
    }
}

// ── Roster ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod roster_tests {
    use super::*;
    use crate::ProblemError;
    use sp_core::MusicianId;

    #[test]
    fn counts_per_instrument() {
        let r = roster(&[0, 2, 0, 2, 2]);
        assert_eq!(r.len(), 5);
        assert_eq!(r.instrument_types(), 3);
        assert_eq!(r.instrument_counts(), &[2, 0, 3]);
        assert_eq!(r.instrument(MusicianId(1)), InstrumentId(2));
    }

    #[test]
    fn empty_roster_rejected() {
        assert!(matches!(Roster::new(vec![]), Err(ProblemError::NoMusicians)));
    }
}

// ── Problem ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod problem {
    use super::*;
    use crate::ProblemError;

    #[test]
    fn taste_arity_checked() {
        let listeners = vec![Listener::new(XY::new(100.0, 500.0), vec![1.0])];
        let r = Problem::new(wide_room(), vec![], listeners, roster(&[0, 1]));
        assert!(matches!(
            r,
            Err(ProblemError::TasteCount { index: 0, got: 1, expected: 2 })
        ));
    }

    #[test]
    fn listeners_required() {
        let r = Problem::new(wide_room(), vec![], vec![], roster(&[0]));
        assert!(matches!(r, Err(ProblemError::NoListeners)));
    }

    #[test]
    fn pillar_radius_checked() {
        let pillars = vec![Pillar { center: XY::new(10.0, 900.0), radius: 0.0 }];
        let listeners = vec![Listener::new(XY::new(100.0, 500.0), vec![1.0])];
        let r = Problem::new(wide_room(), pillars, listeners, roster(&[0]));
        assert!(matches!(r, Err(ProblemError::BadPillar { index: 0, .. })));
    }

    #[test]
    fn listeners_sorted_by_influence_range() {
        let listeners = vec![
            Listener::new(XY::new(1000.0, 4900.0), vec![100.0]),
            Listener::new(XY::new(1000.0, 260.0), vec![100.0]),
            Listener::new(XY::new(1000.0, 1500.0), vec![100.0]),
        ];
        let p = Problem::new(wide_room(), vec![], listeners, roster(&[0, 0])).unwrap();
        let ys: Vec<f64> = p.listeners().iter().map(|l| l.position.y).collect();
        assert_eq!(ys, vec![260.0, 1500.0, 4900.0]);
        for pair in p.listeners().windows(2) {
            assert!(pair[0].influence_range() >= pair[1].influence_range());
        }
        for l in p.listeners() {
            assert!(l.min_influence <= l.max_influence);
        }
    }

    #[test]
    fn zero_taste_has_zero_range() {
        let listeners = vec![Listener::new(XY::new(1000.0, 800.0), vec![0.0])];
        let p = Problem::new(wide_room(), vec![], listeners, roster(&[0])).unwrap();
        assert_eq!(p.listeners()[0].min_influence, 0.0);
        assert_eq!(p.listeners()[0].max_influence, 0.0);
    }

    #[test]
    fn pillar_blocking_and_extension() {
        let pillars = vec![Pillar { center: XY::new(1000.0, 600.0), radius: 50.0 }];
        let listeners = vec![Listener::new(XY::new(1000.0, 900.0), vec![1.0])];
        let p = Problem::new(wide_room(), pillars, listeners, roster(&[0])).unwrap();
        assert!(p.uses_closeness_extension());
        assert!(p.blocked_by_pillar(XY::new(1000.0, 900.0), XY::new(1000.0, 100.0)));
        assert!(!p.blocked_by_pillar(XY::new(100.0, 900.0), XY::new(100.0, 100.0)));
    }

    #[test]
    fn listener_index_matches_sorted_order() {
        let p = crate::load_problem_reader(Cursor::new(SAMPLE_PROBLEM)).unwrap();
        let idx = p.listener_index();
        assert_eq!(idx.len(), 3);
        for (i, l) in p.listeners().iter().enumerate() {
            assert_eq!(idx.within(l.position, 1.0), vec![i as u32]);
        }
    }
}

// ── Influence ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod influence {
    use super::*;
    use crate::influence::{listener_influence, probe_points};

    #[test]
    fn probe_lattice_anchored_at_stage_corner() {
        let stage = wide_room().stage;
        let probe = probe_points(&stage);
        // (1000 − 20) / 10 = 98 columns, (200 − 20) / 10 = 18 rows.
        assert_eq!(probe.len(), 98 * 18);
        assert_eq!(probe[0], stage.bottom_left);
        let last = probe[probe.len() - 1];
        assert!((last.x - 1480.0).abs() < 1e-9 && (last.y - 180.0).abs() < 1e-9, "{last}");
        for p in &probe {
            assert!(p.x >= 500.0 && p.x <= 1480.0 + 1e-9, "{p} off stage");
            assert!(p.y >= 0.0 && p.y <= 180.0 + 1e-9, "{p} off stage");
        }
    }

    #[test]
    fn tiny_stage_still_has_two_by_two_probes() {
        let room = RoomSpec::new(XY::new(100.0, 100.0), XY::new(10.0, 10.0), XY::new(25.0, 25.0))
            .unwrap();
        assert_eq!(probe_points(&room.stage).len(), 4);
    }

    #[test]
    fn pillar_hides_every_probe() {
        let stage = wide_room().stage;
        let probe = probe_points(&stage);
        let listener = Listener::new(XY::new(1000.0, 2000.0), vec![10.0]);
        let wall = [Pillar { center: XY::new(1000.0, 1000.0), radius: 5_000.0 }];
        assert_eq!(listener_influence(&listener, &probe, &wall, &[1]), (0.0, 0.0));
        let (min, max) = listener_influence(&listener, &probe, &[], &[1]);
        assert!(min > 0.0 && min < max);
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;
    use crate::{ProblemError, load_problem_reader, load_solution_reader};

    #[test]
    fn loads_sample_problem() {
        let p = load_problem_reader(Cursor::new(SAMPLE_PROBLEM)).unwrap();
        assert_eq!(p.musician_count(), 3);
        assert_eq!(p.listeners().len(), 3);
        assert_eq!(p.roster().instrument_counts(), &[2, 1]);
        assert!(!p.uses_closeness_extension());
        assert_eq!(p.stage().bottom_left, XY::new(500.0, 0.0));
    }

    #[test]
    fn pillars_are_optional() {
        let json = SAMPLE_PROBLEM.replace(",\n    \"pillars\": []", "");
        assert!(!json.contains("pillars"));
        let p = load_problem_reader(Cursor::new(json)).unwrap();
        assert!(p.pillars().is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let r = load_problem_reader(Cursor::new("{\"room_width\": 1"));
        assert!(matches!(r, Err(ProblemError::Json(_))));
    }

    #[test]
    fn solution_volumes_padded() {
        let json = r#"{"placements":[{"x":590,"y":10},{"x":1100,"y":100}],"volumes":[3.5]}"#;
        let s = load_solution_reader(Cursor::new(json)).unwrap();
        assert_eq!(s.placements, vec![XY::new(590.0, 10.0), XY::new(1100.0, 100.0)]);
        assert_eq!(s.volumes, vec![3.5, 10.0]);
        assert!(s.is_error());
    }

    #[test]
    fn solution_without_volumes() {
        let json = r#"{"placements":[{"x":1,"y":2}]}"#;
        let s = load_solution_reader(Cursor::new(json)).unwrap();
        assert_eq!(s.volumes, vec![10.0]);
    }

    #[test]
    fn solution_rejects_negative_and_surplus() {
        let neg = r#"{"placements":[{"x":-1,"y":2}]}"#;
        assert!(matches!(
            load_solution_reader(Cursor::new(neg)),
            Err(ProblemError::BadSolution(_))
        ));
        let surplus = r#"{"placements":[{"x":1,"y":2}],"volumes":[1,2]}"#;
        assert!(matches!(
            load_solution_reader(Cursor::new(surplus)),
            Err(ProblemError::BadSolution(_))
        ));
    }
}
