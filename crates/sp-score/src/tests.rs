//! Unit tests for sp-score.

use sp_core::{InstrumentId, MusicianId, XY};
use sp_problem::{Listener, Pillar, Problem, RoomSpec, Roster};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Room 2000 × 5000, stage 1000 × 200 at (500, 0), musicians [0, 1, 0],
/// three listeners, no pillars.
fn scenario_problem() -> Problem {
    scenario_with_pillars(vec![])
}

fn scenario_with_pillars(pillars: Vec<Pillar>) -> Problem {
    let room = RoomSpec::new(
        XY::new(2000.0, 5000.0),
        XY::new(500.0, 0.0),
        XY::new(1000.0, 200.0),
    )
    .unwrap();
    let listeners = vec![
        Listener::new(XY::new(100.0, 500.0), vec![1000.0, -1000.0]),
        Listener::new(XY::new(200.0, 1000.0), vec![200.0, 200.0]),
        Listener::new(XY::new(1100.0, 800.0), vec![800.0, 1500.0]),
    ];
    let roster = Roster::new(vec![InstrumentId(0), InstrumentId(1), InstrumentId(0)]).unwrap();
    Problem::new(room, pillars, listeners, roster).unwrap()
}

fn scenario_placements() -> Vec<XY> {
    vec![XY::new(590.0, 10.0), XY::new(1100.0, 100.0), XY::new(1100.0, 150.0)]
}

// ── Full score ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod full {
    use super::*;
    use crate::ScoreEvaluator;

    #[test]
    fn reference_scenario_scores_5343() {
        let problem = scenario_problem();
        let eval = ScoreEvaluator::new(&problem);
        let score = eval.full_score(&scenario_placements(), &[1.0, 1.0, 1.0]);
        assert_eq!(score, 5343.0);
    }

    #[test]
    fn musician_blocks_musician() {
        // Musician 2 at (1100, 150) hides musician 1 from the listener at
        // (1100, 800).
        let problem = scenario_problem();
        let eval = ScoreEvaluator::new(&problem);
        let placements = scenario_placements();
        assert!(eval.line_of_sight_blocked(&placements, XY::new(1100.0, 800.0), MusicianId(1)));
        assert!(!eval.line_of_sight_blocked(&placements, XY::new(1100.0, 800.0), MusicianId(2)));
    }

    #[test]
    fn zero_volume_contributes_nothing() {
        let problem = scenario_problem();
        let eval = ScoreEvaluator::new(&problem);
        let placements = scenario_placements();
        let all = eval.full_score(&placements, &[1.0, 1.0, 1.0]);
        let muted = eval.full_score(&placements, &[1.0, 0.0, 1.0]);
        // Musician 1 scores -862 + 124 = -738 on its own.
        assert_eq!(muted - all, 738.0);
    }

    #[test]
    fn raising_nonnegative_gain_never_lowers_score() {
        let problem = scenario_problem();
        let eval = ScoreEvaluator::new(&problem);
        let placements = scenario_placements();
        for m in 0..3u32 {
            if eval.full_volume_contribution(&placements, MusicianId(m)) < 0.0 {
                continue;
            }
            let mut volumes = vec![1.0; 3];
            volumes[m as usize] = 0.0;
            let low = eval.full_score(&placements, &volumes);
            volumes[m as usize] = 10.0;
            let high = eval.full_score(&placements, &volumes);
            assert!(high >= low, "musician {m}: {high} < {low}");
        }
    }

    #[test]
    fn full_volume_contribution_sign() {
        let problem = scenario_problem();
        let eval = ScoreEvaluator::new(&problem);
        let placements = scenario_placements();
        assert!(eval.full_volume_contribution(&placements, MusicianId(0)) > 0.0);
        assert!(eval.full_volume_contribution(&placements, MusicianId(1)) < 0.0);
    }
}

// ── Sampled score ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod sampled {
    use super::*;
    use crate::ScoreEvaluator;
    use sp_core::ERROR_SCORE;

    #[test]
    fn full_sample_matches_full_score() {
        let problem = scenario_problem();
        let eval = ScoreEvaluator::new(&problem);
        let placements = scenario_placements();
        let volumes = [1.0, 1.0, 1.0];
        assert_eq!(eval.sampled_score(&placements, &volumes, 3), 5343.0);
        assert_eq!(eval.sampled_score(&placements, &volumes, 1_000), 5343.0);
    }

    #[test]
    fn prefix_sample_uses_fewer_listeners() {
        let problem = scenario_problem();
        let eval = ScoreEvaluator::new(&problem);
        let placements = scenario_placements();
        let volumes = [1.0, 1.0, 1.0];
        assert_eq!(eval.sampled_score(&placements, &volumes, 0), 0.0);
        let one = eval.sampled_score(&placements, &volumes, 1);
        assert_ne!(one, 5343.0);
    }

    #[test]
    fn off_stage_is_error() {
        let problem = scenario_problem();
        let eval = ScoreEvaluator::new(&problem);
        let mut placements = scenario_placements();
        placements[0] = XY::new(505.0, 10.0);
        assert_eq!(eval.sampled_score(&placements, &[1.0, 1.0, 1.0], 3), ERROR_SCORE);
        // The full score does not check.
        assert_ne!(eval.full_score(&placements, &[1.0, 1.0, 1.0]), ERROR_SCORE);
    }

    #[test]
    fn listener_collision_is_error() {
        let room = RoomSpec::new(
            XY::new(200.0, 200.0),
            XY::new(0.0, 0.0),
            XY::new(200.0, 200.0),
        )
        .unwrap();
        let listeners = vec![Listener::new(XY::new(100.0, 100.0), vec![5.0])];
        let roster = Roster::new(vec![InstrumentId(0)]).unwrap();
        let problem = Problem::new(room, vec![], listeners, roster).unwrap();
        let eval = ScoreEvaluator::new(&problem);
        assert_eq!(eval.sampled_score(&[XY::new(105.0, 100.0)], &[1.0], 1), ERROR_SCORE);
        assert!(eval.sampled_score(&[XY::new(120.0, 100.0)], &[1.0], 1) > 0.0);
    }
}

// ── Closeness and pillars ─────────────────────────────────────────────────────

#[cfg(test)]
mod extensions {
    use super::*;
    use crate::{ScoreEvaluator, closeness_factor};

    #[test]
    fn closeness_factor_same_instrument_only() {
        let problem = scenario_problem();
        let placements = scenario_placements();
        // Musicians 0 and 2 share instrument 0.
        let d = placements[0].distance(placements[2]);
        let q0 = closeness_factor(problem.roster(), &placements, MusicianId(0));
        assert!((q0 - (1.0 + 1.0 / d)).abs() < 1e-12);
        assert_eq!(closeness_factor(problem.roster(), &placements, MusicianId(1)), 1.0);
    }

    #[test]
    fn extensions_follow_pillars() {
        assert!(!ScoreEvaluator::new(&scenario_problem()).extensions());
        let far = Pillar { center: XY::new(1900.0, 4900.0), radius: 5.0 };
        let problem = scenario_with_pillars(vec![far]);
        let eval = ScoreEvaluator::new(&problem);
        assert!(eval.extensions());
        assert!(!eval.with_extensions(false).extensions());
    }

    #[test]
    fn closeness_raises_positive_scores() {
        let far = Pillar { center: XY::new(1900.0, 4900.0), radius: 5.0 };
        let problem = scenario_with_pillars(vec![far]);
        let placements = scenario_placements();
        let volumes = [1.0, 0.0, 1.0];
        let with = ScoreEvaluator::new(&problem).full_score(&placements, &volumes);
        let without = ScoreEvaluator::new(&problem)
            .with_extensions(false)
            .full_score(&placements, &volumes);
        assert!(with >= without);
    }

    #[test]
    fn pillar_blocks_line_of_sight() {
        // Pillar right above musician 2, between it and the listener at
        // (1100, 800).
        let wall = Pillar { center: XY::new(1100.0, 400.0), radius: 20.0 };
        let problem = scenario_with_pillars(vec![wall]);
        let eval = ScoreEvaluator::new(&problem);
        let placements = scenario_placements();
        assert!(eval.line_of_sight_blocked(&placements, XY::new(1100.0, 800.0), MusicianId(2)));
        assert!(
            !eval
                .with_extensions(false)
                .line_of_sight_blocked(&placements, XY::new(1100.0, 800.0), MusicianId(2))
        );
    }
}
