//! Full and sampled scoring.

use sp_core::{ERROR_SCORE, MUSICIAN_MARGIN, MusicianId, XY};
use sp_problem::Problem;
use sp_spatial::{MUSICIAN_BLOCKING_RADIUS, is_blocked};

use crate::closeness_factor;

/// Scores placements against one problem.
///
/// Cheap to construct and `Copy`; holds only a problem reference and the
/// extension switch.
#[derive(Copy, Clone)]
pub struct ScoreEvaluator<'p> {
    problem:    &'p Problem,
    /// Closeness bonus and pillar blocking.
    extensions: bool,
}

impl<'p> ScoreEvaluator<'p> {
    /// Evaluator using the problem's own rules: extensions are active iff
    /// the problem has at least one pillar.
    pub fn new(problem: &'p Problem) -> Self {
        Self { problem, extensions: problem.uses_closeness_extension() }
    }

    /// Override the extension switch (closeness bonus and pillar blocking).
    pub fn with_extensions(mut self, active: bool) -> Self {
        self.extensions = active;
        self
    }

    #[inline]
    pub fn problem(&self) -> &'p Problem {
        self.problem
    }

    #[inline]
    pub fn extensions(&self) -> bool {
        self.extensions
    }

    // ── Line of sight ─────────────────────────────────────────────────────

    /// `true` if another musician or (with extensions) a pillar obstructs
    /// the line from `source` to musician `target`.
    #[inline]
    pub fn line_of_sight_blocked(&self, placements: &[XY], source: XY, target: MusicianId) -> bool {
        let t = target.index();
        let target_pos = placements[t];
        let by_musician = placements
            .iter()
            .enumerate()
            .any(|(b, &pos)| b != t && is_blocked(source, target_pos, pos, MUSICIAN_BLOCKING_RADIUS));
        by_musician || (self.extensions && self.problem.blocked_by_pillar(source, target_pos))
    }

    #[inline]
    fn closeness(&self, placements: &[XY], m: MusicianId) -> f64 {
        if self.extensions {
            closeness_factor(self.problem.roster(), placements, m)
        } else {
            1.0
        }
    }

    // ── Scores ────────────────────────────────────────────────────────────

    /// Score over every listener.  Performs no legality checks.
    pub fn full_score(&self, placements: &[XY], volumes: &[f64]) -> f64 {
        let roster = self.problem.roster();
        let mut score = 0.0;
        for (i, &musician) in placements.iter().enumerate() {
            if volumes[i] == 0.0 {
                continue;
            }
            let id = MusicianId(i as u32);
            let q = volumes[i] * self.closeness(placements, id);
            let instrument = roster.instrument(id);
            for listener in self.problem.listeners() {
                let d2 = musician.distance_sq(listener.position);
                if d2 <= 0.0 || self.line_of_sight_blocked(placements, listener.position, id) {
                    continue;
                }
                score += pair_score(listener.taste(instrument), d2, q);
            }
        }
        score
    }

    /// Score over the first `limit` listeners.
    ///
    /// Returns [`ERROR_SCORE`] if any musician is off the inset stage or
    /// closer than the minimum separation to a sampled listener.
    pub fn sampled_score(&self, placements: &[XY], volumes: &[f64], limit: usize) -> f64 {
        let roster = self.problem.roster();
        let stage = self.problem.stage();
        let listeners = &self.problem.listeners()[..limit.min(self.problem.listeners().len())];
        let min_d2 = MUSICIAN_MARGIN * MUSICIAN_MARGIN;

        let mut score = 0.0;
        for (i, &musician) in placements.iter().enumerate() {
            if !stage.contains_inset(musician, MUSICIAN_MARGIN) {
                return ERROR_SCORE;
            }
            let id = MusicianId(i as u32);
            let volume = volumes[i];
            let q = if volume == 0.0 { 0.0 } else { volume * self.closeness(placements, id) };
            let instrument = roster.instrument(id);
            for listener in listeners {
                let d2 = musician.distance_sq(listener.position);
                if d2 < min_d2 {
                    return ERROR_SCORE;
                }
                if volume == 0.0 || self.line_of_sight_blocked(placements, listener.position, id) {
                    continue;
                }
                score += pair_score(listener.taste(instrument), d2, q);
            }
        }
        score
    }

    /// Unblocked contribution of musician `m` at full volume (10), over all
    /// listeners.
    ///
    /// Folding the volume into the factor before the outer `ceil` keeps the
    /// sign exact for contributions that round to zero at volume 1.
    pub fn full_volume_contribution(&self, placements: &[XY], m: MusicianId) -> f64 {
        let musician = placements[m.index()];
        let q = 10.0 * self.closeness(placements, m);
        let instrument = self.problem.roster().instrument(m);
        self.problem
            .listeners()
            .iter()
            .filter_map(|listener| {
                let d2 = musician.distance_sq(listener.position);
                if d2 <= 0.0 || self.line_of_sight_blocked(placements, listener.position, m) {
                    return None;
                }
                Some(pair_score(listener.taste(instrument), d2, q))
            })
            .sum()
    }
}

/// `ceil(ceil(1e6 · taste / d²) · q)`.
///
/// The order of the two `ceil`s is part of the scoring rule.
#[inline(always)]
fn pair_score(taste: f64, d2: f64, q: f64) -> f64 {
    ((1e6 * taste / d2).ceil() * q).ceil()
}
