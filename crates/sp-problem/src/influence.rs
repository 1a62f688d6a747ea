//! Listener influence bounds.
//!
//! For each listener, imagine the whole roster concentrated on one probe
//! point of the stage and sum `1e6 · count · |taste| / d²` over instruments.
//! Sweeping the probe over a 10-unit lattice of the stage gives the
//! `[min, max]` a listener's contribution can plausibly take.  Listeners
//! whose bounds are wide are the ones worth sampling during search.
//!
//! Probes at zero distance or hidden behind a pillar are skipped.  A
//! listener with fewer than two distinct probe values gets `[0, 0]`.

use sp_core::{MUSICIAN_MARGIN, Stage, XY};

use crate::problem::{Listener, Pillar, blocked_by_any};

const PROBE_STEP: f64 = 10.0;

/// Lattice of probe points, at least 2 × 2, anchored at the stage's
/// bottom-left corner and spanning the margin-reduced width and height.
///
/// The lattice is not centred: it reaches the bottom and left edges but stops
/// `2 · margin` short of the top and right ones, so listeners beyond the
/// bottom-left see slightly larger bounds than those beyond the top-right.
/// Sampling ranks listeners by these bounds.
pub fn probe_points(stage: &Stage) -> Vec<XY> {
    let width  = stage.size.x - 2.0 * MUSICIAN_MARGIN;
    let height = stage.size.y - 2.0 * MUSICIAN_MARGIN;
    let x_res = ((width / PROBE_STEP) as i64).max(2) as usize;
    let y_res = ((height / PROBE_STEP) as i64).max(2) as usize;
    let origin = stage.bottom_left;

    let mut probe = Vec::with_capacity(x_res * y_res);
    for y in 0..y_res {
        let py = origin.y + (y as f64 * height) / (y_res - 1) as f64;
        for x in 0..x_res {
            let px = origin.x + (x as f64 * width) / (x_res - 1) as f64;
            probe.push(XY::new(px, py));
        }
    }
    probe
}

/// `(min, max)` influence of one listener over `probe`.
pub fn listener_influence(
    listener:          &Listener,
    probe:             &[XY],
    pillars:           &[Pillar],
    instrument_counts: &[u32],
) -> (f64, f64) {
    let mut max_influence = 0.0f64;
    let mut min_influence = f64::INFINITY;
    for &p in probe {
        let d2 = listener.position.distance_sq(p);
        if d2 <= 0.0 || blocked_by_any(pillars, listener.position, p) {
            continue;
        }
        let influence: f64 = instrument_counts
            .iter()
            .zip(&listener.tastes)
            .map(|(&count, taste)| 1e6 * count as f64 * taste.abs() / d2)
            .sum();
        max_influence = max_influence.max(influence);
        min_influence = min_influence.min(influence);
    }
    if min_influence < max_influence {
        (min_influence, max_influence)
    } else {
        (0.0, 0.0)
    }
}

/// Fill `min_influence` / `max_influence` on every listener.
pub(crate) fn compute_influences(
    listeners:         &mut [Listener],
    stage:             &Stage,
    pillars:           &[Pillar],
    instrument_counts: &[u32],
) {
    let probe = probe_points(stage);

    let fill = |l: &mut Listener| {
        let (min, max) = listener_influence(l, &probe, pillars, instrument_counts);
        l.min_influence = min;
        l.max_influence = max;
    };

    #[cfg(not(feature = "parallel"))]
    listeners.iter_mut().for_each(fill);

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        listeners.par_iter_mut().for_each(fill);
    }
}
