//! Unit tests for sp-spatial.

#[cfg(test)]
mod helpers {
    use sp_core::{Stage, XY};

    /// Stage 1000 × 200 at (500, 0): a 99 × 19 grid.
    pub fn wide_stage() -> Stage {
        Stage::new(XY::new(500.0, 0.0), XY::new(1000.0, 200.0)).unwrap()
    }
}

// ── SpatialGrid ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use std::collections::HashSet;

    use sp_core::{SolveRng, Stage, XY};

    use crate::{Cell, SpatialError, SpatialGrid};

    #[test]
    fn dimensions_from_stage() {
        let grid = SpatialGrid::new(&super::helpers::wide_stage()).unwrap();
        assert_eq!(grid.columns(), 99);
        assert_eq!(grid.rows(), 19);
        assert_eq!(grid.cell_count(), 99 * 19);
        assert_eq!(grid.points().len(), 99 * 19);
    }

    #[test]
    fn stage_too_small_is_fatal() {
        let stage = Stage::new(XY::new(0.0, 0.0), XY::new(19.9, 500.0)).unwrap();
        assert!(matches!(
            SpatialGrid::new(&stage),
            Err(SpatialError::StageTooSmall { .. })
        ));
    }

    #[test]
    fn smallest_usable_stage_has_one_cell() {
        let stage = Stage::new(XY::new(3.0, 4.0), XY::new(20.0, 20.0)).unwrap();
        let grid = SpatialGrid::new(&stage).unwrap();
        assert_eq!(grid.cell_count(), 1);
        assert_eq!(grid.to_xy(Cell::new(0, 0)), XY::new(13.0, 14.0));
    }

    #[test]
    fn cell_centers_respect_margin() {
        let stage = super::helpers::wide_stage();
        let grid = SpatialGrid::new(&stage).unwrap();
        assert_eq!(grid.to_xy(Cell::new(0, 0)), XY::new(510.0, 10.0));
        assert_eq!(grid.to_xy(Cell::new(98, 18)), XY::new(1490.0, 190.0));
        for &cell in grid.points() {
            assert!(stage.contains_inset(grid.to_xy(cell), 10.0));
        }
    }

    #[test]
    fn xy_bijection() {
        // Fractional offset exercises the rounding in from_xy.
        let stage = Stage::new(XY::new(0.1, 123.456), XY::new(333.3, 77.7)).unwrap();
        let grid = SpatialGrid::new(&stage).unwrap();
        for column in 0..grid.columns() {
            for row in 0..grid.rows() {
                let cell = Cell::new(column, row);
                assert_eq!(grid.cell_at(grid.to_xy(cell)), Some(cell));
            }
        }
    }

    #[test]
    fn out_of_bounds_probe() {
        let grid = SpatialGrid::new(&super::helpers::wide_stage()).unwrap();
        assert_eq!(grid.from_xy(XY::new(500.0, 10.0)), (-1, 0));
        assert_eq!(grid.cell_at(XY::new(500.0, 10.0)), None);
        assert_eq!(grid.cell_at(XY::new(1500.0, 10.0)), None);
        assert!(!grid.contains(0, 19));
        assert!(grid.contains(98, 18));
    }

    #[test]
    fn occupancy_set_get_reset() {
        let mut grid = SpatialGrid::new(&super::helpers::wide_stage()).unwrap();
        let a = Cell::new(3, 4);
        let b = Cell::new(4, 3);
        grid.set(a, true);
        assert!(grid.is_occupied(a));
        assert!(!grid.is_occupied(b));
        assert_eq!(grid.occupied_count(), 1);
        grid.set(b, true);
        grid.set(a, false);
        assert_eq!(grid.occupied_count(), 1);
        grid.reset();
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn shuffle_keeps_every_cell_once() {
        let mut grid = SpatialGrid::new(&super::helpers::wide_stage()).unwrap();
        let before: HashSet<Cell> = grid.points().iter().copied().collect();
        let mut rng = SolveRng::new(99);
        grid.shuffle_points(&mut rng);
        let after: HashSet<Cell> = grid.points().iter().copied().collect();
        assert_eq!(before, after);
        assert_eq!(grid.points().len(), before.len());
    }
}

// ── Blocking ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod blocking {
    use sp_core::XY;

    use crate::is_blocked;

    #[test]
    fn blocker_on_segment() {
        let u = XY::new(0.0, 0.0);
        let v = XY::new(100.0, 0.0);
        assert!(is_blocked(u, v, XY::new(50.0, 4.0), 5.0));
        assert!(!is_blocked(u, v, XY::new(50.0, 6.0), 5.0));
    }

    #[test]
    fn tangent_is_not_blocked() {
        let u = XY::new(0.0, 0.0);
        let v = XY::new(100.0, 0.0);
        assert!(!is_blocked(u, v, XY::new(50.0, 5.0), 5.0));
    }

    #[test]
    fn blocker_beyond_endpoint_is_rejected_by_bbox() {
        let u = XY::new(0.0, 0.0);
        let v = XY::new(100.0, 0.0);
        // On the infinite line, but far past `v`.
        assert!(!is_blocked(u, v, XY::new(200.0, 0.0), 5.0));
        assert!(!is_blocked(u, v, XY::new(-50.0, 1.0), 5.0));
    }

    #[test]
    fn symmetric_in_endpoints() {
        let pts = [
            XY::new(0.0, 0.0),
            XY::new(30.0, 70.0),
            XY::new(-40.0, 10.0),
            XY::new(15.0, 35.0),
            XY::new(100.0, -20.0),
        ];
        for &u in &pts {
            for &v in &pts {
                for &b in &pts {
                    for r in [1.0, 5.0, 12.0, 40.0] {
                        assert_eq!(is_blocked(u, v, b, r), is_blocked(v, u, b, r));
                    }
                }
            }
        }
    }

    #[test]
    fn monotone_in_radius() {
        let u = XY::new(0.0, 0.0);
        let v = XY::new(200.0, 120.0);
        for bx in (-50..=250).step_by(25) {
            for by in (-50..=170).step_by(20) {
                let b = XY::new(bx as f64, by as f64);
                let mut was_blocked = false;
                for r in 1..60 {
                    let now = is_blocked(u, v, b, r as f64);
                    assert!(now || !was_blocked, "unblocked at r={r} for {b}");
                    was_blocked = now;
                }
            }
        }
    }
}

// ── PointIndex ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod index {
    use sp_core::XY;

    use crate::PointIndex;

    #[test]
    fn empty_index() {
        let idx = PointIndex::build(std::iter::empty());
        assert!(idx.is_empty());
        assert!(idx.within(XY::new(0.0, 0.0), 100.0).is_empty());
    }

    #[test]
    fn strictly_within_radius() {
        let idx = PointIndex::build([
            XY::new(0.0, 0.0),
            XY::new(10.0, 0.0),
            XY::new(9.0, 0.0),
            XY::new(50.0, 50.0),
        ]);
        assert_eq!(idx.len(), 4);
        // Point 1 sits exactly on the radius and is excluded.
        assert_eq!(idx.within(XY::new(0.0, 0.0), 10.0), vec![0, 2]);
        assert!(idx.any_within(XY::new(45.0, 45.0), 10.0));
        assert!(!idx.any_within(XY::new(30.0, 30.0), 10.0));
    }
}
