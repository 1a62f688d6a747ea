//! R-tree point index for minimum-separation queries.
//!
//! The verifier asks "which points lie strictly closer than `r` to `p`?" for
//! every musician against every listener and every other musician.  A
//! bulk-loaded R-tree turns that from O(M·A) into roughly O(M log A).

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use sp_core::XY;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// A 2-D point plus the index it was inserted with.
#[derive(Clone)]
struct PointEntry {
    point: [f64; 2],
    id:    u32,
}

impl RTreeObject for PointEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for PointEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── PointIndex ────────────────────────────────────────────────────────────────

/// Immutable spatial index over a list of points.
///
/// Ids are the points' positions in the input sequence.
pub struct PointIndex {
    tree: RTree<PointEntry>,
}

impl PointIndex {
    /// Bulk-load the index.  O(N log N).
    pub fn build<I>(points: I) -> Self
    where
        I: IntoIterator<Item = XY>,
    {
        let entries: Vec<PointEntry> = points
            .into_iter()
            .enumerate()
            .map(|(i, p)| PointEntry { point: [p.x, p.y], id: i as u32 })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Ids of all points strictly closer than `radius` to `p`, ascending.
    pub fn within(&self, p: XY, radius: f64) -> Vec<u32> {
        let query = [p.x, p.y];
        let r2 = radius * radius;
        let mut ids: Vec<u32> = self
            .tree
            .locate_within_distance(query, r2)
            .filter(|e| e.distance_2(&query) < r2)
            .map(|e| e.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// `true` if any point lies strictly closer than `radius` to `p`.
    pub fn any_within(&self, p: XY, radius: f64) -> bool {
        let query = [p.x, p.y];
        let r2 = radius * radius;
        self.tree
            .locate_within_distance(query, r2)
            .any(|e| e.distance_2(&query) < r2)
    }
}
