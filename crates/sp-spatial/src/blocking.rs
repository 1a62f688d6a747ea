//! Line-of-sight obstruction by circular blockers.
//!
//! # Two-stage test
//!
//! 1. The blocker center must lie inside the segment's bounding box grown by
//!    the blocker radius.  Cheap, and it confines the second stage to the
//!    neighbourhood of the segment.
//! 2. Distance from the blocker center to the infinite line through the
//!    segment, compared squared to avoid a `sqrt`:
//!
//! ```text
//! n = dx·(u.y − b.y) − dy·(u.x − b.x)
//! blocked  ⇔  n² < r²·(dx² + dy²)
//! ```
//!
//! A blocker sitting just past an endpoint, inside the grown box but off the
//! segment, can still register as blocking.  With a 5-unit musician radius
//! and 10-unit minimum separation this never changes a score, and pillars
//! never sit close enough to the stage for it to matter.

use sp_core::XY;

/// Radius with which a musician obstructs the view of other musicians.
pub const MUSICIAN_BLOCKING_RADIUS: f64 = 5.0;

/// `true` if a circle of `radius` at `blocker` intersects segment `u`–`v`.
#[inline]
pub fn is_blocked(u: XY, v: XY, blocker: XY, radius: f64) -> bool {
    blocker.within_padded_bbox(u, v, radius) && within_radius(u, v, blocker, radius)
}

#[inline]
fn within_radius(u: XY, v: XY, b: XY, r: f64) -> bool {
    let dx = v.x - u.x;
    let dy = v.y - u.y;
    let n = dx * (u.y - b.y) - dy * (u.x - b.x);
    n * n < r * r * (dx * dx + dy * dy)
}
