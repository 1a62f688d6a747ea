//! Planar coordinates and stage geometry.
//!
//! Everything is `f64`: scores sum millions of `1e6 · taste / d²` terms and
//! single precision visibly shifts the nested `ceil` results.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Minimum distance between a musician and the stage edge, another
/// musician, or a listener.
pub const MUSICIAN_MARGIN: f64 = 10.0;

// ── XY ────────────────────────────────────────────────────────────────────────

/// A point in room coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XY {
    pub x: f64,
    pub y: f64,
}

impl XY {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance_sq(self, other: XY) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn distance(self, other: XY) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// `true` if `self` lies inside the axis-aligned box spanned by `a` and
    /// `b`, inflated by `pad` on every side.
    #[inline]
    pub fn within_padded_bbox(self, a: XY, b: XY, pad: f64) -> bool {
        self.x >= a.x.min(b.x) - pad
            && self.x <= a.x.max(b.x) + pad
            && self.y >= a.y.min(b.y) - pad
            && self.y <= a.y.max(b.y) + pad
    }
}

impl std::ops::Add for XY {
    type Output = XY;
    #[inline]
    fn add(self, rhs: XY) -> XY {
        XY::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for XY {
    type Output = XY;
    #[inline]
    fn sub(self, rhs: XY) -> XY {
        XY::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for XY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Stage ─────────────────────────────────────────────────────────────────────

/// The rectangular stage musicians are confined to.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stage {
    pub bottom_left: XY,
    pub size: XY,
}

impl Stage {
    /// Build a stage, rejecting non-finite or non-positive sizes.
    pub fn new(bottom_left: XY, size: XY) -> CoreResult<Self> {
        if !bottom_left.x.is_finite() || !bottom_left.y.is_finite() {
            return Err(CoreError::NotFinite { what: "stage bottom-left" });
        }
        for (what, value) in [("stage width", size.x), ("stage height", size.y)] {
            if !value.is_finite() {
                return Err(CoreError::NotFinite { what });
            }
            if value <= 0.0 {
                return Err(CoreError::NonPositive { what, value });
            }
        }
        Ok(Self { bottom_left, size })
    }

    #[inline]
    pub fn top_right(&self) -> XY {
        self.bottom_left + self.size
    }

    /// Lower-left and upper-right corners of the stage shrunk by `margin`.
    #[inline]
    pub fn inset_bounds(&self, margin: f64) -> (XY, XY) {
        let pad = XY::new(margin, margin);
        (self.bottom_left + pad, self.top_right() - pad)
    }

    /// `true` if `p` is on the stage at least `margin` away from every edge.
    #[inline]
    pub fn contains_inset(&self, p: XY, margin: f64) -> bool {
        let (lo, hi) = self.inset_bounds(margin);
        p.x >= lo.x && p.x <= hi.x && p.y >= lo.y && p.y <= hi.y
    }
}
