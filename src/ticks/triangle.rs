//! Triangle ruler: each side is subdivided on its own
//!
//! Ticks leave a side along the perpendicular `(d.y, -d.x) / |d|` of its
//! direction `d = end - start`. With screen coordinates (y down) and the
//! vertex order used by the layout, that points into the triangle body.

use glam::Vec2;

use super::segment::{Segment, TickQueue};
use super::span::{Span, TickProfile, subdivide, ticks_per_span};
use crate::consts::{TRIANGLE_TICK_MAX, TRIANGLE_TICK_MIN};

pub const TRIANGLE_PROFILE: TickProfile = TickProfile::new(TRIANGLE_TICK_MIN, TRIANGLE_TICK_MAX);

/// One side of the triangle, from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Side {
    pub start: Vec2,
    pub end: Vec2,
}

impl Side {
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) / 2.0
    }

    /// Unit normal for ticks. Zero for a zero-length side.
    pub fn normal(&self) -> Vec2 {
        let d = self.end - self.start;
        Vec2::new(d.y, -d.x).normalize_or_zero()
    }
}

impl Span for Side {
    fn split(&self) -> (Self, Self) {
        let mid = self.midpoint();
        (Side::new(self.start, mid), Side::new(mid, self.end))
    }

    fn tick(&self, length: f32) -> Segment {
        let mid = self.midpoint();
        Segment::new(mid, mid + self.normal() * length)
    }
}

/// Ticks along a single side
///
/// `depth` is at most `MAX_DEPTH` (checked in debug builds).
pub fn triangle_side_ticks(start: Vec2, end: Vec2, depth: u32) -> TickQueue {
    let mut out = TickQueue::with_capacity(ticks_per_span(depth));
    subdivide(&Side::new(start, end), depth, depth, TRIANGLE_PROFILE, &mut out);
    out
}

/// Ticks for the whole triangle: sides `p1->p2`, `p2->p3`, `p3->p1` in that order
///
/// `depth` is at most `MAX_DEPTH` (checked in debug builds).
pub fn triangle_ticks(vertices: [Vec2; 3], depth: u32) -> TickQueue {
    let [p1, p2, p3] = vertices;
    let mut out = TickQueue::with_capacity(3 * ticks_per_span(depth));
    for side in [Side::new(p1, p2), Side::new(p2, p3), Side::new(p3, p1)] {
        subdivide(&side, depth, depth, TRIANGLE_PROFILE, &mut out);
    }
    out
}
