//! Straight ruler: ticks hang down from a horizontal baseline

use glam::Vec2;

use super::segment::{Segment, TickQueue};
use super::span::{Span, TickProfile, subdivide, ticks_per_span};
use crate::consts::{STRAIGHT_TICK_MAX, STRAIGHT_TICK_MIN};

pub const STRAIGHT_PROFILE: TickProfile = TickProfile::new(STRAIGHT_TICK_MIN, STRAIGHT_TICK_MAX);

/// Horizontal interval `[left, right]` on the line `y = baseline`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub left: f32,
    pub right: f32,
    pub baseline: f32,
}

impl Interval {
    pub const fn new(left: f32, right: f32, baseline: f32) -> Self {
        Self { left, right, baseline }
    }

    #[inline]
    pub fn center(&self) -> f32 {
        (self.left + self.right) / 2.0
    }
}

impl Span for Interval {
    fn split(&self) -> (Self, Self) {
        let mid = self.center();
        (
            Interval::new(self.left, mid, self.baseline),
            Interval::new(mid, self.right, self.baseline),
        )
    }

    fn tick(&self, length: f32) -> Segment {
        let x = self.center();
        Segment::new(Vec2::new(x, self.baseline), Vec2::new(x, self.baseline + length))
    }
}

/// Ticks for a straight ruler spanning `[left, right]` at height `baseline`
///
/// `depth` is at most `MAX_DEPTH` (checked in debug builds).
pub fn straight_ticks(left: f32, right: f32, baseline: f32, depth: u32) -> TickQueue {
    let mut out = TickQueue::with_capacity(ticks_per_span(depth));
    subdivide(&Interval::new(left, right, baseline), depth, depth, STRAIGHT_PROFILE, &mut out);
    out
}
