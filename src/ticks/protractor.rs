//! Protractor: ticks run radially inward from a half-circle arc

use glam::Vec2;

use super::segment::{Segment, TickQueue};
use super::span::{Span, TickProfile, subdivide, ticks_per_span};
use crate::consts::{PROTRACTOR_TICK_MAX, PROTRACTOR_TICK_MIN};
use crate::screen_polar;

pub const PROTRACTOR_PROFILE: TickProfile =
    TickProfile::new(PROTRACTOR_TICK_MIN, PROTRACTOR_TICK_MAX);

/// Angular wedge `[start_deg, end_deg]` of an arc around `center`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub center: Vec2,
    pub radius: f32,
    pub start_deg: f32,
    pub end_deg: f32,
}

impl Wedge {
    pub const fn new(center: Vec2, radius: f32, start_deg: f32, end_deg: f32) -> Self {
        Self {
            center,
            radius,
            start_deg,
            end_deg,
        }
    }

    /// Upper half circle, 0 to 180 degrees
    pub const fn half_circle(center: Vec2, radius: f32) -> Self {
        Self::new(center, radius, 0.0, 180.0)
    }

    #[inline]
    pub fn bisector(&self) -> f32 {
        (self.start_deg + self.end_deg) / 2.0
    }
}

impl Span for Wedge {
    fn split(&self) -> (Self, Self) {
        let mid = self.bisector();
        (
            Wedge::new(self.center, self.radius, self.start_deg, mid),
            Wedge::new(self.center, self.radius, mid, self.end_deg),
        )
    }

    fn tick(&self, length: f32) -> Segment {
        let angle = self.bisector();
        Segment::new(
            screen_polar(self.center, self.radius, angle),
            screen_polar(self.center, self.radius - length, angle),
        )
    }
}

/// Ticks for a protractor of `radius` centered at `center`
///
/// `depth` is at most `MAX_DEPTH` (checked in debug builds).
pub fn protractor_ticks(center: Vec2, radius: f32, depth: u32) -> TickQueue {
    let mut out = TickQueue::with_capacity(ticks_per_span(depth));
    subdivide(&Wedge::half_circle(center, radius), depth, depth, PROTRACTOR_PROFILE, &mut out);
    out
}
