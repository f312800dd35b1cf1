//! Shared midpoint subdivision
//!
//! Every ruler shape is a span that can be split at its midpoint and can
//! produce a tick there. The recursion is the same for all of them:
//! - emit the midpoint tick first (pre-order)
//! - then the left half, then the right half, one level shallower
//!
//! A call with `level = h` yields a complete binary tree of `2^h - 1` ticks.

use super::segment::{Segment, TickQueue};
use crate::consts::MAX_DEPTH;

/// Tick length range for one ruler shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickProfile {
    /// Length of the deepest (finest) ticks
    pub min: f32,
    /// Length of the top-level tick
    pub max: f32,
}

impl TickProfile {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Tick length for a span at `level` out of `total` levels.
    ///
    /// `level == total` gives `max`, `level == 1` gives `min`. A single-level
    /// ruler has no ratio to interpolate and always uses `max`.
    pub fn length_at(&self, level: u32, total: u32) -> f32 {
        if total > 1 {
            let ratio = level.saturating_sub(1) as f32 / (total - 1) as f32;
            self.min + ratio * (self.max - self.min)
        } else {
            self.max
        }
    }
}

/// A region that can be subdivided at its midpoint
pub trait Span: Sized {
    /// The two halves either side of the midpoint, in traversal order
    fn split(&self) -> (Self, Self);

    /// The tick at the midpoint with the given length
    fn tick(&self, length: f32) -> Segment;
}

/// Append the ticks for `span` to `out` in pre-order.
///
/// `total` is the depth of the top-level call and never changes while
/// recursing; it only feeds the length interpolation.
pub fn subdivide<S: Span>(span: &S, level: u32, total: u32, profile: TickProfile, out: &mut TickQueue) {
    if level == 0 {
        return;
    }

    out.push(span.tick(profile.length_at(level, total)));

    let (left, right) = span.split();
    subdivide(&left, level - 1, total, profile, out);
    subdivide(&right, level - 1, total, profile, out);
}

/// Number of ticks one span yields at `depth`.
///
/// `depth` must not exceed `MAX_DEPTH`; validated parameters guarantee it.
#[inline]
pub const fn ticks_per_span(depth: u32) -> usize {
    debug_assert!(depth <= MAX_DEPTH, "tick depth above MAX_DEPTH");
    (1usize << depth) - 1
}
