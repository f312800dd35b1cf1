//! Deterministic tick generation
//!
//! Pure functions of their inputs: no I/O, no shared state, no randomness.
//! Each ruler shape provides a [`Span`] and the shared [`subdivide`]
//! recursion does the rest.

pub mod protractor;
pub mod segment;
pub mod span;
pub mod straight;
pub mod triangle;

pub use protractor::{Wedge, protractor_ticks};
pub use segment::{Segment, TickQueue};
pub use span::{Span, TickProfile, subdivide, ticks_per_span};
pub use straight::{Interval, straight_ticks};
pub use triangle::{Side, triangle_side_ticks, triangle_ticks};

use crate::params::{Anchor, GenerationParameters};

/// Build the full tick queue for validated parameters
pub fn generate(params: &GenerationParameters) -> TickQueue {
    let depth = params.depth();
    let queue = match params.anchor() {
        Anchor::Baseline { left, right, y } => straight_ticks(left, right, y, depth),
        Anchor::Triangle { vertices } => triangle_ticks(vertices, depth),
        Anchor::Arc { center, radius } => protractor_ticks(center, radius, depth),
    };
    log::debug!(
        "Generated {} ticks for {} ruler (L={}, h={})",
        queue.len(),
        params.shape().as_str(),
        params.length(),
        depth
    );
    queue
}
