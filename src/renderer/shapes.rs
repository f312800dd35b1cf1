//! Line-list generation for ruler bodies and ticks

use glam::Vec2;

use super::vertex::{LineVertex, colors, rgba};
use crate::consts::STRAIGHT_BODY_HEIGHT;
use crate::params::{Anchor, RulerColor};
use crate::screen_polar;
use crate::ticks::Segment;

/// Offset of the drop shadow behind the ruler body (pixels)
pub const SHADOW_OFFSET: Vec2 = Vec2::new(10.0, 10.0);
/// Shadow darkening factor applied to the ruler color
pub const SHADOW_DARKEN: f64 = 0.8;

fn push_line(out: &mut Vec<LineVertex>, a: Vec2, b: Vec2, color: [f32; 4]) {
    out.push(LineVertex::new(a.x, a.y, color));
    out.push(LineVertex::new(b.x, b.y, color));
}

/// Vertices for revealed ticks
pub fn tick_lines(segments: &[Segment]) -> Vec<LineVertex> {
    let mut vertices = Vec::with_capacity(segments.len() * 2);
    for s in segments {
        push_line(&mut vertices, s.start, s.end, colors::TICK);
    }
    vertices
}

/// Closed outline of the ruler body, shifted by `offset`
pub fn outline(anchor: &Anchor, offset: Vec2, color: [f32; 4]) -> Vec<LineVertex> {
    let mut vertices = Vec::new();

    match *anchor {
        Anchor::Baseline { left, right, y } => {
            let tl = Vec2::new(left, y) + offset;
            let tr = Vec2::new(right, y) + offset;
            let br = Vec2::new(right, y + STRAIGHT_BODY_HEIGHT) + offset;
            let bl = Vec2::new(left, y + STRAIGHT_BODY_HEIGHT) + offset;
            for (a, b) in [(tl, tr), (tr, br), (br, bl), (bl, tl)] {
                push_line(&mut vertices, a, b, color);
            }
        }
        Anchor::Triangle { vertices: [p1, p2, p3] } => {
            for (a, b) in [(p1, p2), (p2, p3), (p3, p1)] {
                push_line(&mut vertices, a + offset, b + offset, color);
            }
        }
        Anchor::Arc { center, radius } => {
            // One line per degree along the arc, then the diameter
            let center = center + offset;
            vertices.reserve(181 * 2);
            for deg in 0..180 {
                let a = screen_polar(center, radius, deg as f32);
                let b = screen_polar(center, radius, (deg + 1) as f32);
                push_line(&mut vertices, a, b, color);
            }
            push_line(
                &mut vertices,
                center - Vec2::new(radius, 0.0),
                center + Vec2::new(radius, 0.0),
                color,
            );
        }
    }

    vertices
}

/// Shadow and outline for the ruler body, shadow first
pub fn ruler_body(anchor: &Anchor, color: RulerColor) -> Vec<LineVertex> {
    let shadow = rgba(color.darken(SHADOW_DARKEN), 1.0);
    let mut vertices = outline(anchor, SHADOW_OFFSET, shadow);
    vertices.extend(outline(anchor, Vec2::ZERO, colors::OUTLINE));
    vertices
}

/// Everything for one frame: ruler body, then ticks revealed so far
pub fn frame(anchor: &Anchor, color: RulerColor, drawn: &[Segment]) -> Vec<LineVertex> {
    let mut vertices = ruler_body(anchor, color);
    vertices.extend(tick_lines(drawn));
    vertices
}
