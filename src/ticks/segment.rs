//! Tick segments and the ordered queue they are revealed from

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A single tick mark: a straight line from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Euclidean length of the tick
    #[inline]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Ticks in generation order, which is also the order they are drawn in.
///
/// Built once per draw action and drained front to back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TickQueue {
    segments: VecDeque<Segment>,
}

impl TickQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            segments: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a tick at the back
    #[inline]
    pub fn push(&mut self, segment: Segment) {
        self.segments.push_back(segment);
    }

    /// Take the next tick to reveal
    #[inline]
    pub fn pop_front(&mut self) -> Option<Segment> {
        self.segments.pop_front()
    }

    pub fn front(&self) -> Option<&Segment> {
        self.segments.front()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }
}

impl IntoIterator for TickQueue {
    type Item = Segment;
    type IntoIter = std::collections::vec_deque::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl FromIterator<Segment> for TickQueue {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x: f32) -> Segment {
        Segment::new(Vec2::new(x, 0.0), Vec2::new(x, 10.0))
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = TickQueue::new();
        queue.push(seg(1.0));
        queue.push(seg(2.0));
        queue.push(seg(3.0));

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop_front(), Some(seg(1.0)));
        assert_eq!(queue.pop_front(), Some(seg(2.0)));
        assert_eq!(queue.pop_front(), Some(seg(3.0)));
        assert!(queue.pop_front().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_segment_length() {
        let s = Segment::new(Vec2::ZERO, Vec2::new(3.0, 4.0));
        assert!((s.length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_queue_serializes_as_array() {
        let queue: TickQueue = [seg(5.0)].into_iter().collect();
        let json = serde_json::to_string(&queue).unwrap();
        assert!(json.starts_with('['));
        let back: TickQueue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, queue);
    }
}
