//! Paced reveal of a tick queue
//!
//! Timestamps come from the caller (milliseconds, monotonic), so pacing is
//! deterministic and testable without a clock.

use serde::{Deserialize, Serialize};

use crate::ticks::{Segment, TickQueue};

/// Result of advancing the reveal
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealStep {
    /// Delay not elapsed yet
    Waiting,
    /// One tick moved to the drawn list
    Revealed(Segment),
    /// Queue was already empty when the delay elapsed
    Finished,
}

/// Moves ticks from a pending queue to a drawn list, one per delay
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Reveal {
    pending: TickQueue,
    drawn: Vec<Segment>,
    delay_ms: u64,
    last_reveal_ms: u64,
}

impl Reveal {
    pub fn new(pending: TickQueue, delay_ms: u64) -> Self {
        Self {
            drawn: Vec::with_capacity(pending.len()),
            pending,
            delay_ms,
            last_reveal_ms: 0,
        }
    }

    /// Reveal at most one tick if strictly more than the delay has passed
    /// since the previous one.
    pub fn advance(&mut self, now_ms: u64) -> RevealStep {
        if now_ms.saturating_sub(self.last_reveal_ms) <= self.delay_ms {
            return RevealStep::Waiting;
        }

        match self.pending.pop_front() {
            Some(segment) => {
                self.drawn.push(segment);
                self.last_reveal_ms = now_ms;
                RevealStep::Revealed(segment)
            }
            None => RevealStep::Finished,
        }
    }

    /// Ticks revealed so far, in reveal order
    pub fn drawn(&self) -> &[Segment] {
        &self.drawn
    }

    pub fn pending(&self) -> &TickQueue {
        &self.pending
    }

    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }
}
