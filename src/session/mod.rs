//! Headless harness around the tick generator
//!
//! Mirrors the tool's screens without any windowing:
//! - Selection: shape and color
//! - Input: length and depth text fields, validated on commit
//! - Drawing: one tick revealed per delay
//! - Done: until the user resets

pub mod reveal;
pub mod state;

pub use reveal::{Reveal, RevealStep};
pub use state::{Field, Phase, Session, SessionEvent};
