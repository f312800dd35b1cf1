//! Ruler Ticks - recursive tick generation for ruler-shaped drawings
//!
//! Core modules:
//! - `ticks`: Deterministic tick generation (midpoint subdivision per ruler shape)
//! - `params`: Parsing and validation of user input into frozen parameters
//! - `session`: Headless selection/input/drawing state machine with paced reveal
//! - `renderer`: Line-list vertex generation for ruler bodies and ticks
//! - `settings`: JSON-backed harness configuration

pub mod cli;
pub mod error;
pub mod params;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod ticks;

pub use error::{CliError, ConfigError, ParamError};
pub use params::{Anchor, GenerationParameters, Layout, RulerColor, ShapeKind};
pub use settings::Settings;
pub use ticks::{Segment, TickQueue, generate};

use glam::Vec2;

/// Tool configuration constants
pub mod consts {
    /// Screen dimensions used by the default layout
    pub const SCREEN_WIDTH: f32 = 1200.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    /// Inclusive upper bounds for user parameters
    pub const MAX_LENGTH: u32 = 1000;
    pub const MAX_DEPTH: u32 = 10;

    /// Straight ruler body height (pixels)
    pub const STRAIGHT_BODY_HEIGHT: f32 = 80.0;
    /// Triangle sides are capped so the shape stays on screen
    pub const TRIANGLE_MAX_SIDE: f32 = 600.0;
    /// Protractor center sits this far above the bottom edge
    pub const PROTRACTOR_BOTTOM_MARGIN: f32 = 150.0;

    /// Tick length ranges (min, max) per ruler shape
    pub const STRAIGHT_TICK_MIN: f32 = 15.0;
    pub const STRAIGHT_TICK_MAX: f32 = 60.0;
    pub const TRIANGLE_TICK_MIN: f32 = 10.0;
    pub const TRIANGLE_TICK_MAX: f32 = 40.0;
    pub const PROTRACTOR_TICK_MIN: f32 = 20.0;
    pub const PROTRACTOR_TICK_MAX: f32 = 60.0;

    /// Delay between revealed ticks (milliseconds)
    pub const REVEAL_DELAY_MS: u64 = 25;
}

/// Point on a circle in screen space (y grows downward, angles counter-clockwise in degrees)
#[inline]
pub fn screen_polar(center: Vec2, radius: f32, degrees: f32) -> Vec2 {
    let theta = degrees.to_radians();
    Vec2::new(center.x + radius * theta.cos(), center.y - radius * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_polar_flips_y() {
        let p = screen_polar(Vec2::new(100.0, 100.0), 10.0, 90.0);
        assert!((p.x - 100.0).abs() < 1e-4);
        assert!((p.y - 90.0).abs() < 1e-4);

        let p = screen_polar(Vec2::ZERO, 10.0, 0.0);
        assert!((p - Vec2::new(10.0, 0.0)).length() < 1e-4);
    }
}
