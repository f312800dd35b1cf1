//! User-facing ruler parameters
//!
//! Text input is parsed and range-checked here before any generation runs.
//! Once built, [`GenerationParameters`] is frozen: the generator trusts it.

use std::num::IntErrorKind;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ParamError;

/// Ruler geometry to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ShapeKind {
    #[default]
    Straight,
    Triangle,
    Protractor,
}

impl ShapeKind {
    /// Selection order on screen
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Straight, ShapeKind::Triangle, ShapeKind::Protractor];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Straight => "Straight",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Protractor => "Protractor",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ParamError> {
        match s.trim().to_lowercase().as_str() {
            "straight" => Ok(ShapeKind::Straight),
            "triangle" => Ok(ShapeKind::Triangle),
            "protractor" => Ok(ShapeKind::Protractor),
            _ => Err(ParamError::UnknownShape(s.to_string())),
        }
    }
}

/// Ruler body color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RulerColor {
    #[default]
    Yellow,
    Blue,
    Green,
    Red,
}

impl RulerColor {
    pub const ALL: [RulerColor; 4] = [
        RulerColor::Yellow,
        RulerColor::Blue,
        RulerColor::Green,
        RulerColor::Red,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RulerColor::Yellow => "Yellow",
            RulerColor::Blue => "Blue",
            RulerColor::Green => "Green",
            RulerColor::Red => "Red",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ParamError> {
        match s.trim().to_lowercase().as_str() {
            "yellow" => Ok(RulerColor::Yellow),
            "blue" => Ok(RulerColor::Blue),
            "green" => Ok(RulerColor::Green),
            "red" => Ok(RulerColor::Red),
            _ => Err(ParamError::UnknownColor(s.to_string())),
        }
    }

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            RulerColor::Yellow => [255, 204, 0],
            RulerColor::Blue => [100, 149, 237],
            RulerColor::Green => [119, 172, 48],
            RulerColor::Red => [210, 43, 43],
        }
    }

    /// Shadow shade: every channel scaled by `factor` (0.8 in the UI)
    pub fn darken(&self, factor: f64) -> [u8; 3] {
        self.rgb().map(|c| (c as f64 * factor).max(0.0) as u8)
    }

    /// Unselected shade: every channel blended toward gray 180 by `amount` (0.6 in the UI)
    pub fn fade(&self, amount: f64) -> [u8; 3] {
        const GRAY: f64 = 180.0;
        self.rgb().map(|c| (c as f64 * (1.0 - amount) + GRAY * amount) as u8)
    }
}

/// Shape-specific geometry the generator works from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Anchor {
    /// Straight ruler top edge from `left` to `right` at height `y`
    Baseline { left: f32, right: f32, y: f32 },
    /// Triangle corners, sides taken in order p1->p2->p3->p1
    Triangle { vertices: [Vec2; 3] },
    /// Protractor arc (upper half circle)
    Arc { center: Vec2, radius: f32 },
}

impl Anchor {
    pub fn shape(&self) -> ShapeKind {
        match self {
            Anchor::Baseline { .. } => ShapeKind::Straight,
            Anchor::Triangle { .. } => ShapeKind::Triangle,
            Anchor::Arc { .. } => ShapeKind::Protractor,
        }
    }

    /// Reject spans of zero extent
    pub fn validate(&self) -> Result<(), ParamError> {
        match *self {
            Anchor::Baseline { left, right, .. } => {
                if right <= left {
                    return Err(ParamError::Degenerate("baseline has no length"));
                }
            }
            Anchor::Triangle { vertices: [p1, p2, p3] } => {
                if p1 == p2 || p2 == p3 || p3 == p1 {
                    return Err(ParamError::Degenerate("triangle has coincident vertices"));
                }
            }
            Anchor::Arc { radius, .. } => {
                if radius <= 0.0 {
                    return Err(ParamError::Degenerate("protractor radius must be positive"));
                }
            }
        }
        Ok(())
    }
}

/// Screen area the rulers are laid out in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

impl Layout {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Centered placement of a ruler of total length `length`
    pub fn anchor_for(&self, shape: ShapeKind, length: u32) -> Anchor {
        let (w, h) = (self.width, self.height);
        let length = length as f32;
        match shape {
            ShapeKind::Straight => {
                let left = (w - length) / 2.0;
                Anchor::Baseline {
                    left,
                    right: left + length,
                    y: (h - STRAIGHT_BODY_HEIGHT) / 2.0,
                }
            }
            ShapeKind::Triangle => {
                let side = length.min(TRIANGLE_MAX_SIDE);
                let bottom = (h + side) / 2.0;
                Anchor::Triangle {
                    vertices: [
                        Vec2::new((w - side) / 2.0, bottom),
                        Vec2::new((w + side) / 2.0, bottom),
                        Vec2::new((w - side) / 2.0, bottom - side),
                    ],
                }
            }
            ShapeKind::Protractor => Anchor::Arc {
                center: Vec2::new(w / 2.0, h - PROTRACTOR_BOTTOM_MARGIN),
                radius: length / 2.0,
            },
        }
    }
}

/// Validated, frozen inputs for one draw action
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationParameters {
    shape: ShapeKind,
    length: u32,
    depth: u32,
    anchor: Anchor,
}

impl GenerationParameters {
    /// Validate numeric parameters and lay the shape out on `layout`
    pub fn new(shape: ShapeKind, length: u32, depth: u32, layout: &Layout) -> Result<Self, ParamError> {
        check_length(length as i64)?;
        check_depth(depth as i64)?;
        Self::with_anchor(length, depth, layout.anchor_for(shape, length))
    }

    /// Validate with caller-supplied geometry. The shape follows the anchor.
    pub fn with_anchor(length: u32, depth: u32, anchor: Anchor) -> Result<Self, ParamError> {
        check_length(length as i64)?;
        check_depth(depth as i64)?;
        anchor.validate()?;
        Ok(Self {
            shape: anchor.shape(),
            length,
            depth,
            anchor,
        })
    }

    /// Parse the raw text fields the user typed.
    ///
    /// Both fields must be integers before either range is checked; length is
    /// checked before depth.
    pub fn parse(
        shape: ShapeKind,
        length_text: &str,
        depth_text: &str,
        layout: &Layout,
    ) -> Result<Self, ParamError> {
        let length = parse_int(length_text)?;
        let depth = parse_int(depth_text)?;
        let length = check_length(length)?;
        let depth = check_depth(depth)?;
        Self::new(shape, length, depth, layout)
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Exact number of ticks these parameters produce
    pub fn segment_count(&self) -> usize {
        let per_span = crate::ticks::ticks_per_span(self.depth);
        match self.shape {
            ShapeKind::Triangle => 3 * per_span,
            ShapeKind::Straight | ShapeKind::Protractor => per_span,
        }
    }
}

/// Integers too large for `i64` saturate so they fail the range check, not the parse
fn parse_int(text: &str) -> Result<i64, ParamError> {
    match text.trim().parse::<i64>() {
        Ok(value) => Ok(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(ParamError::NotANumber),
        },
    }
}

fn check_length(length: i64) -> Result<u32, ParamError> {
    if length > 0 && length <= MAX_LENGTH as i64 {
        Ok(length as u32)
    } else {
        Err(ParamError::LengthOutOfRange(length))
    }
}

fn check_depth(depth: i64) -> Result<u32, ParamError> {
    if depth > 0 && depth <= MAX_DEPTH as i64 {
        Ok(depth as u32)
    } else {
        Err(ParamError::DepthOutOfRange(depth))
    }
}
