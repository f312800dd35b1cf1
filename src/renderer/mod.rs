//! Rendering primitives
//!
//! Produces line-list vertices only; presenting them is left to the host
//! (GPU pipeline, canvas, or software rasterizer).

pub mod shapes;
pub mod vertex;

pub use vertex::LineVertex;
