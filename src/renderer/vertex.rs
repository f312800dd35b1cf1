//! Vertex types for 2D line rendering

use bytemuck::{Pod, Zeroable};

/// Line-list vertex with position and color. Every two vertices form one line.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl LineVertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Raw bytes of a vertex slice, ready for a GPU buffer upload
pub fn as_bytes(vertices: &[LineVertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// 8-bit RGB to normalized RGBA
pub fn rgba(rgb: [u8; 3], alpha: f32) -> [f32; 4] {
    [
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
        alpha,
    ]
}

/// Colors for tool elements
pub mod colors {
    pub const TICK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const OUTLINE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<LineVertex>(), 24);
        let verts = [LineVertex::new(1.0, 2.0, colors::TICK); 2];
        assert_eq!(as_bytes(&verts).len(), 48);
    }

    #[test]
    fn test_rgba() {
        assert_eq!(rgba([255, 0, 255], 0.5), [1.0, 0.0, 1.0, 0.5]);
    }
}
