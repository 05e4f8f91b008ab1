//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Interleaved 2D vertex: two f32 position components then RGBA color.
///
/// `#[repr(C)]` and `Pod`, so a slice of these is a ready vertex buffer
/// (stride 24 bytes, color at offset 8).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub fn at(point: Vec2, color: [f32; 4]) -> Self {
        Self {
            position: point.to_array(),
            color,
        }
    }
}

/// Colors for demo elements
pub mod colors {
    pub const BALL: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
