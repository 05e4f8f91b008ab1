//! Per-frame draw list

use glam::DVec2;

use super::shapes;
use super::vertex::{Vertex, colors};

/// Default circle tessellation
pub const CIRCLE_SEGMENTS: u32 = 32;

/// Triangles to draw this frame plus the clear color
#[derive(Debug, Clone)]
pub struct DrawList {
    pub clear_color: [f32; 4],
    pub circle_segments: u32,
    vertices: Vec<Vertex>,
}

impl Default for DrawList {
    fn default() -> Self {
        Self {
            clear_color: colors::BACKGROUND,
            circle_segments: CIRCLE_SEGMENTS,
            vertices: Vec::new(),
        }
    }
}

impl DrawList {
    /// Drop all geometry, keep the buffer
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn set_clear_color(&mut self, color: [f32; 4]) {
        self.clear_color = color;
    }

    pub fn fill_circle(&mut self, center: DVec2, radius: f64, color: [f32; 4]) {
        self.vertices.extend(shapes::circle(
            shapes::to_render_space(center),
            radius as f32,
            color,
            self.circle_segments,
        ));
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Interleaved vertex bytes (see [`Vertex`] for the layout)
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}
