//! Shape generation for 2D primitives

use glam::{DVec2, Vec2};
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Filled circle as a triangle list, one wedge per rim segment
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let step = TAU / segments as f32;
    let rim: Vec<Vec2> = (0..=segments)
        .map(|i| center + Vec2::from_angle(i as f32 * step) * radius)
        .collect();

    rim.windows(2)
        .flat_map(|edge| {
            [
                Vertex::at(center, color),
                Vertex::at(edge[0], color),
                Vertex::at(edge[1], color),
            ]
        })
        .collect()
}

/// Simulation coordinates are f64; vertices are f32
#[inline]
pub fn to_render_space(pos: DVec2) -> Vec2 {
    pos.as_vec2()
}
