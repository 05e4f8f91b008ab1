//! Simulation state types
//!
//! The body is the only mutable state; the viewport is an external snapshot.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::BALL_RADIUS;

/// The simulated ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: DVec2,
    pub velocity: DVec2,
    pub radius: f64,
}

impl Default for Body {
    fn default() -> Self {
        Self::new()
    }
}

impl Body {
    /// A ball at rest at the origin
    pub fn new() -> Self {
        Self {
            position: DVec2::ZERO,
            velocity: DVec2::ZERO,
            radius: BALL_RADIUS,
        }
    }

    pub fn with_state(position: DVec2, velocity: DVec2) -> Self {
        Self {
            position,
            velocity,
            radius: BALL_RADIUS,
        }
    }

    /// Display-only position extrapolated `interpolation` ticks past the last step.
    ///
    /// Used to smooth motion when frames render faster than the tick rate.
    /// The result is never written back into the body.
    #[inline]
    pub fn render_position(&self, interpolation: f64) -> DVec2 {
        self.position + self.velocity * interpolation
    }
}

/// World-space rectangle visible through the camera, y-down (`top < bottom`)
///
/// Inverted or zero-area bounds are not rejected; a body inside them will
/// be clamped back and forth between the two edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportBounds {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl ViewportBounds {
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Bounds of the given size centered on `center`
    pub fn centered(center: DVec2, width: f64, height: f64) -> Self {
        let half = DVec2::new(width, height) * 0.5;
        Self {
            top: center.y - half.y,
            bottom: center.y + half.y,
            left: center.x - half.x,
            right: center.x + half.x,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Whether a circle lies fully inside (edges touching count as inside)
    pub fn contains_circle(&self, center: DVec2, radius: f64) -> bool {
        center.x - radius >= self.left
            && center.x + radius <= self.right
            && center.y - radius >= self.top
            && center.y + radius <= self.bottom
    }
}
