//! Static-world orthographic camera
//!
//! The visible world height never changes; the width follows the render
//! target's aspect ratio. World space is y-down, so `top < bottom`.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::sim::ViewportBounds;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Visible world height in world units
    pub world_height: f64,
    /// World point shown at the center of the target
    pub center: DVec2,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(200.0)
    }
}

impl Camera {
    pub fn new(world_height: f64) -> Self {
        Self {
            world_height,
            center: DVec2::ZERO,
        }
    }

    /// Visible world rectangle for a render target, `None` for an empty target
    pub fn viewport(&self, target_size: (u32, u32)) -> Option<ViewportBounds> {
        let (width, height) = target_size;
        if width == 0 || height == 0 {
            return None;
        }
        let aspect = f64::from(width) / f64::from(height);
        Some(ViewportBounds::centered(
            self.center,
            self.world_height * aspect,
            self.world_height,
        ))
    }
}
