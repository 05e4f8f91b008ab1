//! Boundary collision and response
//!
//! The ball bounces off the four viewport edges. Each axis is resolved on its
//! own, so a corner hit corrects both axes in the same tick.

use glam::DVec2;

use super::state::ViewportBounds;
use crate::consts::RESTITUTION;

/// Which walls were hit during one resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContacts {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl WallContacts {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }

    /// Number of walls hit (0..=2, at most one per axis)
    pub fn count(&self) -> u32 {
        [self.top, self.bottom, self.left, self.right]
            .iter()
            .filter(|&&hit| hit)
            .count() as u32
    }
}

/// Outcome of resolving one axis against a `[min, max]` interval
#[derive(Debug, Clone, Copy, PartialEq)]
enum AxisHit {
    Min,
    Max,
}

/// Clamp one coordinate into `[min + radius, max - radius]` and reflect its
/// velocity with restitution. The max edge is checked first; the min edge
/// only when the max edge was not crossed.
#[inline]
fn resolve_axis(pos: f64, vel: f64, radius: f64, min: f64, max: f64) -> (f64, f64, Option<AxisHit>) {
    if pos > max - radius {
        (max - radius, -vel * RESTITUTION, Some(AxisHit::Max))
    } else if pos < min + radius {
        (min + radius, -vel * RESTITUTION, Some(AxisHit::Min))
    } else {
        (pos, vel, None)
    }
}

/// Keep a circle inside the viewport, reflecting its velocity on contact.
///
/// Returns the corrected position and velocity along with the walls hit.
/// Degenerate bounds are not validated.
pub fn resolve_bounds(
    position: DVec2,
    velocity: DVec2,
    radius: f64,
    bounds: &ViewportBounds,
) -> (DVec2, DVec2, WallContacts) {
    let (py, vy, hit_y) = resolve_axis(position.y, velocity.y, radius, bounds.top, bounds.bottom);
    let (px, vx, hit_x) = resolve_axis(position.x, velocity.x, radius, bounds.left, bounds.right);

    let contacts = WallContacts {
        top: hit_y == Some(AxisHit::Min),
        bottom: hit_y == Some(AxisHit::Max),
        left: hit_x == Some(AxisHit::Min),
        right: hit_x == Some(AxisHit::Max),
    };

    (DVec2::new(px, py), DVec2::new(vx, vy), contacts)
}
