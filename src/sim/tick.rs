//! Fixed timestep simulation tick
//!
//! Advances the ball by exactly one tick. The constants in `consts` are tuned
//! per tick, so callers must never scale them by elapsed time.

use glam::DVec2;

use super::collision::{WallContacts, resolve_bounds};
use super::state::{Body, ViewportBounds};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Bounce (edge-triggered: only on the tick after the press)
    pub bounce: bool,
    /// Push right (held)
    pub push_right: bool,
    /// Push left (held)
    pub push_left: bool,
}

/// Advance the body by one fixed tick.
///
/// Order matters: impulses, gravity, friction, integration, then wall
/// resolution. Without bounds the wall pass is skipped and no contacts are
/// reported.
pub fn step(body: &mut Body, bounds: Option<ViewportBounds>, input: &TickInput) -> WallContacts {
    let mut velocity = body.velocity;

    if input.bounce {
        velocity = velocity.with_y(BOUNCE_VELOCITY);
    }
    if input.push_right {
        velocity += DVec2::new(PUSH_ACCEL, 0.0);
    }
    if input.push_left {
        velocity -= DVec2::new(PUSH_ACCEL, 0.0);
    }

    velocity += DVec2::new(0.0, GRAVITY);
    velocity *= FRICTION;

    let position = body.position + velocity;

    let Some(bounds) = bounds else {
        body.position = position;
        body.velocity = velocity;
        return WallContacts::none();
    };

    let (position, velocity, contacts) = resolve_bounds(position, velocity, body.radius, &bounds);
    body.position = position;
    body.velocity = velocity;
    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square() -> Option<ViewportBounds> {
        Some(ViewportBounds::new(0.0, 100.0, 0.0, 100.0))
    }

    #[test]
    fn test_free_fall_from_rest() {
        let mut body = Body::new();
        let contacts = step(&mut body, None, &TickInput::default());
        assert!(!contacts.any());
        assert_eq!(body.velocity, DVec2::new(0.0, 0.1 * 0.99));
        assert_eq!(body.position, body.velocity);
    }

    #[test]
    fn test_bounce_overwrites_vertical_velocity() {
        let mut body = Body::with_state(DVec2::new(10.0, 10.0), DVec2::new(0.0, 7.5));
        let input = TickInput {
            bounce: true,
            ..Default::default()
        };
        step(&mut body, None, &input);
        assert_eq!(body.velocity.y, (-3.0 + 0.1) * 0.99);
        assert!((body.velocity.y - -2.871).abs() < 1e-12);
    }

    #[test]
    fn test_push_accumulates_horizontal_velocity() {
        let mut body = Body::new();
        let input = TickInput {
            push_right: true,
            ..Default::default()
        };
        step(&mut body, None, &input);
        assert_eq!(body.velocity.x, 0.1 * 0.99);
        step(&mut body, None, &input);
        assert_eq!(body.velocity.x, (0.1 * 0.99 + 0.1) * 0.99);
    }

    #[test]
    fn test_opposing_pushes_cancel() {
        let mut body = Body::with_state(DVec2::ZERO, DVec2::new(2.0, 0.0));
        let input = TickInput {
            push_right: true,
            push_left: true,
            ..Default::default()
        };
        step(&mut body, None, &input);
        assert!((body.velocity.x - 2.0 * 0.99).abs() < 1e-12);
    }

    #[test]
    fn test_floor_collision_clamps_and_reflects() {
        let mut body = Body::with_state(DVec2::new(50.0, 94.0), DVec2::new(0.0, 3.0));
        let contacts = step(&mut body, square(), &TickInput::default());
        let pre_clamp = (3.0 + 0.1) * 0.99;
        assert!(contacts.bottom);
        assert_eq!(body.position.y, 95.0);
        assert_eq!(body.velocity.y, -pre_clamp * 0.8);
    }

    #[test]
    fn test_corner_collision_same_step() {
        let mut body = Body::with_state(DVec2::new(94.0, 94.0), DVec2::new(3.0, 3.0));
        let contacts = step(&mut body, square(), &TickInput::default());
        assert!(contacts.right && contacts.bottom);
        assert_eq!(body.position, DVec2::new(95.0, 95.0));
        assert!(body.velocity.x < 0.0);
        assert!(body.velocity.y < 0.0);
    }

    #[test]
    fn test_no_bounds_skips_walls() {
        let mut body = Body::with_state(DVec2::new(500.0, 500.0), DVec2::new(1.0, 1.0));
        let contacts = step(&mut body, None, &TickInput::default());
        assert!(!contacts.any());
        assert!(body.position.x > 500.0);
    }

    #[test]
    fn test_resting_on_floor_stays_bounded() {
        let mut body = Body::with_state(DVec2::new(50.0, 95.0), DVec2::ZERO);
        for _ in 0..5000 {
            step(&mut body, square(), &TickInput::default());
            assert!(body.velocity.y.abs() < 0.1);
            assert!(body.position.y <= 95.0);
        }
        assert_eq!(body.position.y, 95.0);
    }

    #[test]
    fn test_ball_settles_after_drop() {
        let mut body = Body::with_state(DVec2::new(50.0, 10.0), DVec2::ZERO);
        for _ in 0..2000 {
            step(&mut body, square(), &TickInput::default());
        }
        assert_eq!(body.position.y, 95.0);
        assert!(body.velocity.y.abs() < 0.1);
    }

    proptest! {
        #[test]
        fn prop_unbounded_step_matches_formula(
            px in -1000.0f64..1000.0,
            py in -1000.0f64..1000.0,
            vx in -50.0f64..50.0,
            vy in -50.0f64..50.0,
        ) {
            let mut body = Body::with_state(DVec2::new(px, py), DVec2::new(vx, vy));
            step(&mut body, None, &TickInput::default());
            let expected_vel = (DVec2::new(vx, vy) + DVec2::new(0.0, 0.1)) * 0.99;
            prop_assert_eq!(body.velocity, expected_vel);
            prop_assert_eq!(body.position, DVec2::new(px, py) + expected_vel);
        }

        #[test]
        fn prop_bounded_step_stays_inside(
            px in 5.0f64..95.0,
            py in 5.0f64..95.0,
            vx in -20.0f64..20.0,
            vy in -20.0f64..20.0,
            bounce in any::<bool>(),
            push_right in any::<bool>(),
            push_left in any::<bool>(),
        ) {
            let mut body = Body::with_state(DVec2::new(px, py), DVec2::new(vx, vy));
            let input = TickInput { bounce, push_right, push_left };
            step(&mut body, square(), &input);
            prop_assert!(body.position.x >= 5.0 && body.position.x <= 95.0);
            prop_assert!(body.position.y >= 5.0 && body.position.y <= 95.0);
        }

        #[test]
        fn prop_wall_hit_scales_speed(
            py in 90.0f64..95.0,
            vy in 6.0f64..30.0,
        ) {
            let mut body = Body::with_state(DVec2::new(50.0, py), DVec2::new(0.0, vy));
            let pre_clamp = (vy + 0.1) * 0.99;
            let contacts = step(&mut body, square(), &TickInput::default());
            prop_assert!(contacts.bottom);
            prop_assert_eq!(body.velocity.y, -pre_clamp * 0.8);
            prop_assert_eq!(body.position.y, 95.0);
        }
    }
}
