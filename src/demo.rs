//! The bouncing ball application
//!
//! Implements the lifecycle hooks: the ball is stepped on every tick and drawn
//! once per frame at its interpolated position. The viewport used for wall
//! collisions is captured while drawing, so ticks before the first frame run
//! without walls.

use glam::DVec2;

use crate::platform::{FrameContext, SimulationHooks};
use crate::renderer::{Camera, DrawList, colors};
use crate::sim::{Body, TickInput, ViewportBounds, step};

#[derive(Debug, Clone)]
pub struct BounceDemo {
    pub body: Body,
    pub camera: Camera,
    viewport: Option<ViewportBounds>,
    ticks: u64,
    wall_hits: u64,
}

impl Default for BounceDemo {
    fn default() -> Self {
        Self::new(Camera::default())
    }
}

impl BounceDemo {
    pub fn new(camera: Camera) -> Self {
        Self {
            body: Body::new(),
            camera,
            viewport: None,
            ticks: 0,
            wall_hits: 0,
        }
    }

    /// Bounds captured by the last draw, if any frame has been drawn
    pub fn viewport(&self) -> Option<ViewportBounds> {
        self.viewport
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Total wall contacts (a corner hit counts twice)
    pub fn wall_hits(&self) -> u64 {
        self.wall_hits
    }

    /// Where the ball is drawn for a given interpolation factor
    pub fn render_position(&self, interpolation: f64) -> DVec2 {
        self.body.render_position(interpolation)
    }
}

impl SimulationHooks for BounceDemo {
    fn on_ready(&mut self) {
        self.body = Body::new();
        self.viewport = None;
        self.ticks = 0;
        self.wall_hits = 0;
        log::info!("Ball ready at {} (radius {})", self.body.position, self.body.radius);
    }

    fn on_update(&mut self, input: &TickInput) {
        let contacts = step(&mut self.body, self.viewport, input);
        self.ticks += 1;

        if contacts.any() {
            self.wall_hits += u64::from(contacts.count());
            log::debug!(
                "Tick {}: wall hit {:?}, pos {:.2}, vel {:.3}",
                self.ticks,
                contacts,
                self.body.position,
                self.body.velocity
            );
        }
    }

    fn on_draw(&mut self, frame: &FrameContext, draw: &mut DrawList) {
        match self.camera.viewport(frame.target_size) {
            Some(bounds) => self.viewport = Some(bounds),
            None => log::debug!("Frame {}: empty render target, keeping old viewport", frame.frame),
        }

        draw.set_clear_color(colors::BACKGROUND);
        draw.fill_circle(
            self.body.render_position(frame.interpolation),
            self.body.radius,
            colors::BALL,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{FixedStepLoop, IdleInput, ScriptedInput};

    const TARGET: (u32, u32) = (400, 200);
    const DT: f64 = 1.0 / 60.0;

    #[test]
    fn test_first_frame_has_no_walls() {
        let mut demo = BounceDemo::new(Camera::new(100.0));
        let mut driver = FixedStepLoop::new(DT, 8);
        assert!(demo.viewport().is_none());
        driver.frame(&mut demo, &mut IdleInput, DT, TARGET);
        assert_eq!(demo.viewport(), Some(ViewportBounds::new(-50.0, 50.0, -100.0, 100.0)));
    }

    #[test]
    fn test_ball_settles_on_floor() {
        let mut demo = BounceDemo::new(Camera::new(100.0));
        let mut driver = FixedStepLoop::new(DT, 8);
        for _ in 0..3000 {
            driver.frame(&mut demo, &mut IdleInput, DT, TARGET);
        }
        assert_eq!(demo.body.position.y, 45.0);
        assert!(demo.body.velocity.y.abs() < 0.1);
        assert!(demo.wall_hits() > 0);
        assert_eq!(demo.ticks(), driver.total_ticks());
    }

    #[test]
    fn test_draws_ball_at_interpolated_position() {
        let mut demo = BounceDemo::new(Camera::new(100.0));
        let mut driver = FixedStepLoop::new(0.25, 8);

        driver.frame(&mut demo, &mut IdleInput, 0.25, TARGET);
        driver.frame(&mut demo, &mut IdleInput, 0.125, TARGET);

        let expected = demo.render_position(0.5).as_vec2();
        let center = driver.draw_list().vertices()[0].position;
        assert_eq!(center, [expected.x, expected.y]);
        assert_eq!(driver.draw_list().triangle_count(), 32);
    }

    #[test]
    fn test_frame_bytes_hold_ball_geometry() {
        let mut demo = BounceDemo::new(Camera::new(100.0));
        let mut driver = FixedStepLoop::new(DT, 8);
        driver.draw_list_mut().circle_segments = 12;
        driver.frame(&mut demo, &mut IdleInput, DT, TARGET);

        let bytes = driver.draw_list().as_bytes();
        assert_eq!(bytes.len(), 12 * 3 * 24);
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        let center = demo.render_position(0.0).as_vec2();
        assert_eq!(&floats[..2], &[center.x, center.y]);
        assert_eq!(&floats[2..6], &colors::BALL);
    }

    #[test]
    fn test_scripted_run_stays_in_view() {
        let mut demo = BounceDemo::new(Camera::new(100.0));
        let mut driver = FixedStepLoop::new(DT, 8);
        let mut input = ScriptedInput::new(3);
        for _ in 0..5000 {
            driver.frame(&mut demo, &mut input, DT / 2.0, TARGET);
            let bounds = demo.viewport().unwrap();
            assert!(bounds.contains_circle(demo.body.position, demo.body.radius));
        }
    }

    #[test]
    fn test_ready_resets_state() {
        let mut demo = BounceDemo::default();
        demo.body.velocity = DVec2::new(4.0, 4.0);
        demo.on_ready();
        assert_eq!(demo.body, Body::new());
        assert_eq!(demo.ticks(), 0);
    }
}
