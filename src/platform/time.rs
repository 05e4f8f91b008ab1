//! Fixed-update / variable-render driver
//!
//! Frame time fills an accumulator that is drained in whole ticks. Whatever
//! is left over becomes the interpolation factor for the draw hook.

use super::input::{ActionTracker, InputSource};
use super::{FrameContext, SimulationHooks};
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, TICK_HZ};
use crate::renderer::DrawList;
use crate::sim::TickInput;

/// What happened during one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub frame: u64,
    /// Ticks simulated this frame
    pub ticks: u32,
    /// Interpolation factor passed to the draw hook
    pub interpolation: f64,
}

/// Drives [`SimulationHooks`] with a fixed tick rate
#[derive(Debug)]
pub struct FixedStepLoop {
    sim_dt: f64,
    max_substeps: u32,
    accumulator: f64,
    tracker: ActionTracker,
    /// Input waiting for the next tick; one-shot actions stay latched here
    /// until a tick consumes them
    pending: TickInput,
    draw: DrawList,
    frame: u64,
    total_ticks: u64,
    ready: bool,
}

impl Default for FixedStepLoop {
    fn default() -> Self {
        Self::new(1.0 / TICK_HZ, MAX_SUBSTEPS)
    }
}

impl FixedStepLoop {
    /// A non-positive or non-finite `sim_dt` falls back to the default tick rate
    pub fn new(sim_dt: f64, max_substeps: u32) -> Self {
        let sim_dt = if sim_dt.is_finite() && sim_dt > 0.0 {
            sim_dt
        } else {
            log::warn!("Invalid tick length {}, using {} Hz", sim_dt, TICK_HZ);
            1.0 / TICK_HZ
        };
        Self {
            sim_dt,
            max_substeps: max_substeps.max(1),
            accumulator: 0.0,
            tracker: ActionTracker::new(),
            pending: TickInput::default(),
            draw: DrawList::default(),
            frame: 0,
            total_ticks: 0,
            ready: false,
        }
    }

    pub fn sim_dt(&self) -> f64 {
        self.sim_dt
    }

    pub fn frames(&self) -> u64 {
        self.frame
    }

    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Draw list produced by the most recent frame
    pub fn draw_list(&self) -> &DrawList {
        &self.draw
    }

    pub fn draw_list_mut(&mut self) -> &mut DrawList {
        &mut self.draw
    }

    /// Run one frame: sample input, simulate whole ticks, draw once.
    ///
    /// `frame_dt` is real elapsed time in seconds, clamped to `MAX_FRAME_DT`.
    /// When the substep cap is hit the backlog is dropped down to one tick,
    /// so the simulation slows down instead of fast-forwarding later.
    pub fn frame<H, I>(
        &mut self,
        hooks: &mut H,
        input: &mut I,
        frame_dt: f64,
        target_size: (u32, u32),
    ) -> FrameReport
    where
        H: SimulationHooks + ?Sized,
        I: InputSource + ?Sized,
    {
        if !self.ready {
            hooks.on_ready();
            self.ready = true;
        }

        let actions = self.tracker.update(input.sample(self.frame));
        self.pending.bounce |= actions.bounce;
        self.pending.push_right = actions.push_right;
        self.pending.push_left = actions.push_left;

        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut ticks = 0;
        while self.accumulator >= self.sim_dt && ticks < self.max_substeps {
            hooks.on_update(&self.pending);
            self.accumulator -= self.sim_dt;
            ticks += 1;

            // Clear one-shot inputs after processing
            self.pending.bounce = false;
        }
        self.total_ticks += u64::from(ticks);

        if ticks == self.max_substeps && self.accumulator >= self.sim_dt {
            log::debug!(
                "Frame {} hit the substep cap, dropping {:.4}s of backlog",
                self.frame,
                self.accumulator - self.sim_dt
            );
            self.accumulator = self.accumulator.min(self.sim_dt);
        }

        let interpolation = (self.accumulator / self.sim_dt).clamp(0.0, 1.0);
        let context = FrameContext {
            frame: self.frame,
            target_size,
            interpolation,
        };
        self.draw.clear();
        hooks.on_draw(&context, &mut self.draw);

        let report = FrameReport {
            frame: self.frame,
            ticks,
            interpolation,
        };
        self.frame += 1;
        report
    }
}
