//! Platform abstraction layer
//!
//! Handles the host side of the simulation:
//! - Lifecycle hooks implemented by the application
//! - Fixed-step driver (ticks vs. frames)
//! - Input sources and edge detection

pub mod input;
pub mod time;

pub use input::{ActionTracker, ButtonLevels, IdleInput, InputSource, ScriptedInput};
pub use time::{FixedStepLoop, FrameReport};

use crate::renderer::DrawList;
use crate::sim::TickInput;

/// Per-frame information handed to the draw hook
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Frame index (0-based)
    pub frame: u64,
    /// Render target size in pixels
    pub target_size: (u32, u32),
    /// Fraction of a tick elapsed since the last simulated tick (0..=1)
    pub interpolation: f64,
}

/// Lifecycle hooks driven by [`FixedStepLoop`]
///
/// The driver owns the loop; the application only supplies behavior.
pub trait SimulationHooks {
    /// Called once, before the first frame
    fn on_ready(&mut self) {}

    /// Advance the application by one fixed tick.
    /// May run several times per frame, or not at all.
    fn on_update(&mut self, input: &TickInput);

    /// Produce the frame. Called exactly once per frame, after all ticks.
    fn on_draw(&mut self, frame: &FrameContext, draw: &mut DrawList);
}
