//! Demo settings
//!
//! Loaded from a JSON file; every field has a default so partial files work.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SUBSTEPS, TICK_HZ};
use crate::renderer::draw::CIRCLE_SEGMENTS;

/// Demo settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Project name, used as the window title
    pub project_name: String,

    // === Simulation ===
    /// Fixed ticks per second
    pub tick_hz: f64,
    /// Cap on ticks per frame
    pub max_substeps: u32,

    // === View ===
    /// Visible world height
    pub world_height: f64,
    /// Render target size in pixels
    pub target_width: u32,
    pub target_height: u32,
    /// Circle tessellation
    pub circle_segments: u32,

    // === Headless run ===
    /// Frames per second of the headless run
    pub render_hz: f64,
    /// Number of frames to run
    pub frames: u64,
    /// Drive the ball with seeded random input instead of idling
    pub scripted_input: bool,
    /// Seed for scripted input
    pub seed: u64,
    /// Write a per-frame JSON trace here
    pub trace_path: Option<String>,
    /// Write the last frame's raw vertex buffer here
    pub frame_dump_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_name: "Bounce Demo".to_string(),

            tick_hz: TICK_HZ,
            max_substeps: MAX_SUBSTEPS,

            world_height: 200.0,
            target_width: 1280,
            target_height: 720,
            circle_segments: CIRCLE_SEGMENTS,

            render_hz: 144.0,
            frames: 1440,
            scripted_input: true,
            seed: 12345,
            trace_path: None,
            frame_dump_path: None,
        }
    }
}

impl Settings {
    /// Length of one fixed tick in seconds
    pub fn sim_dt(&self) -> f64 {
        1.0 / self.tick_hz
    }

    /// Length of one headless frame in seconds
    pub fn frame_dt(&self) -> f64 {
        1.0 / self.render_hz
    }

    pub fn target_size(&self) -> (u32, u32) {
        (self.target_width, self.target_height)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read {}: {}, using default settings", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace non-positive rates with defaults
    fn sanitize(&mut self) {
        let defaults = Self::default();
        if !(self.tick_hz > 0.0) {
            log::warn!("tick_hz must be positive, got {}", self.tick_hz);
            self.tick_hz = defaults.tick_hz;
        }
        if !(self.render_hz > 0.0) {
            log::warn!("render_hz must be positive, got {}", self.render_hz);
            self.render_hz = defaults.render_hz;
        }
        if self.max_substeps == 0 {
            self.max_substeps = 1;
        }
    }
}
