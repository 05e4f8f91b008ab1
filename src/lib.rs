//! Bounce Demo - a single ball bouncing inside the camera viewport
//!
//! Core modules:
//! - `sim`: Fixed-tick ball physics (impulses, gravity, friction, wall bounces)
//! - `platform`: Simulation hooks, fixed-step driver and input sources
//! - `renderer`: Camera viewport and CPU-side draw list
//! - `demo`: The bouncing ball application wired through the hooks
//! - `settings`: JSON configuration

pub mod demo;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use demo::BounceDemo;
pub use settings::Settings;

/// Simulation constants, tuned per fixed tick (not per second)
pub mod consts {
    /// Default fixed simulation rate
    pub const TICK_HZ: f64 = 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the driver will account for (seconds)
    pub const MAX_FRAME_DT: f64 = 0.1;

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 5.0;

    /// Vertical velocity set by the bounce action (negative is up)
    pub const BOUNCE_VELOCITY: f64 = -3.0;
    /// Horizontal velocity added per tick while a push is held
    pub const PUSH_ACCEL: f64 = 0.1;
    /// Downward velocity added per tick
    pub const GRAVITY: f64 = 0.1;
    /// Velocity scale applied every tick
    pub const FRICTION: f64 = 0.99;
    /// Fraction of speed kept after hitting a wall
    pub const RESTITUTION: f64 = 0.8;
}
