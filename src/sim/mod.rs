//! Fixed-tick ball simulation
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - One unit step per tick, no wall-clock scaling
//! - Value-typed vector updates
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{WallContacts, resolve_bounds};
pub use state::{Body, ViewportBounds};
pub use tick::{TickInput, step};
