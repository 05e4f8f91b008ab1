//! CPU-side rendering
//!
//! Builds triangle lists a GPU host can upload as-is. No window or GPU
//! context is created here.

pub mod camera;
pub mod draw;
pub mod shapes;
pub mod vertex;

pub use camera::Camera;
pub use draw::DrawList;
pub use vertex::{Vertex, colors};
