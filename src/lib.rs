//! tinyraster: minimal software 3D renderer
//!
//! Loads OBJ meshes, projects them orthographically and draws wireframe
//! edges or flat-shaded triangles into a framebuffer saved as an image.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod model;
pub mod rasterizer;
