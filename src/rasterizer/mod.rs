//! Software rasterizer
//!
//! Features:
//! - Integer Bresenham lines
//! - Three selectable triangle fills (scanline, barycentric, edge function)
//! - Orthographic projection and flat Lambert shading
//!
//! All writes go through `PixelSink`, which owns the bounds check.

mod math;
mod types;
mod framebuffer;
mod line;
mod triangle;
mod render;
#[cfg(test)]
mod testing;

pub use math::*;
pub use types::*;
pub use framebuffer::*;
pub use line::*;
pub use triangle::*;
pub use render::*;
