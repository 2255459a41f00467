//! Core types for the rasterizer

use serde::{Serialize, Deserialize};

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };
    pub const RED: Color = Color { r: 255, g: 0, b: 0, a: 255 };
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0, a: 255 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255, a: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque grey with all three color channels set to `level`
    pub const fn grey(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Apply shading (multiply by intensity 0.0-1.0)
    pub fn shade(self, intensity: f32) -> Self {
        let i = intensity.clamp(0.0, 1.0);
        Self {
            r: (self.r as f32 * i) as u8,
            g: (self.g as f32 * i) as u8,
            b: (self.b as f32 * i) as u8,
            a: self.a,
        }
    }

    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Anything the rasterizers can write pixels into.
///
/// `set` must accept any coordinate: points outside `[0, width) x [0, height)`
/// are dropped by the sink, never by the rasterizers.
pub trait PixelSink {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn set(&mut self, x: i32, y: i32, color: Color);
}

/// Triangle fill strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum FillMethod {
    /// Row-by-row interpolation between sorted vertices
    Scanline,
    /// Bounding-box walk with float barycentric coordinates
    Barycentric,
    /// Bounding-box walk with incrementally stepped integer edge functions
    #[default]
    EdgeFunction,
}

/// Which render passes to run per model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum RenderMode {
    #[default]
    Wireframe,
    Flat,
    /// Flat shading with the wireframe drawn on top
    Both,
}

impl RenderMode {
    pub fn draws_flat(self) -> bool {
        matches!(self, RenderMode::Flat | RenderMode::Both)
    }

    pub fn draws_wireframe(self) -> bool {
        matches!(self, RenderMode::Wireframe | RenderMode::Both)
    }
}
