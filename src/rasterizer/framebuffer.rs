//! Framebuffer for software rendering and its image-file writer

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use log::info;
use thiserror::Error;

use super::types::{Color, PixelSink};

#[derive(Error, Debug)]
pub enum FramebufferError {
    #[error("unsupported output format for {0} (expected .tga, .png or .bmp)")]
    UnsupportedFormat(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("encode error: {0}")]
    Encode(#[from] image::ImageError),
}

/// RGBA pixel grid, row 0 at the bottom of the written image
pub struct Framebuffer {
    pub pixels: Vec<u8>, // RGBA, 4 bytes per pixel
    pub width: usize,
    pub height: usize,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height * 4],
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize * self.width + x as usize) * 4)
    }

    /// Color at (x, y), or `None` outside the image
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        let idx = self.index(x, y)?;
        let p = &self.pixels[idx..idx + 4];
        Some(Color::with_alpha(p[0], p[1], p[2], p[3]))
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_bytes());
        }
    }

    /// Number of pixels currently holding `color`
    pub fn count(&self, color: Color) -> usize {
        let bytes = color.to_bytes();
        self.pixels.chunks_exact(4).filter(|p| *p == bytes).count()
    }

    /// Encode to `path`, picking the format from the file extension.
    ///
    /// Rows are flipped so that y grows upward in the written image.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), FramebufferError> {
        let path = path.as_ref();
        let format = match ImageFormat::from_path(path) {
            Ok(f @ (ImageFormat::Tga | ImageFormat::Png | ImageFormat::Bmp)) => f,
            _ => return Err(FramebufferError::UnsupportedFormat(path.display().to_string())),
        };

        let flipped = RgbaImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let idx = ((self.height - 1 - y as usize) * self.width + x as usize) * 4;
            let p = &self.pixels[idx..idx + 4];
            Rgba([p[0], p[1], p[2], p[3]])
        });

        let mut out = BufWriter::new(File::create(path)?);
        flipped.write_to(&mut out, format)?;
        out.flush()?;

        info!("wrote {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

impl PixelSink for Framebuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn set(&mut self, x: i32, y: i32, color: Color) {
        self.set_pixel(x, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut fb = Framebuffer::new(4, 3);
        fb.set(1, 2, Color::RED);
        assert_eq!(fb.get(1, 2), Some(Color::RED));
        assert_eq!(fb.get(2, 1), Some(Color::with_alpha(0, 0, 0, 0)));
    }

    #[test]
    fn test_out_of_range_set_is_ignored() {
        let mut fb = Framebuffer::new(4, 3);
        fb.set(-1, 0, Color::WHITE);
        fb.set(0, -1, Color::WHITE);
        fb.set(4, 0, Color::WHITE);
        fb.set(0, 3, Color::WHITE);
        assert_eq!(fb.count(Color::WHITE), 0);
        assert_eq!(fb.get(4, 0), None);
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(5, 5);
        fb.clear(Color::BLUE);
        assert_eq!(fb.count(Color::BLUE), 25);
    }

    #[test]
    fn test_save_rejects_unknown_extension() {
        let fb = Framebuffer::new(2, 2);
        let path = std::env::temp_dir().join("tinyraster_test_output.xyz");
        assert!(matches!(fb.save(&path), Err(FramebufferError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_save_into_missing_directory_is_io_error() {
        let fb = Framebuffer::new(2, 2);
        let path = std::env::temp_dir().join("tinyraster_no_such_dir").join("out.png");
        assert!(matches!(fb.save(&path), Err(FramebufferError::Io(_))));
    }

    #[test]
    fn test_save_tga_and_bmp() {
        let mut fb = Framebuffer::new(3, 2);
        fb.clear(Color::BLUE);
        fb.set(2, 1, Color::GREEN);
        for ext in ["tga", "bmp"] {
            let path = std::env::temp_dir().join(format!("tinyraster_save_{}.{}", std::process::id(), ext));
            fb.save(&path).unwrap();
            let img = image::open(&path).unwrap().to_rgba8();
            let _ = std::fs::remove_file(&path);
            assert_eq!(img.dimensions(), (3, 2), "{}", ext);
            assert_eq!(img.get_pixel(2, 0).0[..3], Color::GREEN.to_bytes()[..3], "{}", ext);
            assert_eq!(img.get_pixel(0, 1).0[..3], Color::BLUE.to_bytes()[..3], "{}", ext);
        }
    }

    #[test]
    fn test_save_png_flips_rows() {
        let mut fb = Framebuffer::new(2, 2);
        fb.clear(Color::BLACK);
        fb.set(0, 0, Color::RED);
        let path = std::env::temp_dir().join(format!("tinyraster_flip_{}.png", std::process::id()));
        fb.save(&path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        let _ = std::fs::remove_file(&path);
        assert_eq!(img.get_pixel(0, 1).0, Color::RED.to_bytes());
        assert_eq!(img.get_pixel(0, 0).0, Color::BLACK.to_bytes());
    }
}
