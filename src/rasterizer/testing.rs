//! Test-only pixel sink that records every write

use std::collections::BTreeSet;

use super::math::Vec2i;
use super::types::{Color, PixelSink};

pub struct Recorder {
    pub width: usize,
    pub height: usize,
    pub writes: Vec<(i32, i32, Color)>,
}

impl Recorder {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            writes: Vec::new(),
        }
    }

    /// Distinct coordinates written so far
    pub fn pixels(&self) -> BTreeSet<(i32, i32)> {
        self.writes.iter().map(|&(x, y, _)| (x, y)).collect()
    }

    pub fn contains(&self, p: Vec2i) -> bool {
        self.writes.iter().any(|&(x, y, _)| x == p.x && y == p.y)
    }
}

impl PixelSink for Recorder {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn set(&mut self, x: i32, y: i32, color: Color) {
        self.writes.push((x, y, color));
    }
}
