//! Render settings loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-readable config files.
//! Every field has a default, so a config file only needs the fields it changes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::rasterizer::{Color, FillMethod, RenderMode, Vec3f};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    /// Output image; the extension picks the encoder
    pub output: PathBuf,
    pub mode: RenderMode,
    pub fill: FillMethod,
    /// Direction light travels, normalized before use
    pub light_dir: Vec3f,
    pub wire_color: Color,
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            output: PathBuf::from("framebuffer.tga"),
            mode: RenderMode::Wireframe,
            fill: FillMethod::EdgeFunction,
            light_dir: Vec3f::new(0.0, 0.0, -1.0),
            wire_color: Color::WHITE,
            background: Color::BLACK,
        }
    }
}

/// Largest framebuffer accepted, in bytes (RGBA8)
pub const MAX_FRAMEBUFFER_BYTES: usize = 1 << 30;

impl RenderConfig {
    /// Checked once the final settings are known, after any command-line overrides.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(ConfigError::Invalid("image size exceeds i32 screen coordinates".to_string()));
        }
        let bytes = self.width.checked_mul(self.height).and_then(|n| n.checked_mul(4));
        if !bytes.is_some_and(|n| n <= MAX_FRAMEBUFFER_BYTES) {
            return Err(ConfigError::Invalid(format!(
                "{}x{} framebuffer exceeds {} bytes",
                self.width, self.height, MAX_FRAMEBUFFER_BYTES
            )));
        }
        if self.mode.draws_flat() && self.light_dir.norm() == 0.0 {
            return Err(ConfigError::Invalid("light_dir must not be the zero vector".to_string()));
        }
        Ok(())
    }
}

/// Load a config from a RON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RenderConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents)
}

/// Load a config from a RON string; call `validate` once overrides are applied
pub fn load_config_from_str(s: &str) -> Result<RenderConfig, ConfigError> {
    Ok(ron::from_str(s)?)
}

pub fn config_to_string(config: &RenderConfig) -> Result<String, ConfigError> {
    let pretty = ron::ser::PrettyConfig::new()
        .depth_limit(3)
        .indentor("  ".to_string());
    Ok(ron::ser::to_string_pretty(config, pretty)?)
}

/// Save a config to a RON file
pub fn save_config<P: AsRef<Path>>(config: &RenderConfig, path: P) -> Result<(), ConfigError> {
    fs::write(path, config_to_string(config)?)?;
    Ok(())
}
