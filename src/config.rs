//! Demo configuration loaded from an optional TOML file.
//!
//! Every table and key is optional; anything left out keeps its default.
//!
//! ```toml
//! [window]
//! width = 800
//! height = 600
//! clear_color = [0.0, 0.0, 0.0]
//!
//! [raycast]
//! ray_count = 90
//! ray_color = [1.0, 0.9, 0.2]
//! bounce_color = [0.2, 0.6, 1.0]
//! boundary_color = [1.0, 1.0, 1.0]
//!
//! [cube]
//! degrees_per_second = 50.0
//! fps = 30.0
//! frames = 1
//! color = [0.3, 0.8, 0.9]
//! ```

use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use crate::canvas::Color;
use crate::error::{Error, Result};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output frame settings
    pub window: WindowConfig,
    /// Ray-casting demo settings
    pub raycast: RaycastConfig,
    /// Cube demo settings
    pub cube: CubeConfig,
}

/// Frame size and background
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    /// Frame width in pixels; also the boundary width W
    pub width: u32,
    /// Frame height in pixels; also the boundary height H
    pub height: u32,
    /// Linear RGB background
    pub clear_color: [f32; 3],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            clear_color: [0.0, 0.0, 0.0],
        }
    }
}

/// Ray-casting demo settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RaycastConfig {
    /// Number of rays N, spread evenly over 360 degrees
    pub ray_count: usize,
    /// Color of the origin to first-hit segments
    pub ray_color: [f32; 3],
    /// Color of the first-hit to second-hit segments
    pub bounce_color: [f32; 3],
    /// Color of the boundary outline
    pub boundary_color: [f32; 3],
}

impl Default for RaycastConfig {
    fn default() -> Self {
        Self {
            ray_count: 90,
            ray_color: [1.0, 0.9, 0.2],
            bounce_color: [0.2, 0.6, 1.0],
            boundary_color: [1.0, 1.0, 1.0],
        }
    }
}

/// Cube demo settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CubeConfig {
    /// Spin speed
    pub degrees_per_second: f32,
    /// Frame rate used to turn a frame index into a time
    pub fps: f32,
    /// Number of frames to render
    pub frames: u32,
    /// Edge color
    pub color: [f32; 3],
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            degrees_per_second: 50.0,
            fps: 30.0,
            frames: 1,
            color: [0.3, 0.8, 0.9],
        }
    }
}

impl Config {
    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply command line overrides; `None` keeps the file (or default) value.
    pub fn apply_overrides(
        &mut self,
        width: Option<u32>,
        height: Option<u32>,
        ray_count: Option<usize>,
        frames: Option<u32>,
    ) {
        if let Some(width) = width {
            self.window.width = width;
        }
        if let Some(height) = height {
            self.window.height = height;
        }
        if let Some(ray_count) = ray_count {
            self.raycast.ray_count = ray_count;
        }
        if let Some(frames) = frames {
            self.cube.frames = frames;
        }
    }

    /// Parse a TOML document.
    pub fn parse(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// Convert a config color triple into a [`Color`].
pub fn color(rgb: [f32; 3]) -> Color {
    Color::from_array(rgb)
}
