//! Configuration for Cosmic Architect

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window width in logical pixels
    pub window_width: u32,
    /// Window height in logical pixels
    pub window_height: u32,
    /// Planet texture size (pixels, square)
    pub planet_size: u32,
    /// Screen x offset of the planet block
    pub planet_x: u32,
    /// Screen y offset of the planet block
    pub planet_y: u32,
    /// Frame rate cap
    pub target_fps: u32,
    /// Show FPS in the HUD
    pub show_fps: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 1000,
            window_height: 800,
            planet_size: 400,
            planet_x: 600,
            planet_y: 200,
            target_fps: 30,
            show_fps: true,
        }
    }
}

impl AppConfig {
    /// Load config with defaults
    pub fn load() -> Self {
        Self::default()
    }
}
