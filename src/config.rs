//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`FXAA_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use fxaa_render::{FxaaSettings, PistonsSettings};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Piston scene configuration
    #[serde(default)]
    pub pistons: PistonsConfig,
    /// FXAA configuration
    #[serde(default)]
    pub fxaa: FxaaConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`FXAA_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // FXAA_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("FXAA_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Enable VSync at startup
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "FXAA".to_string(),
            width: 1280,
            height: 720,
            vsync: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Distance from the orbit target
    pub orbit_radius: f32,
    /// Point the camera looks at [x, y, z]
    pub target: [f32; 3],
    /// Seconds of animation time per radian of orbit
    pub orbit_period: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 40.0,
            near: 1.0,
            far: 1000.0,
            orbit_radius: 150.0,
            target: [1.0, 50.0, 0.0],
            orbit_period: 10.0,
        }
    }
}

/// Largest grid accepted from configuration (pistons per row)
pub const MAX_GRID_SIZE: u32 = 256;

/// Piston scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PistonsConfig {
    /// Pistons per row and column
    pub grid_size: u32,
    /// Distance between piston centres
    pub spacing: f32,
    /// Piston footprint
    pub width: f32,
    /// Mean piston height
    pub base_height: f32,
    /// Height swing around the mean
    pub amplitude: f32,
    /// Animation speed (radians per second)
    pub speed: f32,
    /// Minimum piston height
    pub min_height: f32,
    /// Seed for piston phases and shades
    pub seed: u64,
    /// Direction towards the light [x, y, z]
    pub light_dir: [f32; 3],
}

impl Default for PistonsConfig {
    fn default() -> Self {
        let s = PistonsSettings::default();
        Self {
            grid_size: s.grid_size,
            spacing: s.spacing,
            width: s.width,
            base_height: s.base_height,
            amplitude: s.amplitude,
            speed: s.speed,
            min_height: s.min_height,
            seed: s.seed,
            light_dir: s.light_dir,
        }
    }
}

impl PistonsConfig {
    /// Convert to the scene's settings type
    pub fn to_settings(&self) -> PistonsSettings {
        PistonsSettings {
            grid_size: self.grid_size.min(MAX_GRID_SIZE),
            spacing: self.spacing,
            width: self.width,
            base_height: self.base_height,
            amplitude: self.amplitude,
            speed: self.speed,
            min_height: self.min_height,
            seed: self.seed,
            light_dir: self.light_dir,
        }
    }
}

/// FXAA configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FxaaConfig {
    /// Sub-pixel aliasing removal amount (0..1)
    pub subpixel_quality: f32,
    /// Relative edge contrast threshold
    pub edge_threshold: f32,
    /// Absolute edge contrast threshold for dark areas
    pub edge_threshold_min: f32,
}

impl Default for FxaaConfig {
    fn default() -> Self {
        let s = FxaaSettings::default();
        Self {
            subpixel_quality: s.subpixel_quality,
            edge_threshold: s.edge_threshold,
            edge_threshold_min: s.edge_threshold_min,
        }
    }
}

impl FxaaConfig {
    /// Convert to the filter's settings, clamping out-of-range values
    pub fn to_settings(&self) -> FxaaSettings {
        FxaaSettings {
            subpixel_quality: self.subpixel_quality.clamp(0.0, 1.0),
            edge_threshold: self.edge_threshold.max(0.0),
            edge_threshold_min: self.edge_threshold_min.max(0.0),
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Scene clear color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Path of the divider arrow image
    pub arrow_path: String,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
            arrow_path: "assets/arrow.png".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
