//! Configuration file support for easel.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/easel/config.toml`. Settings cover the size and background of new
//! canvases and the tool defaults (color, stroke width, font, pen, mode).
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest accepted canvas dimension in pixels.
pub const MAX_CANVAS_DIMENSION: u32 = 16384;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 1024
/// height = 768
/// background = "white"
///
/// [drawing]
/// default_color = [0, 128, 255]
/// default_stroke_width = 3.0
/// default_font_size = 32.0
/// default_pen = "freehand"
/// default_mode = "draw"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Size and background of new canvases
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Drawing tool defaults
    #[serde(default)]
    pub drawing: DrawingConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - 16384
    /// - `default_stroke_width`: 0.5 - 100.0
    /// - `default_font_size`: 0.5 - 100.0
    fn validate_and_clamp(&mut self) {
        // Canvas size: 1 - 16384
        for (name, value) in [
            ("width", &mut self.canvas.width),
            ("height", &mut self.canvas.height),
        ] {
            if !(1..=MAX_CANVAS_DIMENSION).contains(&*value) {
                log::warn!(
                    "Invalid canvas {} {}, clamping to 1-{} range",
                    name,
                    value,
                    MAX_CANVAS_DIMENSION
                );
                *value = (*value).clamp(1, MAX_CANVAS_DIMENSION);
            }
        }

        // Stroke width: 0.5 - 100.0
        if !(0.5..=100.0).contains(&self.drawing.default_stroke_width) {
            log::warn!(
                "Invalid default_stroke_width {:.1}, clamping to 0.5-100.0 range",
                self.drawing.default_stroke_width
            );
            self.drawing.default_stroke_width = self.drawing.default_stroke_width.clamp(0.5, 100.0);
        }

        // Font size: 0.5 - 100.0
        if !(0.5..=100.0).contains(&self.drawing.default_font_size) {
            log::warn!(
                "Invalid default_font_size {:.1}, clamping to 0.5-100.0 range",
                self.drawing.default_font_size
            );
            self.drawing.default_font_size = self.drawing.default_font_size.clamp(0.5, 100.0);
        }

        if let Some(path) = &self.drawing.font_path
            && !path.exists()
        {
            log::warn!(
                "Configured font_path {} does not exist, falling back to system fonts",
                path.display()
            );
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/easel/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("easel");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit file. Unlike [`Config::load`], a missing file is
    /// an error.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        // Validates and clamps values to acceptable ranges
        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn from_toml(source: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(source)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
