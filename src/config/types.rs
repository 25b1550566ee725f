//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::{Mode, Pen};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Canvas settings used for new images.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Width of a new canvas in pixels (valid range: 1 - 16384)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Height of a new canvas in pixels (valid range: 1 - 16384)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Background fill of a new canvas
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
        }
    }
}

/// Drawing-related settings.
///
/// Controls the tool settings a canvas starts with. They can be changed at any time through
/// the canvas setters.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default pen color - either a named color (red, green, blue, yellow, orange, pink, white, black)
    /// or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke width in pixels (valid range: 0.5 - 100.0)
    #[serde(default = "default_stroke_width")]
    pub default_stroke_width: f64,

    /// Default font size for text in pixels (valid range: 0.5 - 100.0)
    #[serde(default = "default_font_size")]
    pub default_font_size: f64,

    /// TrueType/OpenType font file for text shapes. Common system fonts are tried when unset
    /// or unreadable.
    #[serde(default)]
    pub font_path: Option<PathBuf>,

    /// Pen selected at startup (freehand, line, rect, square, circle, text)
    #[serde(default = "default_pen")]
    pub default_pen: Pen,

    /// Mode selected at startup (draw, erase, select, pick)
    #[serde(default = "default_mode")]
    pub default_mode: Mode,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_stroke_width: default_stroke_width(),
            default_font_size: default_font_size(),
            font_path: None,
            default_pen: default_pen(),
            default_mode: default_mode(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    800
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_stroke_width() -> f64 {
    1.0
}

fn default_font_size() -> f64 {
    40.0
}

fn default_pen() -> Pen {
    Pen::Line
}

fn default_mode() -> Mode {
    Mode::Select
}
