use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::CanvasError;

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Terminal geometry fallbacks and output behaviour
    #[serde(default)]
    pub terminal: TerminalConfig,

    /// Animation demo parameters
    #[serde(default)]
    pub demo: DemoConfig,

    /// Font atlas used for text drawing
    #[serde(default)]
    pub font: FontConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TerminalConfig {
    /// Columns used when the terminal size cannot be queried
    #[serde(default = "default_columns")]
    pub default_columns: u16,

    /// Rows used when the terminal size cannot be queried
    #[serde(default = "default_rows")]
    pub default_rows: u16,

    /// Prefix animated frames with a cursor-home sequence
    #[serde(default = "default_true")]
    pub home_cursor: bool,
}

fn default_columns() -> u16 {
    80
}

fn default_rows() -> u16 {
    24
}

fn default_true() -> bool {
    true
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            default_columns: default_columns(),
            default_rows: default_rows(),
            home_cursor: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DemoConfig {
    /// Delay between frames
    #[serde(default = "default_frame_interval")]
    pub frame_interval_ms: u64,

    /// Maximum rotation either side of upright, in degrees
    #[serde(default = "default_wobble")]
    pub wobble_degrees: f64,

    /// Edge length of the sprite on the canvas, in pixels
    #[serde(default = "default_sprite_size")]
    pub sprite_size: f64,

    /// Caption drawn over the sprite
    #[serde(default = "default_text")]
    pub text: String,

    /// Caption glyph height in pixels
    #[serde(default = "default_text_size")]
    pub text_size: f64,

    /// Maximum random caption offset, in pixels
    #[serde(default = "default_text_jitter")]
    pub text_jitter: f64,

    /// Overlay the translucent gradient
    #[serde(default = "default_true")]
    pub gradient: bool,
}

fn default_frame_interval() -> u64 {
    50
}

fn default_wobble() -> f64 {
    30.0
}

fn default_sprite_size() -> f64 {
    80.0
}

fn default_text() -> String {
    "Gopher!".to_string()
}

fn default_text_size() -> f64 {
    20.0
}

fn default_text_jitter() -> f64 {
    4.0
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: default_frame_interval(),
            wobble_degrees: default_wobble(),
            sprite_size: default_sprite_size(),
            text: default_text(),
            text_size: default_text_size(),
            text_jitter: default_text_jitter(),
            gradient: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FontConfig {
    /// Path to a font atlas PNG
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Glyph cells per atlas row
    #[serde(default = "default_font_columns")]
    pub columns: u32,

    /// Glyph rows in the atlas
    #[serde(default = "default_font_rows")]
    pub rows: u32,
}

fn default_font_columns() -> u32 {
    16
}

fn default_font_rows() -> u32 {
    8
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: None,
            columns: default_font_columns(),
            rows: default_font_rows(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, CanvasError> {
        serde_yaml::from_str(content).map_err(|e| CanvasError::Config(e.to_string()))
    }

    /// Read and parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self, CanvasError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load configuration, falling back to defaults when no path is given
    /// or the file cannot be used
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file, using defaults");
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded configuration");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }
}
