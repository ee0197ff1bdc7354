//! Engine configuration
//!
//! Uses RON (Rusty Object Notation) for human-readable config files.
//! Every field has a default, so a config file only lists what it changes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::font::GlyphTint;
use crate::rasterizer::{Color, HEIGHT, WIDTH};

/// Error type for config loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub window_title: String,
    /// Canvas size in pixels
    pub width: usize,
    pub height: usize,
    /// Window pixels per canvas pixel
    pub scale: u32,
    pub clear_color: Color,
    /// 256 glyphs x 16 rows x 1 byte.
    ///
    /// Font files are not bundled with the crate and must be supplied
    /// alongside the binary. A missing file leaves that table not ready,
    /// so its characters draw as blank cells.
    pub latin_font: String,
    /// 360 glyphs x 16 rows x 2 bytes, supplied externally like `latin_font`
    pub hangul_font: String,
    pub font_tint: GlyphTint,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_title: "Bonnie 2D".to_string(),
            width: WIDTH,
            height: HEIGHT,
            scale: 3,
            clear_color: Color::new(30, 30, 35),
            latin_font: "assets/fonts/eng.fnt".to_string(),
            hangul_font: "assets/fonts/kor.fnt".to_string(),
            font_tint: GlyphTint::FixedWhite,
        }
    }
}

/// Load a config from a RON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<EngineConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents)
}

/// Load a config from a RON string
pub fn load_config_from_str(s: &str) -> Result<EngineConfig, ConfigError> {
    Ok(ron::from_str(s)?)
}

/// Save a config to a RON file
pub fn save_config<P: AsRef<Path>>(config: &EngineConfig, path: P) -> Result<(), ConfigError> {
    let pretty = ron::ser::PrettyConfig::new()
        .depth_limit(3)
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(config, pretty)?;
    fs::write(path, contents)?;
    Ok(())
}
