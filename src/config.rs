//! Runtime configuration for the synchronizers.
//!
//! Everything has a default matching the stock admin widget; hosts can
//! override any subset from JSON.

use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::error::Result;

/// Colors and shading fractions applied by the synchronizers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Value used when a native input starts empty or unparsable.
    pub default_color: HexColor,
    /// `darken` fraction for the swatch border.
    pub swatch_border_darken: f64,
    /// `darken` fraction for the hex field border.
    pub hex_border_darken: f64,
    /// `adjust_brightness` fraction for the markup picker border.
    pub markup_border_adjust: f64,
    /// Hex field border while it has focus.
    pub focus_accent: HexColor,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            default_color: HexColor::BLACK,
            swatch_border_darken: 0.2,
            hex_border_darken: 0.3,
            markup_border_adjust: -0.3,
            focus_accent: HexColor::from_rgb(0x3b, 0x82, 0xf6),
        }
    }
}

/// Full synchronizer configuration: tuning plus the class names used to
/// discover widgets on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    #[serde(flatten)]
    pub tuning: Tuning,
    /// Marker class of containers handled by the markup synchronizer.
    pub widget_class: String,
    /// Marker class of the hex field inside a markup container.
    pub hex_input_class: String,
    /// Row wrappers the decorated fragment attaches to, in priority order.
    /// Falls back to the input's parent.
    pub row_classes: Vec<String>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),
            widget_class: "color-picker-widget".to_string(),
            hex_input_class: "color-hex-input".to_string(),
            row_classes: vec!["fieldBox".to_string(), "form-row".to_string()],
        }
    }
}

impl SyncConfig {
    /// Parse a JSON object. Missing keys keep their defaults; colors are
    /// validated with [`normalize`](crate::color::normalize).
    pub fn from_json(json: &str) -> Result<Self> {
        let config = serde_json::from_str(json)?;
        log::debug!("loaded picker config: {config:?}");
        Ok(config)
    }
}
