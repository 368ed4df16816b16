//! HexColor, the canonical `#rrggbb` value, and the codec functions over it.
//!
//! Every `HexColor` comes out of [`normalize`] (or [`HexColor::from_rgb`]), so
//! holding one means holding a valid color. Malformed text is reported as
//! [`ColorError::InvalidHex`] and never panics.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};
use crate::math;

/// The leading marker of hex color text.
pub const MARKER: char = '#';

/// An RGB color in canonical `#rrggbb` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);

    /// Create from 0–255 channel values.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Red channel (0–255).
    pub fn r(&self) -> u8 {
        self.r
    }
    /// Green channel (0–255).
    pub fn g(&self) -> u8 {
        self.g
    }
    /// Blue channel (0–255).
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Channels as a tuple.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Format as `#rrggbb` with lowercase digits.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    fn map_channels(self, f: impl Fn(u8) -> u8) -> Self {
        Self::from_rgb(f(self.r), f(self.g), f(self.b))
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{MARKER}{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        normalize(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self> {
        normalize(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_hex()
    }
}

/// Prepend the `#` marker to non-empty text that lacks it.
///
/// Hex fields echo this back to the user while they type, even when the text
/// is not yet a valid color.
pub fn with_marker(input: &str) -> Cow<'_, str> {
    if input.is_empty() || input.starts_with(MARKER) {
        Cow::Borrowed(input)
    } else {
        Cow::Owned(format!("{MARKER}{input}"))
    }
}

/// Parse hex color text into its canonical form.
///
/// Accepts `#rgb` and `#rrggbb` in any case, with or without the marker.
/// The 3-digit form expands by duplicating each digit (`#abc` → `#aabbcc`).
pub fn normalize(input: &str) -> Result<HexColor> {
    let reject = || ColorError::InvalidHex(input.to_string());

    let marked = with_marker(input);
    let digits = marked.strip_prefix(MARKER).ok_or_else(reject)?.as_bytes();
    if !digits.iter().all(u8::is_ascii_hexdigit) {
        return Err(reject());
    }

    let mut nibbles = digits.iter().filter_map(|&c| math::nibble(c));
    let mut next = || nibbles.next().ok_or_else(reject);
    match digits.len() {
        3 => {
            let r = next()?;
            let g = next()?;
            let b = next()?;
            Ok(HexColor::from_rgb(r * 17, g * 17, b * 17))
        }
        6 => {
            let mut byte = || -> Result<u8> { Ok(next()? << 4 | next()?) };
            let r = byte()?;
            let g = byte()?;
            let b = byte()?;
            Ok(HexColor::from_rgb(r, g, b))
        }
        _ => Err(reject()),
    }
}

/// Scale every channel by `1 - fraction`, flooring. Used for border emphasis.
pub fn darken(color: HexColor, fraction: f64) -> HexColor {
    color.map_channels(|c| math::darken_channel(c, fraction))
}

/// Add `channel * fraction` to every channel, clamped to 0–255 and rounded.
///
/// Negative fractions darken, positive ones lighten.
pub fn adjust_brightness(color: HexColor, fraction: f64) -> HexColor {
    color.map_channels(|c| math::adjust_channel(c, fraction))
}

/// Perceived brightness of `color` in 0.0–255.0.
pub fn brightness(color: HexColor) -> f64 {
    math::perceived_brightness(color.r, color.g, color.b)
}

/// Black or white, whichever reads better on top of `color`.
///
/// Black only when brightness is strictly above 128.
pub fn contrast_color(color: HexColor) -> HexColor {
    if brightness(color) > 128.0 {
        HexColor::BLACK
    } else {
        HexColor::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> HexColor {
        normalize(s).unwrap()
    }

    #[test]
    fn normalize_lowercases_six_digits() {
        assert_eq!(hex("#3B82F6").to_hex(), "#3b82f6");
        assert_eq!(hex("3b82f6").to_hex(), "#3b82f6");
    }

    #[test]
    fn normalize_expands_shorthand() {
        assert_eq!(hex("#abc").to_hex(), "#aabbcc");
        assert_eq!(hex("F0a").to_hex(), "#ff00aa");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["#AbC", "123456", "#FFFFFF", "000"] {
            let once = hex(raw);
            assert_eq!(hex(&once.to_hex()), once);
        }
    }

    #[test]
    fn normalize_rejects_malformed_text() {
        for raw in ["", "#", "#ab", "#abcd", "#abcdeg", "##abc", "#1234567", "red", "#ab c", "#ééé"] {
            let err = normalize(raw).unwrap_err();
            assert!(err.is_invalid_hex(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn with_marker_only_touches_non_empty_text() {
        assert_eq!(with_marker(""), "");
        assert_eq!(with_marker("#ab"), "#ab");
        assert_eq!(with_marker("ab"), "#ab");
    }

    #[test]
    fn darken_examples() {
        assert_eq!(darken(HexColor::WHITE, 0.2), hex("#cccccc"));
        assert_eq!(darken(hex("#3b82f6"), 0.2), hex("#2f68c4"));
        for fraction in [0.0, 0.2, 0.3, 1.0] {
            assert_eq!(darken(HexColor::BLACK, fraction), HexColor::BLACK);
        }
    }

    #[test]
    fn adjust_brightness_darkens_and_lightens() {
        assert_eq!(adjust_brightness(hex("#808080"), -0.3), hex("#5a5a5a"));
        assert_eq!(adjust_brightness(hex("#808080"), 0.5), hex("#c0c0c0"));
        assert_eq!(adjust_brightness(hex("#f0f0f0"), 0.5), HexColor::WHITE);
    }

    #[test]
    fn contrast_picks_legible_text() {
        assert_eq!(contrast_color(HexColor::WHITE), HexColor::BLACK);
        assert_eq!(contrast_color(HexColor::BLACK), HexColor::WHITE);
        assert_eq!(contrast_color(hex("#3b82f6")), HexColor::WHITE);
        assert_eq!(contrast_color(hex("#ffff00")), HexColor::BLACK);
    }

    #[test]
    fn contrast_boundary_is_strict() {
        let gray = hex("#808080");
        assert_eq!(brightness(gray), 128.0);
        assert_eq!(contrast_color(gray), HexColor::WHITE);
        assert_eq!(contrast_color(hex("#818181")), HexColor::BLACK);
    }

    #[test]
    fn serde_goes_through_normalize() {
        let c: HexColor = serde_json::from_str("\"#ABC\"").unwrap();
        assert_eq!(c, hex("#aabbcc"));
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#aabbcc\"");
        assert!(serde_json::from_str::<HexColor>("\"nope\"").is_err());
    }
}
