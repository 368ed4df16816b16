//! Channel arithmetic on 0–255 values.
//!
//! The two shading operations differ on purpose: `darken_channel` floors,
//! `adjust_channel` clamps then rounds half up. Each feeds a different
//! synchronizer and both must stay bit-exact.

/// `floor(c * (1 - fraction))`. `fraction` is clamped to 0.0–1.0.
pub(crate) fn darken_channel(c: u8, fraction: f64) -> u8 {
    let fraction = fraction.clamp(0.0, 1.0);
    (c as f64 * (1.0 - fraction)).floor() as u8
}

/// `round(clamp(c + c * fraction, 0, 255))`.
pub(crate) fn adjust_channel(c: u8, fraction: f64) -> u8 {
    let c = c as f64;
    let adjusted = (c + c * fraction).clamp(0.0, 255.0);
    // Values are non-negative here, so `round` matches round-half-up.
    adjusted.round() as u8
}

/// Perceived brightness, `(299 R + 587 G + 114 B) / 1000`, in 0.0–255.0.
pub(crate) fn perceived_brightness(r: u8, g: u8, b: u8) -> f64 {
    let weighted = r as u32 * 299 + g as u32 * 587 + b as u32 * 114;
    weighted as f64 / 1000.0
}

/// Value of a single ASCII hex digit.
pub(crate) fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
