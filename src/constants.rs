//! Sizing and styling constants for the color field.

use crate::style::{NativeInputStyle, PreviewKind};

/// Swatch button edge length
pub const SWATCH_SIZE: f32 = 60.0;

/// Swatch border width
pub const SWATCH_BORDER: f64 = 3.0;

/// Border radius of the swatch and fragment container
pub const RADIUS: f32 = 8.0;

/// Gap between swatch and info column
pub const GAP: f32 = 15.0;

/// Padding around the whole fragment
pub const PADDING: f32 = 15.0;

/// Hex field font size
pub const HEX_FONT: f32 = 14.0;

/// Hex field border width
pub const HEX_BORDER: f64 = 2.0;

/// Hex field width
pub const HEX_WIDTH: f32 = 160.0;

/// Longest text the hex field holds (`#rrggbb`)
pub const HEX_MAX_LEN: usize = 7;

/// Color name label font size
pub const LABEL_FONT: f32 = 12.0;

/// Preview sample font size
pub const PREVIEW_FONT: f32 = 11.0;

/// Minimum preview sample width
pub const PREVIEW_WIDTH: f32 = 60.0;

/// Pencil glyph size on the swatch
pub const ICON_SIZE: f32 = 16.0;

/// Preview samples in display order.
pub const PREVIEW_KINDS: [PreviewKind; 4] = [
    PreviewKind::Text,
    PreviewKind::Fill,
    PreviewKind::Button,
    PreviewKind::Border,
];

/// Treatment of a native input once the decorated fragment replaces it:
/// out of flow and invisible, but still hit-testable so the platform color
/// dialog keeps working.
pub const HIDDEN_NATIVE: NativeInputStyle = NativeInputStyle {
    width: SWATCH_SIZE,
    height: SWATCH_SIZE,
    border_radius: 0.0,
    border_width: 0.0,
    opacity: 0.0,
    in_flow: false,
    hit_testable: true,
    pointer_cursor: false,
};

/// Static box treatment of a native input in markup-provided widgets.
pub const MARKUP_NATIVE: NativeInputStyle = NativeInputStyle {
    width: 50.0,
    height: 50.0,
    border_radius: 4.0,
    border_width: 2.0,
    opacity: 1.0,
    in_flow: true,
    hit_testable: true,
    pointer_cursor: true,
};
