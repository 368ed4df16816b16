//! Human-readable labels for well-known colors.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::color::HexColor;

/// Label shown for colors without a table entry.
pub const CUSTOM_COLOR_LABEL: &str = "Custom color";

/// Table entries in declaration order. Keys are lowercase `#rrggbb`.
///
/// `#ffffff` is declared twice; the later entry wins.
const ENTRIES: &[(&str, &str)] = &[
    ("#3b82f6", "Blue (Primary)"),
    ("#8b5cf6", "Violet (Secondary)"),
    ("#10b981", "Green (Accent)"),
    ("#1f2937", "Dark gray (Text)"),
    ("#f9fafb", "Light gray (Background)"),
    ("#ffffff", "White (Header)"),
    ("#111827", "Dark gray (Footer)"),
    ("#000000", "Black"),
    ("#ffffff", "White"),
    ("#ff0000", "Red"),
    ("#00ff00", "Green"),
    ("#0000ff", "Blue"),
    ("#ffff00", "Yellow"),
    ("#ff00ff", "Magenta"),
    ("#00ffff", "Cyan"),
];

static TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ENTRIES.iter().copied().collect());

/// Look up the label for hex text, case-insensitively.
///
/// The query must already be in `#rrggbb` form; shorthand is not expanded.
pub fn name_of(query: &str) -> &'static str {
    TABLE
        .get(query.to_lowercase().as_str())
        .copied()
        .unwrap_or(CUSTOM_COLOR_LABEL)
}

/// Label for a canonical color.
pub fn name_of_color(color: HexColor) -> &'static str {
    name_of(&color.to_hex())
}
