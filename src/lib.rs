//! # floem-color-field
//!
//! A decorated hex color field for [Floem](https://github.com/lapce/floem),
//! plus the headless synchronizers behind it.
//!
//! A native color input only holds a `#rrggbb` value. The decorated field
//! adds a swatch, an editable hex field, a color name and a usage preview,
//! and keeps all of them in step with the value. The same logic is exposed
//! without any UI so other hosts can drive it:
//!
//! - [`color`]: parsing and shading of hex colors;
//! - [`DecoratedPickers`]: builds the whole fragment for every color input;
//! - [`MarkupPickers`]: wires widgets whose hex field already exists;
//! - [`ColorPickers`]: both, over one [`Page`], rescannable on demand.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_color_field::{color_field, HexColor};
//!
//! let color = RwSignal::new("#3b82f6".parse::<HexColor>().unwrap());
//! // Use `color_field(color)` in your Floem view tree.
//! ```

pub mod color;
pub mod config;
mod constants;
pub mod decorated;
mod error;
pub mod markup;
mod math;
pub mod names;
pub mod page;
mod pickers;
pub mod registry;
pub mod style;
mod views;

pub use color::HexColor;
pub use config::{SyncConfig, Tuning};
pub use decorated::{DecoratedPickers, DecoratedState};
pub use error::{ColorError, Result};
pub use markup::{MarkupPickers, MarkupState};
pub use page::{ElementId, MemoryPage, Page};
pub use pickers::ColorPickers;
pub use registry::{DiscoveryTrigger, MutationBatch};

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

fn load_icon_font() {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
}

/// Creates the decorated color field view with default tuning.
///
/// The field reads from and writes to `color`. External changes to the
/// signal are reflected in the UI; valid hex edits update the signal and
/// partial ones are ignored.
pub fn color_field(color: RwSignal<HexColor>) -> impl IntoView {
    color_field_with(color, Tuning::default())
}

/// Like [`color_field`], with custom shading and focus colors.
pub fn color_field_with(color: RwSignal<HexColor>, tuning: Tuning) -> impl IntoView {
    load_icon_font();
    views::color_field(color, tuning)
}
