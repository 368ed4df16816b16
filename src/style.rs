//! Typed style records produced by the synchronizers.
//!
//! Hosts translate these into whatever their toolkit uses; the Floem view
//! in this crate is one such host.

use crate::color::HexColor;

/// Box treatment applied to a native color input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NativeInputStyle {
    pub width: f32,
    pub height: f32,
    pub border_radius: f32,
    pub border_width: f32,
    pub opacity: f32,
    /// Whether the input still takes up space in layout.
    pub in_flow: bool,
    pub hit_testable: bool,
    pub pointer_cursor: bool,
}

/// Fill and border of the swatch button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwatchStyle {
    pub fill: HexColor,
    pub border: HexColor,
}

/// Colors of the hex text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexFieldStyle {
    pub text: HexColor,
    pub background: HexColor,
    /// Border when the field is not focused.
    pub border: HexColor,
    pub focused: bool,
    /// Border while focused.
    pub focus_border: HexColor,
}

impl HexFieldStyle {
    /// Border currently shown.
    pub fn effective_border(&self) -> HexColor {
        if self.focused {
            self.focus_border
        } else {
            self.border
        }
    }
}

/// The four ways the preview shows a color in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreviewKind {
    /// Bold text in the color.
    Text,
    /// Filled background with white text.
    Fill,
    /// Button-style filled sample.
    Button,
    /// Outlined sample with a border in the color.
    Border,
}

impl PreviewKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Fill => "Background",
            Self::Button => "Button",
            Self::Border => "Border",
        }
    }
}

/// One preview sample. `None` means "host default".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewSample {
    pub kind: PreviewKind,
    pub text: Option<HexColor>,
    pub background: Option<HexColor>,
    pub border: Option<HexColor>,
}

impl PreviewSample {
    pub fn new(kind: PreviewKind, color: HexColor) -> Self {
        let (text, background, border) = match kind {
            PreviewKind::Text => (Some(color), None, None),
            PreviewKind::Fill | PreviewKind::Button => (Some(HexColor::WHITE), Some(color), None),
            PreviewKind::Border => (None, None, Some(color)),
        };
        Self {
            kind,
            text,
            background,
            border,
        }
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}
