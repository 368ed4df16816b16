//! Decorated pickers: a native color input enhanced with a generated
//! fragment (swatch, hex field, name label, usage preview).
//!
//! [`DecoratedState`] is the fragment as data. Its transitions are pure:
//! each takes the current state and raw input and returns the next state,
//! or rejects the input and leaves the current state as it was.
//! [`DecoratedPickers`] binds states to page elements and routes events.

use crate::color::{contrast_color, darken, normalize, with_marker, HexColor};
use crate::config::{SyncConfig, Tuning};
use crate::constants;
use crate::error::{ColorError, Result};
use crate::names::name_of_color;
use crate::page::{ElementId, Page};
use crate::registry::BindingRegistry;
use crate::style::{HexFieldStyle, NativeInputStyle, PreviewSample, SwatchStyle};

/// Everything the decorated fragment shows, derived from one color.
#[derive(Debug, Clone, PartialEq)]
pub struct DecoratedState {
    value: HexColor,
    tuning: Tuning,
    swatch: SwatchStyle,
    hex_field: HexFieldStyle,
    hex_text: String,
    name: &'static str,
    previews: [PreviewSample; 4],
}

impl DecoratedState {
    /// Build the fragment for an input whose value is `initial`. Empty or
    /// unparsable values fall back to the configured default.
    pub fn new(initial: &str, tuning: Tuning) -> Self {
        let value = normalize(initial).unwrap_or(tuning.default_color);
        Self::render(value, tuning, false)
    }

    fn render(value: HexColor, tuning: Tuning, focused: bool) -> Self {
        log::trace!("recomputing decorated fragment for {value}");
        Self {
            value,
            tuning,
            swatch: SwatchStyle {
                fill: value,
                border: darken(value, tuning.swatch_border_darken),
            },
            hex_field: HexFieldStyle {
                text: contrast_color(value),
                background: value,
                border: darken(value, tuning.hex_border_darken),
                focused,
                focus_border: tuning.focus_accent,
            },
            hex_text: value.to_hex(),
            name: name_of_color(value),
            previews: constants::PREVIEW_KINDS.map(|kind| PreviewSample::new(kind, value)),
        }
    }

    /// The same fragment recomputed for `color`. Focus is kept.
    pub fn recolor(&self, color: HexColor) -> Self {
        Self::render(color, self.tuning, self.hex_field.focused)
    }

    /// Native picker changed.
    pub fn with_picker_value(&self, raw: &str) -> Result<Self> {
        normalize(raw).map(|color| self.recolor(color))
    }

    /// Hex text changed. Valid text (marker optional, 3 or 6 digits) becomes
    /// the new native value; anything else is rejected.
    pub fn with_hex_text(&self, raw: &str) -> Result<Self> {
        normalize(&with_marker(raw)).map(|color| self.recolor(color))
    }

    /// Toggle the hex field's focus emphasis. No data effect.
    pub fn set_focused(&mut self, focused: bool) {
        self.hex_field.focused = focused;
    }

    /// Value held by the native input.
    pub fn value(&self) -> HexColor {
        self.value
    }

    pub fn swatch(&self) -> SwatchStyle {
        self.swatch
    }

    pub fn hex_field(&self) -> HexFieldStyle {
        self.hex_field
    }

    /// Canonical hex text, `#rrggbb`.
    pub fn hex_text(&self) -> &str {
        &self.hex_text
    }

    /// Label from the named color table.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn previews(&self) -> &[PreviewSample; 4] {
        &self.previews
    }
}

/// A bound native input and its fragment.
#[derive(Debug, Clone)]
pub struct DecoratedBinding {
    input: ElementId,
    container: ElementId,
    state: DecoratedState,
    hex_draft: String,
    native_style: NativeInputStyle,
}

impl DecoratedBinding {
    fn new(input: ElementId, container: ElementId, initial: &str, tuning: Tuning) -> Self {
        let state = DecoratedState::new(initial, tuning);
        Self {
            input,
            container,
            hex_draft: state.hex_text().to_string(),
            state,
            native_style: constants::HIDDEN_NATIVE,
        }
    }

    pub fn input(&self) -> ElementId {
        self.input
    }

    /// Element the fragment is attached to.
    pub fn container(&self) -> ElementId {
        self.container
    }

    pub fn state(&self) -> &DecoratedState {
        &self.state
    }

    /// Text currently in the hex field. Differs from the state's hex text
    /// while the user is mid-edit.
    pub fn hex_draft(&self) -> &str {
        &self.hex_draft
    }

    /// Treatment applied to the native input.
    pub fn native_style(&self) -> NativeInputStyle {
        self.native_style
    }
}

/// Synchronizer for decorated pickers.
#[derive(Debug, Default)]
pub struct DecoratedPickers {
    config: SyncConfig,
    bindings: BindingRegistry<DecoratedBinding>,
}

impl DecoratedPickers {
    pub fn new(config: SyncConfig) -> Self {
        Self {
            config,
            bindings: BindingRegistry::new(),
        }
    }

    /// Bind every color input on `page` that is not bound yet. Returns the
    /// count of new bindings.
    pub fn scan(&mut self, page: &dyn Page) -> usize {
        let config = &self.config;
        let mut bound = 0;
        for input in page.color_inputs() {
            let created = self.bindings.bind_with(input, || {
                let container = attachment_point(page, input, &config.row_classes);
                Some(DecoratedBinding::new(
                    input,
                    container,
                    &page.value(input),
                    config.tuning,
                ))
            });
            if created {
                log::debug!("decorated color input {input}");
                bound += 1;
            }
        }
        bound
    }

    /// Native picker delivered a new value.
    pub fn picker_input(&mut self, input: ElementId, raw: &str) -> Result<&DecoratedState> {
        let binding = self.binding_mut(input)?;
        binding.state = binding.state.with_picker_value(raw)?;
        binding.hex_draft = binding.state.hex_text().to_string();
        Ok(&binding.state)
    }

    /// User typed into the hex field. Invalid text is echoed in the field
    /// (with the marker prepended) but changes nothing else.
    pub fn hex_input(&mut self, input: ElementId, raw: &str) -> Result<&DecoratedState> {
        let binding = self.binding_mut(input)?;
        match binding.state.with_hex_text(raw) {
            Ok(next) => {
                binding.hex_draft = next.hex_text().to_string();
                binding.state = next;
                Ok(&binding.state)
            }
            Err(err) => {
                log::debug!("ignoring hex text for {input}: {err}");
                binding.hex_draft = with_marker(raw).into_owned();
                Err(err)
            }
        }
    }

    pub fn hex_focus(&mut self, input: ElementId) -> Result<()> {
        self.binding_mut(input)?.state.set_focused(true);
        Ok(())
    }

    pub fn hex_blur(&mut self, input: ElementId) -> Result<()> {
        self.binding_mut(input)?.state.set_focused(false);
        Ok(())
    }

    /// Swatch clicked. Returns the native input whose platform dialog the
    /// host should open.
    pub fn swatch_click(&self, input: ElementId) -> Result<ElementId> {
        self.binding(input)
            .map(DecoratedBinding::input)
            .ok_or(ColorError::Unbound(input))
    }

    pub fn binding(&self, input: ElementId) -> Option<&DecoratedBinding> {
        self.bindings.get(input)
    }

    pub fn state(&self, input: ElementId) -> Option<&DecoratedState> {
        self.binding(input).map(DecoratedBinding::state)
    }

    pub fn bindings(&self) -> &BindingRegistry<DecoratedBinding> {
        &self.bindings
    }

    /// Drop bindings of inputs that left the page.
    pub fn prune(&mut self, page: &dyn Page) -> usize {
        self.bindings.prune(page)
    }

    fn binding_mut(&mut self, input: ElementId) -> Result<&mut DecoratedBinding> {
        self.bindings
            .get_mut(input)
            .ok_or(ColorError::Unbound(input))
    }
}

/// Nearest recognized row wrapper, else the input's parent.
fn attachment_point(page: &dyn Page, input: ElementId, row_classes: &[String]) -> ElementId {
    row_classes
        .iter()
        .find_map(|class| page.closest(input, class))
        .or_else(|| page.parent(input))
        .unwrap_or(input)
}
