//! Markup pickers: widgets whose hex field already exists in host markup.
//!
//! Only wiring is added here. The native input gets a fixed box treatment
//! once and a border that tracks the current color.

use crate::color::{adjust_brightness, normalize, HexColor};
use crate::config::{SyncConfig, Tuning};
use crate::constants;
use crate::error::{ColorError, Result};
use crate::page::{ElementId, Page};
use crate::registry::BindingRegistry;
use crate::style::NativeInputStyle;

/// Native value, hex text and border of one markup widget.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupState {
    value: HexColor,
    hex_text: String,
    border: HexColor,
    box_style: NativeInputStyle,
    tuning: Tuning,
}

impl MarkupState {
    /// Apply the static box treatment and sync from the native value once.
    pub fn bind(native_value: &str, tuning: Tuning) -> Self {
        let (value, text) = match normalize(native_value) {
            Ok(color) => (color, native_value.to_string()),
            Err(_) => (tuning.default_color, tuning.default_color.to_hex()),
        };
        Self {
            value,
            hex_text: text,
            border: adjust_brightness(value, tuning.markup_border_adjust),
            box_style: constants::MARKUP_NATIVE,
            tuning,
        }
    }

    fn with(&self, value: HexColor, hex_text: String) -> Self {
        Self {
            value,
            hex_text,
            border: adjust_brightness(value, self.tuning.markup_border_adjust),
            ..self.clone()
        }
    }

    /// Native picker changed: its text is copied verbatim into the hex field.
    pub fn with_picker_value(&self, raw: &str) -> Result<Self> {
        let color = normalize(raw)?;
        Ok(self.with(color, raw.to_string()))
    }

    /// Hex field changed or lost focus: on valid text both fields receive
    /// the normalized value.
    pub fn with_hex_text(&self, raw: &str) -> Result<Self> {
        let color = normalize(raw)?;
        Ok(self.with(color, color.to_hex()))
    }

    pub fn value(&self) -> HexColor {
        self.value
    }

    pub fn hex_text(&self) -> &str {
        &self.hex_text
    }

    /// Border color of the native input.
    pub fn border(&self) -> HexColor {
        self.border
    }

    pub fn box_style(&self) -> NativeInputStyle {
        self.box_style
    }
}

/// One bound widget container.
#[derive(Debug, Clone)]
pub struct MarkupBinding {
    container: ElementId,
    input: ElementId,
    hex_field: ElementId,
    state: MarkupState,
    hex_draft: String,
}

impl MarkupBinding {
    pub fn container(&self) -> ElementId {
        self.container
    }

    pub fn input(&self) -> ElementId {
        self.input
    }

    pub fn hex_field(&self) -> ElementId {
        self.hex_field
    }

    pub fn state(&self) -> &MarkupState {
        &self.state
    }

    /// Literal text in the hex field, including rejected edits.
    pub fn hex_draft(&self) -> &str {
        &self.hex_draft
    }
}

/// Synchronizer for markup-provided widgets.
#[derive(Debug, Default)]
pub struct MarkupPickers {
    config: SyncConfig,
    bindings: BindingRegistry<MarkupBinding>,
}

impl MarkupPickers {
    pub fn new(config: SyncConfig) -> Self {
        Self {
            config,
            bindings: BindingRegistry::new(),
        }
    }

    /// Bind every widget container that has both a color input and a hex
    /// field. Incomplete containers are skipped and retried next pass.
    pub fn scan(&mut self, page: &dyn Page) -> usize {
        let config = &self.config;
        let mut bound = 0;
        for container in page.with_class(&config.widget_class) {
            let created = self.bindings.bind_with(container, || {
                let input = page.color_input_in(container);
                let hex_field = page.class_in(container, &config.hex_input_class);
                match (input, hex_field) {
                    (Some(input), Some(hex_field)) => {
                        let state = MarkupState::bind(&page.value(input), config.tuning);
                        Some(MarkupBinding {
                            container,
                            input,
                            hex_field,
                            hex_draft: state.hex_text().to_string(),
                            state,
                        })
                    }
                    _ => {
                        log::debug!("skipping picker widget {container}: missing input or hex field");
                        None
                    }
                }
            });
            if created {
                log::debug!("bound picker widget {container}");
                bound += 1;
            }
        }
        bound
    }

    /// Native input `input` delivered a new value.
    pub fn picker_input(&mut self, input: ElementId, raw: &str) -> Result<&MarkupState> {
        let binding = self
            .bindings
            .find_mut(|b| b.input == input)
            .ok_or(ColorError::Unbound(input))?;
        binding.state = binding.state.with_picker_value(raw)?;
        binding.hex_draft = binding.state.hex_text().to_string();
        Ok(&binding.state)
    }

    /// Hex field `hex_field` now holds `raw`.
    pub fn hex_input(&mut self, hex_field: ElementId, raw: &str) -> Result<&MarkupState> {
        let binding = self
            .bindings
            .find_mut(|b| b.hex_field == hex_field)
            .ok_or(ColorError::Unbound(hex_field))?;
        match binding.state.with_hex_text(raw) {
            Ok(next) => {
                binding.hex_draft = next.hex_text().to_string();
                binding.state = next;
                Ok(&binding.state)
            }
            Err(err) => {
                log::debug!("ignoring hex text for {hex_field}: {err}");
                binding.hex_draft = raw.to_string();
                Err(err)
            }
        }
    }

    /// Hex field lost focus holding `raw`. Same as an input event.
    pub fn hex_blur(&mut self, hex_field: ElementId, raw: &str) -> Result<&MarkupState> {
        self.hex_input(hex_field, raw)
    }

    /// Binding for a widget container.
    pub fn binding(&self, container: ElementId) -> Option<&MarkupBinding> {
        self.bindings.get(container)
    }

    pub fn bindings(&self) -> &BindingRegistry<MarkupBinding> {
        &self.bindings
    }

    /// Drop bindings whose container, input or hex field left the page.
    /// The next scan rebinds a container whose parts were replaced.
    pub fn prune(&mut self, page: &dyn Page) -> usize {
        self.bindings.retain(|container, binding| {
            page.contains(container)
                && page.contains(binding.input)
                && page.contains(binding.hex_field)
        })
    }
}
