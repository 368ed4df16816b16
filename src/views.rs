//! Floem rendering of the decorated fragment: swatch, hex field, name label
//! and usage preview, all derived from one [`DecoratedState`] signal.

use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};

use crate::color::{contrast_color, normalize, HexColor};
use crate::config::Tuning;
use crate::constants;
use crate::decorated::DecoratedState;

/// `raw` cut to the hex field's length limit, if it exceeds it.
fn cap_hex_len(raw: &str) -> Option<String> {
    (raw.chars().count() > constants::HEX_MAX_LEN)
        .then(|| raw.chars().take(constants::HEX_MAX_LEN).collect())
}

fn paint(color: HexColor) -> Color {
    Color::rgb8(color.r(), color.g(), color.b())
}

/// Creates the decorated color field bound to `color`.
pub(crate) fn color_field(color: RwSignal<HexColor>, tuning: Tuning) -> impl IntoView {
    let state = RwSignal::new(DecoratedState::new(
        &color.get_untracked().to_hex(),
        tuning,
    ));
    let text = RwSignal::new(state.get_untracked().hex_text().to_string());

    // External color -> fragment
    create_effect(move |_| {
        let c = color.get();
        if state.get_untracked().value() != c {
            state.update(|st| *st = st.recolor(c));
        }
    });

    // Fragment -> hex text, unless the text already means the same color
    create_effect(move |_| {
        let st = state.get();
        if normalize(&text.get_untracked()).ok() != Some(st.value()) {
            text.set(st.hex_text().to_string());
        }
    });

    // Hex text -> fragment and color, on every valid keystroke
    create_effect(move |_| {
        let raw = text.get();
        if let Some(capped) = cap_hex_len(&raw) {
            // Setting the text re-runs this effect with the capped value.
            text.set(capped);
            return;
        }
        let current = state.get_untracked();
        match current.with_hex_text(&raw) {
            Ok(next) => {
                if next.value() != current.value() {
                    let value = next.value();
                    state.set(next);
                    color.set(value);
                }
            }
            Err(err) => log::trace!("hex field mid-edit: {err}"),
        }
    });

    h_stack((
        swatch(state),
        v_stack((
            hex_field(state, text),
            label(move || state.get().name()).style(|s| {
                s.font_size(constants::LABEL_FONT)
                    .color(Color::rgb8(102, 102, 102))
                    .margin_top(5.0)
            }),
            h_stack((
                preview_sample(state, 0),
                preview_sample(state, 1),
                preview_sample(state, 2),
                preview_sample(state, 3),
            ))
            .style(|s| {
                s.gap(10.0)
                    .padding(10.0)
                    .margin_top(10.0)
                    .background(Color::WHITE)
                    .border(1.0)
                    .border_color(Color::rgb8(238, 238, 238))
                    .border_radius(6.0)
            }),
        ))
        .style(|s| s.flex_grow(1.0)),
    ))
    .style(|s| {
        s.items_center()
            .gap(constants::GAP)
            .padding(constants::PADDING)
            .background(Color::rgb8(249, 249, 249))
            .border(1.0)
            .border_color(Color::rgb8(224, 224, 224))
            .border_radius(constants::RADIUS)
    })
}

fn swatch(state: RwSignal<DecoratedState>) -> impl IntoView {
    container(
        label(|| lucide_icons::Icon::Pencil.unicode().to_string()).style(move |s| {
            s.font_size(constants::ICON_SIZE)
                .font_family("lucide".to_string())
                .color(paint(contrast_color(state.get().value())))
        }),
    )
    .style(move |s| {
        let swatch = state.get().swatch();
        s.size(constants::SWATCH_SIZE, constants::SWATCH_SIZE)
            .items_center()
            .justify_center()
            .border_radius(constants::RADIUS)
            .border(constants::SWATCH_BORDER)
            .border_color(paint(swatch.border))
            .background(paint(swatch.fill))
    })
}

fn hex_field(state: RwSignal<DecoratedState>, text: RwSignal<String>) -> impl IntoView {
    text_input(text)
        .style(move |s| {
            let field = state.get().hex_field();
            s.width(constants::HEX_WIDTH)
                .padding(10.0)
                .font_size(constants::HEX_FONT)
                .font_family("monospace".to_string())
                .color(paint(field.text))
                .background(paint(field.background))
                .border(constants::HEX_BORDER)
                .border_color(paint(field.effective_border()))
                .border_radius(6.0)
        })
        .on_event_stop(floem::event::EventListener::FocusGained, move |_| {
            state.update(|st| st.set_focused(true));
        })
        .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
            state.update(|st| st.set_focused(false));
        })
}

fn preview_sample(state: RwSignal<DecoratedState>, index: usize) -> impl IntoView {
    label(move || state.get().previews()[index].label()).style(move |s| {
        let sample = state.get().previews()[index];
        let s = s
            .font_size(constants::PREVIEW_FONT)
            .width(constants::PREVIEW_WIDTH)
            .padding(5.0)
            .border_radius(4.0)
            .justify_center();
        let s = match sample.text {
            Some(c) => s.color(paint(c)),
            None => s,
        };
        let s = match sample.background {
            Some(c) => s.background(paint(c)),
            None => s,
        };
        match sample.border {
            Some(c) => s.border(2.0).border_color(paint(c)),
            None => s,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_text_is_capped_at_seven_chars() {
        assert_eq!(cap_hex_len("#3b82f6"), None);
        assert_eq!(cap_hex_len("#3b82f6a"), Some("#3b82f6".to_string()));
        assert_eq!(cap_hex_len("3b82f6aa"), Some("3b82f6a".to_string()));
        assert_eq!(cap_hex_len(""), None);
    }
}
