use floem_color_field::color::{adjust_brightness, contrast_color, darken, normalize};
use floem_color_field::registry::on_mutations;
use floem_color_field::{
    ColorError, ColorPickers, DiscoveryTrigger, HexColor, MemoryPage, MutationBatch, Page,
    SyncConfig,
};

fn hex(s: &str) -> HexColor {
    normalize(s).unwrap()
}

fn admin_form() -> (MemoryPage, floem_color_field::ElementId) {
    let mut page = MemoryPage::new();
    let row = page.add_container(None, &["form-row"]);
    let input = page.add_color_input(Some(row), "#3b82f6");
    (page, input)
}

#[test]
fn decorated_fragment_matches_initial_value() {
    let (page, input) = admin_form();
    let pickers = ColorPickers::new(page, SyncConfig::default());

    let state = pickers.decorated().state(input).unwrap();
    assert_eq!(state.name(), "Blue (Primary)");
    assert_eq!(state.swatch().fill, hex("#3b82f6"));
    assert_eq!(state.swatch().border, darken(hex("#3b82f6"), 0.2));
    assert_eq!(state.hex_field().text, contrast_color(hex("#3b82f6")));
    assert_eq!(state.hex_field().text, HexColor::WHITE);
}

#[test]
fn rescanning_does_not_duplicate_bindings() {
    let (page, input) = admin_form();
    let mut pickers = ColorPickers::new(page, SyncConfig::default());
    pickers.decorated_mut().hex_input(input, "#10b981").unwrap();

    assert_eq!(pickers.initialize_color_pickers(), 0);
    assert_eq!(pickers.rescan_now(), 0);
    assert_eq!(pickers.decorated().bindings().len(), 1);
    // An existing binding keeps its state across passes.
    assert_eq!(
        pickers.decorated().state(input).unwrap().value(),
        hex("#10b981")
    );
}

#[test]
fn partial_hex_leaves_native_value_alone() {
    let (page, input) = admin_form();
    let mut pickers = ColorPickers::new(page, SyncConfig::default());
    let before = pickers.decorated().state(input).unwrap().clone();

    let err = pickers.decorated_mut().hex_input(input, "ab").unwrap_err();
    assert!(err.is_invalid_hex());

    let binding = pickers.decorated().binding(input).unwrap();
    assert_eq!(binding.hex_draft(), "#ab");
    assert_eq!(binding.state(), &before);

    pickers.decorated_mut().hex_input(input, "#abcdef").unwrap();
    let binding = pickers.decorated().binding(input).unwrap();
    assert_eq!(binding.state().value(), hex("#abcdef"));
    assert_eq!(binding.hex_draft(), "#abcdef");
    assert_eq!(binding.state().name(), "Custom color");
}

#[test]
fn picker_change_recomputes_everything() {
    let (page, input) = admin_form();
    let mut pickers = ColorPickers::new(page, SyncConfig::default());

    let state = pickers.decorated_mut().picker_input(input, "#ffffff").unwrap();
    assert_eq!(state.swatch().border, hex("#cccccc"));
    assert_eq!(state.hex_field().text, HexColor::BLACK);
    assert_eq!(state.name(), "White");
    assert!(state
        .previews()
        .iter()
        .any(|p| p.border == Some(HexColor::WHITE)));
}

#[test]
fn swatch_click_forwards_to_native_input() {
    let (page, input) = admin_form();
    let pickers = ColorPickers::new(page, SyncConfig::default());
    assert_eq!(pickers.decorated().swatch_click(input).unwrap(), input);
}

#[test]
fn added_fields_are_picked_up_by_mutations() {
    let (page, first) = admin_form();
    let mut pickers = ColorPickers::new(page, SyncConfig::default());
    pickers.page_mut().take_added();

    let row = pickers.page_mut().add_container(None, &["form-row"]);
    let second = pickers.page_mut().add_color_input(Some(row), "");
    let added = pickers.page_mut().take_added();

    let bound = pickers.observe(&[MutationBatch { added_nodes: added }]);
    assert_eq!(bound, 1);
    assert_eq!(
        pickers.decorated().state(second).unwrap().value(),
        HexColor::BLACK
    );
    assert!(pickers.decorated().state(first).is_some());

    // Repeated notifications are harmless.
    assert_eq!(on_mutations(&mut pickers, &[MutationBatch { added_nodes: 2 }]), 0);
}

#[test]
fn markup_widget_round_trip() {
    let mut page = MemoryPage::new();
    let widget = page.add_container(None, &["color-picker-widget"]);
    let input = page.add_color_input(Some(widget), "#808080");
    let field = page.add_text_input(Some(widget), &["color-hex-input"], "#3b82f6");
    let mut pickers = ColorPickers::new(page, SyncConfig::default());

    let binding = pickers.markup().binding(widget).unwrap();
    assert_eq!(binding.input(), input);
    assert_eq!(binding.hex_field(), field);
    assert_eq!(binding.state().hex_text(), "#808080");
    assert_eq!(binding.state().border(), hex("#5a5a5a"));

    let markup = pickers.markup_mut();
    assert!(markup.hex_input(field, "#12").is_err());
    let binding = markup.binding(widget).unwrap();
    assert_eq!(binding.hex_draft(), "#12");
    assert_eq!(binding.state().value(), hex("#808080"));

    let state = markup.hex_blur(field, "f00").unwrap();
    assert_eq!(state.hex_text(), "#ff0000");
    assert_eq!(state.value(), hex("#ff0000"));
    assert_eq!(state.border(), adjust_brightness(hex("#ff0000"), -0.3));

    let state = markup.picker_input(input, "#00ff00").unwrap();
    assert_eq!(state.hex_text(), "#00ff00");
}

#[test]
fn events_for_unbound_elements_are_reported() {
    let mut pickers = ColorPickers::new(MemoryPage::new(), SyncConfig::default());
    let stray = floem_color_field::ElementId(42);
    assert!(matches!(
        pickers.markup_mut().hex_input(stray, "#fff"),
        Err(ColorError::Unbound(_))
    ));
    assert!(matches!(
        pickers.decorated_mut().hex_focus(stray),
        Err(ColorError::Unbound(_))
    ));
}

#[test]
fn removed_elements_are_pruned() {
    let (page, input) = admin_form();
    let mut pickers = ColorPickers::new(page, SyncConfig::default());
    let row = pickers.page().parent(input).unwrap();
    pickers.page_mut().remove(row);

    assert_eq!(pickers.prune(), 1);
    assert!(pickers.decorated().state(input).is_none());
}

#[test]
fn custom_config_changes_discovery_and_shading() {
    let config = SyncConfig::from_json(
        r##"{
            "widget_class": "swatch-widget",
            "hex_input_class": "swatch-hex",
            "swatch_border_darken": 0.5,
            "default_color": "#ffffff"
        }"##,
    )
    .unwrap();

    let mut page = MemoryPage::new();
    let widget = page.add_container(None, &["swatch-widget"]);
    let input = page.add_color_input(Some(widget), "");
    page.add_text_input(Some(widget), &["swatch-hex"], "");
    let pickers = ColorPickers::new(page, config);

    let state = pickers.decorated().state(input).unwrap();
    assert_eq!(state.value(), HexColor::WHITE);
    assert_eq!(state.swatch().border, hex("#7f7f7f"));
    assert!(pickers.markup().binding(widget).is_some());
}
