//! Standalone demo: opens a window with the decorated color field.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_color_field::{color_field, HexColor};

fn main() {
    env_logger::init();

    let color = RwSignal::new("#3b82f6".parse::<HexColor>().unwrap());

    floem::Application::new()
        .window(
            move |_| {
                color_field(color).on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((420.0, 220.0))
                    .title("floem-color-field"),
            ),
        )
        .run();
}
