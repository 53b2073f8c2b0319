//! Standalone demo: a main window that opens the color picker.
//!
//! Run with `RUST_LOG=floem_rgb_picker=debug` to watch archive traffic.

use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::create_effect;
use floem::window::WindowConfig;
use floem_rgb_picker::{present, ColorArchive, PickerConfig, SolidColor, UiScheduler};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let archive = ColorArchive::new(Rc::new(UiScheduler));
    let chosen = RwSignal::new(SolidColor::from_hex("3B82F6").unwrap_or_default());

    floem::Application::new()
        .window(
            move |_| {
                app_view(archive, chosen).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((240.0, 160.0))
                    .title("floem-rgb-picker"),
            ),
        )
        .run();
}

fn app_view(archive: ColorArchive, chosen: RwSignal<SolidColor>) -> impl IntoView {
    v_stack((
        empty().style(move |s| {
            s.size(64.0, 64.0)
                .border_radius(4.0)
                .background(chosen.get().to_paint())
        }),
        label(move || chosen.get().to_hex()),
        label(|| "Choose color...")
            .style(|s| {
                s.padding(4.0)
                    .border(1.0)
                    .border_radius(4.0)
                    .cursor(floem::style::CursorStyle::Pointer)
            })
            .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
                let config = PickerConfig::default().initial(Some(chosen.get_untracked()));
                let picker = present(archive.clone(), config);
                let selected = picker.selected();
                create_effect(move |_| {
                    if let Some(color) = selected.get() {
                        chosen.set(color);
                        picker.dismiss();
                    }
                });
            }),
    ))
    .style(|s| s.size_full().items_center().justify_center().gap(8.0))
}
