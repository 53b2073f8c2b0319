//! Presenting a color screen in its own window.
//!
//! The screen is built inside the new window's view function, so its
//! signals and effects belong to the window's reactive scope and are torn
//! down with the window. Only the selection signal outlives it.

use std::cell::Cell;
use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::window::{WindowConfig, WindowId};

use crate::archive::ColorArchive;
use crate::color::SolidColor;
use crate::config::PickerConfig;
use crate::lifetime::Lifetime;
use crate::screen::ColorScreen;

/// Handle to a presented picker window.
#[derive(Clone)]
pub struct PresentedPicker {
    selected: RwSignal<Option<SolidColor>>,
    lifetime: Lifetime,
    window: Rc<Cell<Option<WindowId>>>,
}

impl PresentedPicker {
    /// Set to the chosen color on every Done press.
    pub fn selected(&self) -> RwSignal<Option<SolidColor>> {
        self.selected
    }

    pub fn is_dismissed(&self) -> bool {
        !self.lifetime.is_alive()
    }

    /// Close the picker. In-flight archive completions become no-ops.
    pub fn dismiss(&self) {
        if !self.lifetime.end() {
            return;
        }
        tracing::debug!("picker dismissed by presenter");
        if let Some(id) = self.window.take() {
            floem::close_window(id);
        }
    }
}

/// Open a picker window backed by `archive`.
pub fn present(archive: ColorArchive, config: PickerConfig) -> PresentedPicker {
    let selected = RwSignal::new(None);
    let lifetime = Lifetime::new();
    let window = Rc::new(Cell::new(None));

    let window_config = WindowConfig::default()
        .size(config.window_size)
        .title(config.title.clone());

    let screen_lifetime = lifetime.clone();
    let screen_window = window.clone();
    floem::new_window(
        move |window_id| {
            screen_window.set(Some(window_id));
            let screen = ColorScreen::attach(archive, &config, selected, screen_lifetime);
            let hook_window = screen_window.clone();
            screen.set_on_dismiss(move || {
                if let Some(id) = hook_window.take() {
                    floem::close_window(id);
                }
            });
            let closing = screen.clone();
            let closed_window = screen_window.clone();
            crate::picker_view(&screen).on_event_stop(
                floem::event::EventListener::WindowClosed,
                move |_| {
                    // Closed from the title bar; the window is already gone.
                    closed_window.set(None);
                    closing.dismiss();
                },
            )
        },
        Some(window_config),
    );

    PresentedPicker {
        selected,
        lifetime,
        window,
    }
}
