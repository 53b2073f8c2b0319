//! Text input, buttons, and read-outs for the picker screen.

use floem::event::EventPropagation;
use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate, Trigger};
use floem::View;

use crate::constants;
use crate::math;

/// The hex text field.
///
/// Edits only change the text. `on_enter` runs on Enter; nothing is pushed
/// into the sliders until Apply. Focus is dropped whenever `end_editing`
/// fires.
pub(crate) fn hex_input(
    hex_text: RwSignal<String>,
    end_editing: Trigger,
    on_enter: impl Fn() + 'static,
) -> impl IntoView {
    let input = text_input(hex_text)
        .style(|s| {
            s.width(constants::HEX_INPUT_WIDTH)
                .padding(2.0)
                .font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .background(Color::WHITE)
                .border(1.0)
                .border_color(Color::rgb8(200, 200, 200))
                .border_radius(3.0)
        })
        .on_event(floem::event::EventListener::KeyDown, move |e| {
            if let floem::event::Event::KeyDown(ke) = e {
                if ke.key.logical_key
                    == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
                {
                    on_enter();
                    return EventPropagation::Stop;
                }
            }
            EventPropagation::Continue
        });
    let input_id = input.id();

    create_effect(move |first: Option<()>| {
        end_editing.track();
        if first.is_some() {
            input_id.clear_focus();
        }
    });

    h_stack((
        label(|| "#").style(|s| {
            s.font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .color(Color::rgb8(120, 120, 120))
        }),
        input,
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// A small text button.
pub(crate) fn action_button(text: &'static str, on_press: impl Fn() + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(label(move || text).style(move |s| {
        let c = if pressed.get() {
            Color::rgb8(40, 40, 40)
        } else {
            Color::rgb8(70, 70, 70)
        };
        s.font_size(constants::INPUT_FONT).color(c)
    }))
    .style(|s| {
        s.padding_horiz(8.0)
            .padding_vert(3.0)
            .items_center()
            .justify_center()
            .border(1.0)
            .border_color(Color::rgb8(200, 200, 200))
            .border_radius(constants::RADIUS)
            .background(Color::WHITE)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        on_press();
    })
}

/// 0–255 read-out of one channel input; a dash until it has reported.
pub(crate) fn channel_readout(value: RwSignal<Option<f64>>) -> impl IntoView {
    label(move || readout_text(value.get())).style(|s| {
        s.width(constants::READOUT_WIDTH)
            .font_size(constants::INPUT_FONT)
            .font_family("monospace".to_string())
            .color(Color::rgb8(120, 120, 120))
    })
}

fn readout_text(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}", math::channel_to_byte(v)),
        None => "-".to_string(),
    }
}

/// A small copy button that copies the result of `get_text` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(err) = clipboard.set_text(text) {
                tracing::debug!(%err, "clipboard write failed");
            }
        }
        Err(err) => tracing::debug!(%err, "clipboard unavailable"),
    }
}
