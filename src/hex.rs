//! Hex adapter: color → text for display, text → sliders on Apply.

use floem::reactive::{RwSignal, SignalGet, Trigger};

use crate::channels::ChannelInputs;
use crate::color::SolidColor;
use crate::math;

/// Color → `RRGGBB`, uppercase, each channel rounded to nearest.
pub fn format_hex(color: SolidColor) -> String {
    color.to_hex()
}

/// `RRGGBB` → color. `None` for anything that is not a hex number in
/// 0–FFFFFF.
///
/// Values above FFFFFF are rejected rather than masked to their low 24
/// bits, so `"1000000"` is `None` and not black.
pub fn parse_hex(text: &str) -> Option<SolidColor> {
    SolidColor::from_hex(text)
}

/// Apply the hex text to the sliders.
///
/// The text is sampled once, now. On a parse failure nothing changes and
/// `false` is returned. On success every input is driven to `byte / 255`
/// and `end_editing` fires so the text field gives up focus. A text signal
/// whose scope is already disposed reads as nothing to apply.
pub fn apply_hex(hex_text: RwSignal<String>, inputs: ChannelInputs, end_editing: Trigger) -> bool {
    let Some(text) = hex_text.try_get_untracked() else {
        tracing::debug!("hex text disposed, nothing to apply");
        return false;
    };
    match math::parse_hex_rgb(&text) {
        Ok((r, g, b)) => {
            tracing::debug!(%text, r, g, b, "applying hex");
            inputs.set_rgb(r, g, b);
            end_editing.notify();
            true
        }
        Err(err) => {
            tracing::debug!(%text, %err, "ignoring hex");
            false
        }
    }
}
