//! Channel inputs and the color derivation graph.
//!
//! Each slider owns an observable `Option<f64>`; `None` until the slider
//! has reported. The graph combines the latest value of all three into one
//! [`SolidColor`] and writes every emission to the swatch and then to the
//! hex text, synchronously.

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};

use crate::color::SolidColor;
use crate::math;

/// The three channel-fraction inputs.
#[derive(Clone, Copy)]
pub struct ChannelInputs {
    pub red: RwSignal<Option<f64>>,
    pub green: RwSignal<Option<f64>>,
    pub blue: RwSignal<Option<f64>>,
}

impl ChannelInputs {
    /// Inputs that have not reported yet.
    pub fn new() -> Self {
        Self {
            red: RwSignal::new(None),
            green: RwSignal::new(None),
            blue: RwSignal::new(None),
        }
    }

    /// Inputs seeded with `color`.
    pub fn with_color(color: SolidColor) -> Self {
        Self {
            red: RwSignal::new(Some(color.r())),
            green: RwSignal::new(Some(color.g())),
            blue: RwSignal::new(Some(color.b())),
        }
    }

    /// The latest value of each input, once all three have reported.
    pub fn combined(&self) -> Option<SolidColor> {
        match (
            self.red.get_untracked(),
            self.green.get_untracked(),
            self.blue.get_untracked(),
        ) {
            (Some(r), Some(g), Some(b)) => Some(SolidColor::from_channels(r, g, b)),
            _ => None,
        }
    }

    /// Drive all three inputs, red first. Every assignment notifies.
    pub fn set_color(&self, color: SolidColor) {
        self.red.set(Some(color.r()));
        self.green.set(Some(color.g()));
        self.blue.set(Some(color.b()));
    }

    /// Drive all three inputs from bytes (`v / 255`).
    pub fn set_rgb(&self, r: u8, g: u8, b: u8) {
        self.red.set(Some(math::byte_to_channel(r)));
        self.green.set(Some(math::byte_to_channel(g)));
        self.blue.set(Some(math::byte_to_channel(b)));
    }
}

impl Default for ChannelInputs {
    fn default() -> Self {
        Self::new()
    }
}

/// Where combined emissions are written.
#[derive(Clone, Copy)]
pub struct ColorSinks {
    pub swatch: RwSignal<Option<SolidColor>>,
    pub hex_text: RwSignal<String>,
}

/// Wire `inputs` to `sinks`.
///
/// Each input change emits once all three have a value. The swatch is
/// written before the hex text.
pub fn derive_color(inputs: ChannelInputs, sinks: ColorSinks) {
    create_effect(move |_| {
        let r = inputs.red.get();
        let g = inputs.green.get();
        let b = inputs.blue.get();
        let (Some(r), Some(g), Some(b)) = (r, g, b) else {
            return;
        };
        let color = SolidColor::from_channels(r, g, b);
        tracing::trace!(color = %color, "derived color");
        sinks.swatch.set(Some(color));
        sinks.hex_text.set(color.to_hex());
    });
}
