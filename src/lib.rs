//! # floem-rgb-picker
//!
//! An RGB color picker screen for [Floem](https://github.com/lapce/floem).
//!
//! Three channel sliders derive a live color shown in a swatch and as
//! `RRGGBB` text. Editing the text and pressing Apply drives the sliders
//! back. Save and Load round-trip one color through a single-slot
//! [`ColorArchive`] with simulated latency.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::rc::Rc;
//!
//! use floem_rgb_picker::{present, ColorArchive, PickerConfig, UiScheduler};
//!
//! let archive = ColorArchive::new(Rc::new(UiScheduler));
//! let picker = present(archive, PickerConfig::default());
//! // Watch `picker.selected()` for the color chosen with Done.
//! ```

mod archive;
mod channel_slider;
mod channels;
mod color;
mod config;
mod constants;
mod error;
mod hex;
mod inputs;
mod lifetime;
mod math;
mod present;
mod scheduler;
mod screen;

pub use archive::ColorArchive;
pub use channels::{derive_color, ChannelInputs, ColorSinks};
pub use color::SolidColor;
pub use config::PickerConfig;
pub use constants::ARCHIVE_LATENCY;
pub use error::HexError;
pub use hex::{apply_hex, format_hex, parse_hex};
pub use lifetime::Lifetime;
pub use present::{present, PresentedPicker};
pub use scheduler::{ManualScheduler, Scheduler, UiScheduler};
pub use screen::ColorScreen;

use std::sync::Once;

use floem::prelude::*;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the view for `screen`, for embedding in an existing window.
///
/// Loads the icon font on first use.
pub fn picker_view(screen: &ColorScreen) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    screen.view()
}
