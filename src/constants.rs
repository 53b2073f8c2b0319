//! Sizing, color, timing, and styling constants for the picker.

use std::time::Duration;

/// Simulated round trip of the color archive
pub const ARCHIVE_LATENCY: Duration = Duration::from_millis(700);

/// 1D slider track height
pub const SLIDER_HEIGHT: f32 = 16.0;

/// Thumb radius on 1D sliders
pub const THUMB_RADIUS: f64 = 7.0;

/// Border radius for swatches and buttons
pub const RADIUS: f32 = 4.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding around the whole picker
pub const PADDING: f32 = 8.0;

/// Live swatch edge length
pub const SWATCH_SIZE: f32 = 96.0;

/// Saved-color swatch edge length
pub const SAVED_SWATCH_SIZE: f32 = 32.0;

/// Channel read-out width
pub const READOUT_WIDTH: f32 = 28.0;

/// Hex input field width
pub const HEX_INPUT_WIDTH: f32 = 64.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;

/// Label font size
pub const LABEL_FONT: f32 = 10.0;

/// Default picker window size
pub const WINDOW_SIZE: (f64, f64) = (280.0, 420.0);
