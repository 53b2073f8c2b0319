//! SolidColor type — the public color representation for floem-rgb-picker.
//!
//! Stores opaque RGB as f64 values in 0.0–1.0 range. Hex strings are the
//! 8-bit view of the same value: `RRGGBB`, uppercase, zero padded.

use std::fmt;
use std::str::FromStr;

use floem::peniko::Color;

use crate::error::HexError;
use crate::math;

/// Opaque RGB color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidColor {
    r: f64,
    g: f64,
    b: f64,
}

impl SolidColor {
    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
}

impl Default for SolidColor {
    fn default() -> Self {
        Self {
            r: 0.5,
            g: 0.5,
            b: 0.5,
        }
    }
}

impl SolidColor {
    /// Create from 0–255 RGB values.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: math::byte_to_channel(r),
            g: math::byte_to_channel(g),
            b: math::byte_to_channel(b),
        }
    }

    /// Create from channel fractions. Each one is clamped to 0.0–1.0.
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: math::clamp_channel(r),
            g: math::clamp_channel(g),
            b: math::clamp_channel(b),
        }
    }

    /// Convert to 0–255 RGB tuple, each channel rounded to nearest.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (
            math::channel_to_byte(self.r),
            math::channel_to_byte(self.g),
            math::channel_to_byte(self.b),
        )
    }

    /// Parse a hex integer (optional `#`, up to 6 digits, `RRGGBB` order).
    ///
    /// Returns `None` for anything that is not a hex number in 0–FFFFFF.
    /// Use [`str::parse`] to learn why a string was rejected.
    pub fn from_hex(hex: &str) -> Option<Self> {
        hex.parse().ok()
    }

    /// Format as 6 uppercase hex digits (no `#` prefix).
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Paint color for Floem views.
    pub fn to_paint(&self) -> Color {
        Color::rgba(self.r, self.g, self.b, 1.0)
    }
}

impl FromStr for SolidColor {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (r, g, b) = math::parse_hex_rgb(s)?;
        Ok(Self::from_rgb(r, g, b))
    }
}

impl fmt::Display for SolidColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
