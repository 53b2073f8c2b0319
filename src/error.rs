//! Error type for hex color parsing.

/// Why a hex string could not be read as an RGB color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    #[error("hex color is empty")]
    Empty,

    #[error("invalid hex digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },

    #[error("hex value {0} does not fit in RRGGBB")]
    OutOfRange(String),
}
