//! Channel math and hex decoding.
//! Channels are normalized f64 in 0.0–1.0; bytes are 0–255.

use crate::error::HexError;

/// Longest digit run that still fits in RRGGBB.
const MAX_HEX_DIGITS: usize = 6;

/// Fraction → byte. Clamped, rounded to nearest; NaN reads as 0.
pub(crate) fn channel_to_byte(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Byte → fraction.
pub(crate) fn byte_to_channel(v: u8) -> f64 {
    v as f64 / 255.0
}

/// Clamp a fraction into 0.0–1.0; NaN becomes 0.0.
pub(crate) fn clamp_channel(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Decode a hex integer (optional `#`, up to 6 digits) into (r, g, b).
///
/// Short input is read as a number, so `"FF"` is `(0, 0, 255)`. Anything
/// above FFFFFF is `OutOfRange`; the high bits are never masked away.
pub(crate) fn parse_hex_rgb(hex: &str) -> Result<(u8, u8, u8), HexError> {
    let stripped = hex.strip_prefix('#').unwrap_or(hex);
    if stripped.is_empty() {
        return Err(HexError::Empty);
    }
    if let Some((position, digit)) = stripped
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_hexdigit())
    {
        return Err(HexError::InvalidDigit { digit, position });
    }
    let significant = stripped.trim_start_matches('0');
    if significant.len() > MAX_HEX_DIGITS {
        return Err(HexError::OutOfRange(stripped.to_string()));
    }
    if significant.is_empty() {
        return Ok((0, 0, 0));
    }
    let n = u32::from_str_radix(significant, 16)
        .map_err(|_| HexError::OutOfRange(stripped.to_string()))?;
    Ok((
        ((n >> 16) & 0xFF) as u8,
        ((n >> 8) & 0xFF) as u8,
        (n & 0xFF) as u8,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_to_byte_rounds_to_nearest() {
        assert_eq!(channel_to_byte(0.0), 0);
        assert_eq!(channel_to_byte(1.0), 255);
        assert_eq!(channel_to_byte(0.5), 128);
        assert_eq!(channel_to_byte(0.2), 51);
    }

    #[test]
    fn channel_to_byte_clamps() {
        assert_eq!(channel_to_byte(-0.3), 0);
        assert_eq!(channel_to_byte(1.7), 255);
        assert_eq!(channel_to_byte(f64::NAN), 0);
    }

    #[test]
    fn byte_channel_round_trip() {
        for b in [0u8, 1, 17, 128, 254, 255] {
            assert_eq!(channel_to_byte(byte_to_channel(b)), b);
        }
    }

    #[test]
    fn parse_six_digits() {
        assert_eq!(parse_hex_rgb("FF0080"), Ok((255, 0, 128)));
        assert_eq!(parse_hex_rgb("1e293b"), Ok((30, 41, 59)));
        assert_eq!(parse_hex_rgb("#0000FF"), Ok((0, 0, 255)));
    }

    #[test]
    fn parse_short_input_as_integer() {
        assert_eq!(parse_hex_rgb("FF"), Ok((0, 0, 255)));
        assert_eq!(parse_hex_rgb("ABC"), Ok((0, 10, 188)));
        assert_eq!(parse_hex_rgb("0"), Ok((0, 0, 0)));
    }

    #[test]
    fn parse_leading_zeros_are_not_overflow() {
        assert_eq!(parse_hex_rgb("000000FF"), Ok((0, 0, 255)));
    }

    #[test]
    fn parse_rejects_non_hex() {
        assert_eq!(
            parse_hex_rgb("GGGGGG"),
            Err(HexError::InvalidDigit {
                digit: 'G',
                position: 0
            })
        );
        assert!(matches!(
            parse_hex_rgb("12 456"),
            Err(HexError::InvalidDigit { digit: ' ', position: 2 })
        ));
        assert!(parse_hex_rgb("+FF").is_err());
        assert!(parse_hex_rgb("-FF").is_err());
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(parse_hex_rgb(""), Err(HexError::Empty));
        assert_eq!(parse_hex_rgb("#"), Err(HexError::Empty));
    }

    #[test]
    fn parse_rejects_overflow() {
        assert_eq!(
            parse_hex_rgb("1000000"),
            Err(HexError::OutOfRange("1000000".into()))
        );
        assert!(parse_hex_rgb("FFFFFFFFFFFFFFFFFF").is_err());
    }
}
