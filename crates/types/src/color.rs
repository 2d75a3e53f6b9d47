//! Foundational color type used throughout clockface.
//!
//! Hosts hand the engine fully-resolved colors; this type accepts the two
//! encodings configuration layers commonly use (packed ARGB integers and
//! `#RRGGBB` / `#AARRGGBB` hex strings) and normalizes them to f64 RGBA.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RGBA color with alpha channel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// Error parsing a hex color string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("hex color must start with '#', got {0:?}")]
    MissingHash(String),
    #[error("hex color must have 6 or 8 digits, got {0} digits")]
    BadLength(usize),
    #[error("invalid hex digit in color string {0:?}")]
    BadDigit(String),
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        (
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8,
            (self.a * 255.0) as u8,
        )
    }

    /// Create from a packed 0xAARRGGBB integer
    pub fn from_argb(packed: u32) -> Self {
        Self::from_rgba8(
            ((packed >> 16) & 0xFF) as u8,
            ((packed >> 8) & 0xFF) as u8,
            (packed & 0xFF) as u8,
            ((packed >> 24) & 0xFF) as u8,
        )
    }

    /// Parse `#RRGGBB` or `#AARRGGBB`. Six-digit colors are fully opaque.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::BadDigit(s.to_string()))?;
        match digits.len() {
            6 => Ok(Self::from_argb(0xFF00_0000 | packed)),
            8 => Ok(Self::from_argb(packed)),
            n => Err(ColorParseError::BadLength(n)),
        }
    }

    /// Apply to Cairo context
    #[cfg(feature = "cairo")]
    pub fn apply_to_cairo(&self, cr: &cairo::Context) {
        cr.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_six_digits_is_opaque() {
        let c = Color::from_hex("#A9ADB0").unwrap();
        assert_eq!(c.to_rgba8(), (0xA9, 0xAD, 0xB0, 0xFF));
    }

    #[test]
    fn test_hex_eight_digits_carries_alpha() {
        let c = Color::from_hex("#80FF0000").unwrap();
        let (r, g, b, a) = c.to_rgba8();
        assert_eq!((r, g, b), (0xFF, 0, 0));
        assert_eq!(a, 0x80);
    }

    #[test]
    fn test_hex_rejects_bad_input() {
        assert_eq!(
            Color::from_hex("A9ADB0"),
            Err(ColorParseError::MissingHash("A9ADB0".to_string()))
        );
        assert_eq!(Color::from_hex("#ABC"), Err(ColorParseError::BadLength(3)));
        assert!(matches!(
            Color::from_hex("#GGGGGG"),
            Err(ColorParseError::BadDigit(_))
        ));
    }

    #[test]
    fn test_rgba8_round_trip() {
        let c = Color::from_rgba8(12, 34, 56, 78);
        assert_eq!(c.to_rgba8(), (12, 34, 56, 78));
    }

    #[test]
    fn test_packed_argb() {
        let c = Color::from_argb(0xFFA9_ADB0);
        assert_eq!(c.to_rgba8(), (0xA9, 0xAD, 0xB0, 0xFF));
    }
}
