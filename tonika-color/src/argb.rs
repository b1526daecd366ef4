//! # Packed ARGB colors
//!
//! This module provides the [`Argb`] type, a color packed into a single
//! 32-bit unsigned integer, together with the wraparound integer helpers
//! every packing operation is built on.
//!
//! ## Channel layout
//!
//! Alpha occupies bits 24 to 31, red 16 to 23, green 8 to 15 and blue 0 to 7.
//! This matches the integer representation used by the Material color
//! utilities and by host graphics APIs.
//!
//! ## Usage
//!
//! ```
//! use tonika_color::Argb;
//!
//! let blue = Argb::parse_hex("#0000ff").unwrap();
//! assert_eq!(blue.blue(), 255);
//! assert_eq!(blue.alpha(), 1.0);
//! assert_eq!(blue.to_hex(), "#0000ff");
//! ```

use std::fmt;

use crate::{ColorError, space::Rgb};

/// Reduces a signed integer to an unsigned 32-bit value, wrapping negative
/// inputs per two's-complement arithmetic.
///
/// `uint32(-1)` is `4_294_967_295` and `uint32(1 << 32)` is `0`.
#[must_use]
pub const fn uint32(value: i64) -> u32 {
    value.rem_euclid(1 << 32) as u32
}

/// Reduces a signed integer to an unsigned 8-bit value, wrapping negative
/// inputs per two's-complement arithmetic.
///
/// `uint8(-1)` is `255` and `uint8(300)` is `44`.
#[must_use]
pub const fn uint8(value: i64) -> u8 {
    value.rem_euclid(1 << 8) as u8
}

/// A color packed into a 32-bit unsigned integer, alpha in the top byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Argb(pub u32);

impl Argb {
    /// Wraps a raw packed value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Packs four channel bytes into a single value.
    #[must_use]
    pub const fn from_channels(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self(uint32(
            ((alpha as i64) << 24) | ((red as i64) << 16) | ((green as i64) << 8) | blue as i64,
        ))
    }

    /// The alpha channel scaled into `[0, 1]`.
    ///
    /// A zero alpha byte yields exactly `0.0`; extraction is literal and is
    /// never defaulted to opaque.
    #[must_use]
    pub fn alpha(self) -> f64 {
        f64::from((self.0 >> 24) & 0xFF) / 255.0
    }

    /// The red channel byte.
    #[must_use]
    pub const fn red(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// The green channel byte.
    #[must_use]
    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// The blue channel byte.
    #[must_use]
    pub const fn blue(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Unpacks into an [`Rgb`] shape.
    ///
    /// The `opacity` field is present iff `force_opacity` is set or the
    /// packed alpha is below 1.
    #[must_use]
    pub fn to_rgb(self, force_opacity: bool) -> Rgb {
        let alpha = self.alpha();
        Rgb {
            r: self.red(),
            g: self.green(),
            b: self.blue(),
            opacity: if force_opacity || alpha < 1.0 {
                Some(alpha)
            } else {
                None
            },
        }
    }

    /// Packs an [`Rgb`] shape.
    ///
    /// A stated opacity may be expressed either in `[0, 1]` or as a byte in
    /// `[0, 255]`; values above 1 are taken as already byte-scaled. A missing
    /// opacity packs as fully opaque.
    ///
    /// # Errors
    ///
    /// Fails with [`ColorError::InvalidColorValue`] when the stated opacity
    /// is not a finite number.
    pub fn from_rgb(rgb: &Rgb) -> Result<Self, ColorError> {
        let alpha = match rgb.opacity {
            None => 255,
            Some(a) if !a.is_finite() => {
                return Err(ColorError::InvalidColorValue(format!(
                    "opacity must be finite, got {a}"
                )));
            }
            Some(a) if a > 1.0 => uint8(a as i64),
            Some(a) => uint8((a * 255.0).round() as i64),
        };
        Ok(Self::from_channels(alpha, rgb.r, rgb.g, rgb.b))
    }

    /// Parses a hex color string.
    ///
    /// Accepts `#rgb`, `#rrggbb` and `#rrggbbaa`, case-insensitive; the
    /// leading `#` may be omitted. The 8-digit form carries alpha in the
    /// trailing byte.
    ///
    /// # Errors
    ///
    /// Fails with [`ColorError::InvalidHexColor`] for any other input.
    pub fn parse_hex(input: &str) -> Result<Self, ColorError> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        let invalid = || ColorError::InvalidHexColor(input.to_string());

        let nibble = |c: char| c.to_digit(16).map(|d| d as u8);
        let mut values = Vec::with_capacity(digits.len());
        for c in digits.chars() {
            values.push(nibble(c).ok_or_else(invalid)?);
        }

        match *values.as_slice() {
            [r, g, b] => Ok(Self::from_channels(
                0xFF,
                (r << 4) | r,
                (g << 4) | g,
                (b << 4) | b,
            )),
            [r1, r0, g1, g0, b1, b0] => Ok(Self::from_channels(
                0xFF,
                (r1 << 4) | r0,
                (g1 << 4) | g0,
                (b1 << 4) | b0,
            )),
            [r1, r0, g1, g0, b1, b0, a1, a0] => Ok(Self::from_channels(
                (a1 << 4) | a0,
                (r1 << 4) | r0,
                (g1 << 4) | g0,
                (b1 << 4) | b0,
            )),
            _ => Err(invalid()),
        }
    }

    /// Formats as a lowercase hex string: `#rrggbb` when fully opaque,
    /// `#rrggbbaa` otherwise.
    #[must_use]
    pub fn to_hex(self) -> String {
        let alpha = ((self.0 >> 24) & 0xFF) as u8;
        if alpha == 0xFF {
            format!("#{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue())
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.red(),
                self.green(),
                self.blue(),
                alpha
            )
        }
    }

    /// Composites `overlay` over this color in linear sRGB space.
    ///
    /// `alpha` controls the overlay weight and is clamped to `[0, 1]`. The
    /// alpha bytes of both inputs are interpolated with the same weight.
    #[must_use]
    pub fn blend_over(self, overlay: Argb, alpha: f64) -> Argb {
        let weight = alpha.clamp(0.0, 1.0);
        let channel = |base: u8, over: u8| {
            let base = srgb_to_linear(f64::from(base) / 255.0);
            let over = srgb_to_linear(f64::from(over) / 255.0);
            let mixed = over * weight + base * (1.0 - weight);
            (linear_to_srgb(mixed) * 255.0 + 0.5) as u8
        };
        let alpha_byte = {
            let base = self.alpha();
            let over = overlay.alpha();
            ((over * weight + base * (1.0 - weight)) * 255.0 + 0.5) as u8
        };
        Self::from_channels(
            alpha_byte,
            channel(self.red(), overlay.red()),
            channel(self.green(), overlay.green()),
            channel(self.blue(), overlay.blue()),
        )
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Argb> for u32 {
    fn from(value: Argb) -> Self {
        value.0
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Decodes one nonlinear sRGB channel in `[0, 1]` to linear light.
#[must_use]
pub fn srgb_to_linear(v: f64) -> f64 {
    let v = v.clamp(0.0, 1.0);
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Encodes one linear-light channel in `[0, 1]` to nonlinear sRGB.
#[must_use]
pub fn linear_to_srgb(v: f64) -> f64 {
    let v = v.clamp(0.0, 1.0);
    if v <= 0.003_130_8 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uint32_wraps() {
        assert_eq!(uint32(-1), 4_294_967_295);
        assert_eq!(uint32(1 << 32), 0);
        for n in [-300, -1, 0, 1, 255, 65_536, 123_456_789] {
            assert_eq!(uint32(n), uint32(n + (1 << 32)));
        }
    }

    #[test]
    fn test_uint8_wraps() {
        assert_eq!(uint8(-1), 255);
        assert_eq!(uint8(300), 44);
        for n in [-512, -300, -1, 0, 44, 255, 256, 1000] {
            assert_eq!(uint8(n), uint8(n + 256));
        }
    }

    #[test]
    fn test_channel_round_trip() {
        for (a, r, g, b) in [
            (255, 0, 0, 0),
            (255, 255, 255, 255),
            (128, 0, 255, 0),
            (0, 255, 0, 0),
            (17, 34, 51, 68),
        ] {
            let packed = Argb::from_channels(a, r, g, b);
            assert_eq!(packed.red(), r);
            assert_eq!(packed.green(), g);
            assert_eq!(packed.blue(), b);
            assert!((packed.alpha() - f64::from(a) / 255.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_opaque_blue_omits_opacity() {
        let rgb = Argb::new(0xFF_00_00_FF).to_rgb(false);
        assert_eq!((rgb.r, rgb.g, rgb.b), (0, 0, 255));
        assert_eq!(rgb.opacity, None);
    }

    #[test]
    fn test_half_alpha_green_states_opacity() {
        let rgb = Argb::new(0x80_00_FF_00).to_rgb(false);
        assert_eq!((rgb.r, rgb.g, rgb.b), (0, 255, 0));
        assert_eq!(rgb.opacity, Some(128.0 / 255.0));
    }

    #[test]
    fn test_zero_alpha_red_is_literal() {
        // A fully transparent color reports opacity 0, not a defaulted 1.
        let rgb = Argb::new(0x00_FF_00_00).to_rgb(false);
        assert_eq!((rgb.r, rgb.g, rgb.b), (255, 0, 0));
        assert_eq!(rgb.opacity, Some(0.0));
    }

    #[test]
    fn test_force_opacity() {
        let rgb = Argb::new(0xFF_01_02_03).to_rgb(true);
        assert_eq!(rgb.opacity, Some(1.0));
    }

    #[test]
    fn test_pack_rgb_unit_and_byte_alpha() {
        let unit = Rgb {
            r: 1,
            g: 2,
            b: 3,
            opacity: Some(0.5),
        };
        assert_eq!(Argb::from_rgb(&unit).unwrap(), Argb::new(0x80_01_02_03));

        let byte = Rgb {
            r: 1,
            g: 2,
            b: 3,
            opacity: Some(128.0),
        };
        assert_eq!(Argb::from_rgb(&byte).unwrap(), Argb::new(0x80_01_02_03));

        let opaque = Rgb {
            r: 1,
            g: 2,
            b: 3,
            opacity: None,
        };
        assert_eq!(Argb::from_rgb(&opaque).unwrap(), Argb::new(0xFF_01_02_03));
    }

    #[test]
    fn test_pack_rgb_rejects_non_finite_opacity() {
        let bad = Rgb {
            r: 0,
            g: 0,
            b: 0,
            opacity: Some(f64::NAN),
        };
        assert!(matches!(
            Argb::from_rgb(&bad),
            Err(ColorError::InvalidColorValue(_))
        ));
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(Argb::parse_hex("#abc").unwrap(), Argb::new(0xFF_AA_BB_CC));
        assert_eq!(
            Argb::parse_hex("#A1B2C3").unwrap(),
            Argb::new(0xFF_A1_B2_C3)
        );
        assert_eq!(Argb::parse_hex("a1b2c3").unwrap(), Argb::new(0xFF_A1_B2_C3));
        assert_eq!(
            Argb::parse_hex("#a1b2c380").unwrap(),
            Argb::new(0x80_A1_B2_C3)
        );
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        for bad in ["", "#", "#ab", "#abcd", "#ggg", "0x123456", "##abc"] {
            assert!(matches!(
                Argb::parse_hex(bad),
                Err(ColorError::InvalidHexColor(_))
            ));
        }
    }

    #[test]
    fn test_hex_round_trip() {
        assert_eq!(Argb::new(0xFF_A1_B2_C3).to_hex(), "#a1b2c3");
        assert_eq!(Argb::new(0x80_A1_B2_C3).to_hex(), "#a1b2c380");
        let parsed = Argb::parse_hex("#a1b2c380").unwrap();
        assert_eq!(Argb::parse_hex(&parsed.to_hex()).unwrap(), parsed);
    }

    #[test]
    fn test_blend_over_endpoints() {
        let base = Argb::new(0xFF_00_00_00);
        let overlay = Argb::new(0xFF_FF_FF_FF);
        assert_eq!(base.blend_over(overlay, 0.0), base);
        assert_eq!(base.blend_over(overlay, 1.0), overlay);
        let mid = base.blend_over(overlay, 0.5);
        // Linear-space midpoint between black and white sits well above the
        // nonlinear midpoint of 128.
        assert!(mid.red() > 150);
        assert_eq!(mid.red(), mid.green());
        assert_eq!(mid.green(), mid.blue());
    }
}
