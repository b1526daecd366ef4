//! # Color shapes and space adapters
//!
//! This module defines the six channel-typed color shapes used across the
//! crate ([`Rgb`], [`Lab`], [`Hcl`], [`Hct`], [`Hsl`], [`Hsv`]), the tagged
//! [`Space`] union over them, and the adapters that forward their fields into
//! the [`palette`] backend types.
//!
//! ## Overview
//!
//! All shape structs are plain data: numeric channels plus an optional
//! `opacity` in `[0, 1]`. Adapters default a missing opacity to 1. Cross-space
//! math is delegated to `palette`; the one conversion formula owned here is
//! HSV to HSL.
//!
//! The HCT shape is Material's perceptual model. Its adapter maps tone onto
//! the LCh lightness axis; the exact perceptual mapping lives behind the
//! Material color utilities and is only used where packed output is required.
//!
//! ## Untrusted input
//!
//! [`Space::from_json`] sniffs a JSON-like value by field presence, trying
//! shapes in a fixed priority order (Lab, RGB, HCL, HCT, HSL, HSV). The order
//! matters: HSL and HCL share the `h` and `l` fields and would otherwise
//! collide. The parser returns an error value for anything unrecognized and
//! never panics.

use palette::{FromColor, LabHue, RgbHue, encoding, white_point::D65};
use serde_json::Value;

use crate::{
    ColorError, ColorValue,
    argb::{Argb, uint8, uint32},
    value::argb_from_hct,
};

/// Backend sRGB color with alpha, components in `[0, 1]`.
pub type NativeRgb = palette::rgb::Rgba<encoding::Srgb, f64>;
/// Backend HSL color with alpha.
pub type NativeHsl = palette::hsl::Hsla<encoding::Srgb, f64>;
/// Backend CIE L\*a\*b\* color with alpha.
pub type NativeLab = palette::Laba<D65, f64>;
/// Backend CIE LCh color with alpha.
pub type NativeHcl = palette::Lcha<D65, f64>;

/// An RGB color with integer channels in `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Opacity in `[0, 1]`; absent means "not stated".
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub opacity: Option<f64>,
}

impl Rgb {
    /// Creates an RGB color with no stated opacity.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            opacity: None,
        }
    }

    /// Forwards the channels into the backend sRGB type.
    #[must_use]
    pub fn to_native(&self) -> NativeRgb {
        NativeRgb::new(
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
            self.opacity.unwrap_or(1.0),
        )
    }
}

/// A CIE L\*a\*b\* color, `l` in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    /// Lightness, 0 to 100.
    pub l: f64,
    /// Green-red axis, roughly -128 to 127.
    pub a: f64,
    /// Blue-yellow axis, roughly -128 to 127.
    pub b: f64,
    /// Opacity in `[0, 1]`; absent means "not stated".
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub opacity: Option<f64>,
}

impl Lab {
    /// Creates a Lab color with no stated opacity.
    #[must_use]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self {
            l,
            a,
            b,
            opacity: None,
        }
    }

    /// Forwards the channels into the backend Lab type.
    #[must_use]
    pub fn to_native(&self) -> NativeLab {
        NativeLab::new(self.l, self.a, self.b, self.opacity.unwrap_or(1.0))
    }
}

/// A hue-chroma-luminance (CIE LCh) color.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hcl {
    /// Hue angle in degrees, 0 to 360.
    pub h: f64,
    /// Chroma, non-negative.
    pub c: f64,
    /// Luminance, 0 to 100.
    pub l: f64,
    /// Opacity in `[0, 1]`; absent means "not stated".
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub opacity: Option<f64>,
}

impl Hcl {
    /// Creates an HCL color with no stated opacity.
    #[must_use]
    pub const fn new(h: f64, c: f64, l: f64) -> Self {
        Self {
            h,
            c,
            l,
            opacity: None,
        }
    }

    /// Forwards the channels into the backend LCh type.
    #[must_use]
    pub fn to_native(&self) -> NativeHcl {
        NativeHcl::new(
            self.l,
            self.c,
            LabHue::from_degrees(self.h),
            self.opacity.unwrap_or(1.0),
        )
    }
}

/// A hue-chroma-tone color, Material's perceptual model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hct {
    /// Hue angle in degrees, 0 to 360.
    pub h: f64,
    /// Chroma, non-negative.
    pub c: f64,
    /// Tone, 0 to 100. Maps onto the LCh lightness axis when adapted.
    pub t: f64,
    /// Opacity in `[0, 1]`; absent means "not stated".
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub opacity: Option<f64>,
}

impl Hct {
    /// Creates an HCT color with no stated opacity.
    #[must_use]
    pub const fn new(h: f64, c: f64, t: f64) -> Self {
        Self {
            h,
            c,
            t,
            opacity: None,
        }
    }

    /// Forwards the channels into the backend LCh type, tone as lightness.
    #[must_use]
    pub fn to_native(&self) -> NativeHcl {
        NativeHcl::new(
            self.t,
            self.c,
            LabHue::from_degrees(self.h),
            self.opacity.unwrap_or(1.0),
        )
    }
}

/// A hue-saturation-lightness color, saturation and lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue angle in degrees, 0 to 360.
    pub h: f64,
    /// Saturation, 0 to 1.
    pub s: f64,
    /// Lightness, 0 to 1.
    pub l: f64,
    /// Opacity in `[0, 1]`; absent means "not stated".
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub opacity: Option<f64>,
}

impl Hsl {
    /// Creates an HSL color with no stated opacity.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h,
            s,
            l,
            opacity: None,
        }
    }

    /// Forwards the channels into the backend HSL type.
    #[must_use]
    pub fn to_native(&self) -> NativeHsl {
        NativeHsl::new(
            RgbHue::from_degrees(self.h),
            self.s,
            self.l,
            self.opacity.unwrap_or(1.0),
        )
    }
}

/// A hue-saturation-value color, saturation and value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    /// Hue angle in degrees, 0 to 360.
    pub h: f64,
    /// Saturation, 0 to 1.
    pub s: f64,
    /// Value, 0 to 1.
    pub v: f64,
    /// Opacity in `[0, 1]`; absent means "not stated".
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub opacity: Option<f64>,
}

impl Hsv {
    /// Creates an HSV color with no stated opacity.
    #[must_use]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h,
            s,
            v,
            opacity: None,
        }
    }

    /// Converts to HSL.
    ///
    /// `l = v * (1 - s / 2)`; the HSL saturation is 0 when lightness sits at
    /// either extreme, else `(v - l) / min(l, 1 - l)`.
    #[must_use]
    pub fn to_hsl(&self) -> Hsl {
        let l = self.v * (1.0 - self.s / 2.0);
        let s = if l <= 0.0 || l >= 1.0 {
            0.0
        } else {
            (self.v - l) / l.min(1.0 - l)
        };
        Hsl {
            h: self.h,
            s,
            l,
            opacity: self.opacity,
        }
    }

    /// Forwards the channels into the backend HSL type via [`Hsv::to_hsl`].
    #[must_use]
    pub fn to_native(&self) -> NativeHsl {
        self.to_hsl().to_native()
    }
}

/// A tagged union over the six color shapes.
///
/// Variant order matches the field-sniffing priority used by
/// [`Space::from_json`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Space {
    /// CIE L\*a\*b\*.
    Lab(Lab),
    /// Integer-channel RGB.
    Rgb(Rgb),
    /// Hue-chroma-luminance.
    Hcl(Hcl),
    /// Hue-chroma-tone.
    Hct(Hct),
    /// Hue-saturation-lightness.
    Hsl(Hsl),
    /// Hue-saturation-value.
    Hsv(Hsv),
}

impl Space {
    /// Checks every stated channel for finiteness.
    ///
    /// # Errors
    ///
    /// Fails with [`ColorError::InvalidColorValue`] naming the offending
    /// shape when any channel is NaN or infinite.
    pub fn validate(&self) -> Result<(), ColorError> {
        let (shape, channels): (&str, [f64; 4]) = match *self {
            Self::Lab(Lab { l, a, b, opacity }) => ("lab", [l, a, b, opacity.unwrap_or(1.0)]),
            Self::Rgb(Rgb { opacity, .. }) => ("rgb", [0.0, 0.0, 0.0, opacity.unwrap_or(1.0)]),
            Self::Hcl(Hcl { h, c, l, opacity }) => ("hcl", [h, c, l, opacity.unwrap_or(1.0)]),
            Self::Hct(Hct { h, c, t, opacity }) => ("hct", [h, c, t, opacity.unwrap_or(1.0)]),
            Self::Hsl(Hsl { h, s, l, opacity }) => ("hsl", [h, s, l, opacity.unwrap_or(1.0)]),
            Self::Hsv(Hsv { h, s, v, opacity }) => ("hsv", [h, s, v, opacity.unwrap_or(1.0)]),
        };
        if channels.iter().all(|c| c.is_finite()) {
            Ok(())
        } else {
            Err(ColorError::InvalidColorValue(format!(
                "non-finite channel in {shape} color"
            )))
        }
    }

    /// Converts into the normalized backend representation.
    ///
    /// HCT maps onto LCh (tone as lightness) and HSV onto HSL; the other
    /// shapes normalize to their direct counterparts.
    #[must_use]
    pub fn to_normalized(&self) -> Normalized {
        match self {
            Self::Lab(lab) => Normalized::Lab(lab.to_native()),
            Self::Rgb(rgb) => Normalized::Rgb(rgb.to_native()),
            Self::Hcl(hcl) => Normalized::Hcl(hcl.to_native()),
            Self::Hct(hct) => Normalized::Hcl(hct.to_native()),
            Self::Hsl(hsl) => Normalized::Hsl(hsl.to_native()),
            Self::Hsv(hsv) => Normalized::Hsl(hsv.to_native()),
        }
    }

    /// Sniffs a JSON-like value into a color shape.
    ///
    /// Strings go through the hex parser, numbers are taken as packed ARGB,
    /// objects are matched by field presence in priority order: Lab
    /// (`l`,`a`,`b`), RGB (`r`,`g`,`b`), HCL (`h`,`c`,`l`), HCT (`h`,`c`,`t`),
    /// HSL (`h`,`s`,`l`), HSV (`h`,`s`,`v`). Integer channels wrap modulo 256
    /// like the codec layer.
    ///
    /// # Errors
    ///
    /// Fails with [`ColorError::UnrecognizedColor`] for `null`, booleans,
    /// arrays and objects matching no shape, or with
    /// [`ColorError::InvalidHexColor`] for a malformed string.
    pub fn from_json(value: &Value) -> Result<Self, ColorError> {
        match value {
            Value::String(text) => Ok(Self::Rgb(Argb::parse_hex(text)?.to_rgb(false))),
            Value::Number(num) => {
                let packed = num
                    .as_f64()
                    .ok_or(ColorError::UnrecognizedColor)
                    .map(|n| uint32(n as i64))?;
                Ok(Self::Rgb(Argb::new(packed).to_rgb(false)))
            }
            Value::Object(map) => {
                let num = |key: &str| map.get(key).and_then(Value::as_f64);
                let byte = |key: &str| num(key).map(|n| uint8(n.round() as i64));
                let opacity = num("opacity");

                if let (Some(l), Some(a), Some(b)) = (num("l"), num("a"), num("b")) {
                    Ok(Self::Lab(Lab { l, a, b, opacity }))
                } else if let (Some(r), Some(g), Some(b)) = (byte("r"), byte("g"), byte("b")) {
                    Ok(Self::Rgb(Rgb { r, g, b, opacity }))
                } else if let (Some(h), Some(c), Some(l)) = (num("h"), num("c"), num("l")) {
                    Ok(Self::Hcl(Hcl { h, c, l, opacity }))
                } else if let (Some(h), Some(c), Some(t)) = (num("h"), num("c"), num("t")) {
                    Ok(Self::Hct(Hct { h, c, t, opacity }))
                } else if let (Some(h), Some(s), Some(l)) = (num("h"), num("s"), num("l")) {
                    Ok(Self::Hsl(Hsl { h, s, l, opacity }))
                } else if let (Some(h), Some(s), Some(v)) = (num("h"), num("s"), num("v")) {
                    Ok(Self::Hsv(Hsv { h, s, v, opacity }))
                } else {
                    Err(ColorError::UnrecognizedColor)
                }
            }
            _ => Err(ColorError::UnrecognizedColor),
        }
    }
}

/// Any value accepted where a color is expected.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AnyColor {
    /// A hex color string.
    Text(String),
    /// A packed ARGB integer.
    Packed(u32),
    /// One of the six channel-typed shapes.
    Space(Space),
    /// An already constructed color value, passed through unchanged.
    #[cfg_attr(feature = "serde", serde(skip))]
    Value(ColorValue),
}

impl From<&str> for AnyColor {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AnyColor {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u32> for AnyColor {
    fn from(value: u32) -> Self {
        Self::Packed(value)
    }
}

impl From<Argb> for AnyColor {
    fn from(value: Argb) -> Self {
        Self::Packed(value.0)
    }
}

impl From<Space> for AnyColor {
    fn from(value: Space) -> Self {
        Self::Space(value)
    }
}

impl From<ColorValue> for AnyColor {
    fn from(value: ColorValue) -> Self {
        Self::Value(value)
    }
}

macro_rules! any_color_from_shape {
    ($($shape:ident),*) => {
        $(impl From<$shape> for AnyColor {
            fn from(value: $shape) -> Self {
                Self::Space(Space::$shape(value))
            }
        })*
    };
}

any_color_from_shape!(Rgb, Lab, Hcl, Hct, Hsl, Hsv);

/// A color normalized into one of the four backend output spaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalized {
    /// sRGB with alpha.
    Rgb(NativeRgb),
    /// HSL with alpha.
    Hsl(NativeHsl),
    /// CIE L\*a\*b\* with alpha.
    Lab(NativeLab),
    /// CIE LCh with alpha.
    Hcl(NativeHcl),
}

impl Normalized {
    /// Whether this is the sRGB form.
    #[must_use]
    pub const fn is_rgb(&self) -> bool {
        matches!(self, Self::Rgb(_))
    }

    /// Whether this is the HSL form.
    #[must_use]
    pub const fn is_hsl(&self) -> bool {
        matches!(self, Self::Hsl(_))
    }

    /// Whether this is the Lab form.
    #[must_use]
    pub const fn is_lab(&self) -> bool {
        matches!(self, Self::Lab(_))
    }

    /// Whether this is the LCh form.
    #[must_use]
    pub const fn is_hcl(&self) -> bool {
        matches!(self, Self::Hcl(_))
    }

    /// Converts into the backend sRGB form.
    #[must_use]
    pub fn to_srgb(&self) -> NativeRgb {
        match *self {
            Self::Rgb(rgb) => rgb,
            Self::Hsl(hsl) => NativeRgb::from_color(hsl),
            Self::Lab(lab) => NativeRgb::from_color(lab),
            Self::Hcl(hcl) => NativeRgb::from_color(hcl),
        }
    }

    /// Packs into ARGB, clamping out-of-gamut channels into range.
    #[must_use]
    pub fn argb(&self) -> Argb {
        let srgb = self.to_srgb();
        let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        Argb::from_channels(
            byte(srgb.alpha),
            byte(srgb.red),
            byte(srgb.green),
            byte(srgb.blue),
        )
    }
}

/// Normalizes any color input into a backend representation.
///
/// Already-shaped input takes the fast path keyed on its discriminant; text
/// goes through the hex parser and packed integers through the codec.
///
/// # Errors
///
/// Fails with the underlying [`ColorError`] for malformed text or non-finite
/// channels. Callers probing uncertain input should match on the error value
/// rather than bail.
pub fn normalize(input: &AnyColor) -> Result<Normalized, ColorError> {
    match input {
        AnyColor::Text(text) => Ok(Normalized::Rgb(
            Argb::parse_hex(text)?.to_rgb(false).to_native(),
        )),
        AnyColor::Packed(packed) => Ok(Normalized::Rgb(
            Argb::new(*packed).to_rgb(false).to_native(),
        )),
        AnyColor::Space(space) => {
            space.validate()?;
            Ok(space.to_normalized())
        }
        AnyColor::Value(value) => Ok(Normalized::Rgb(value.argb().to_rgb(false).to_native())),
    }
}

/// Resolves any color input to a packed ARGB value.
///
/// HCT input resolves through the perceptual model rather than the LCh
/// approximation, so seed colors given as HCT round-trip exactly.
///
/// # Errors
///
/// Same failure surface as [`normalize`].
pub fn argb_of(input: &AnyColor) -> Result<Argb, ColorError> {
    match input {
        AnyColor::Text(text) => Argb::parse_hex(text),
        AnyColor::Packed(packed) => Ok(Argb::new(*packed)),
        AnyColor::Value(value) => Ok(value.argb()),
        AnyColor::Space(Space::Hct(hct)) => {
            Space::Hct(*hct).validate()?;
            Ok(argb_from_hct(hct))
        }
        AnyColor::Space(space) => {
            space.validate()?;
            Ok(space.to_normalized().argb())
        }
    }
}
