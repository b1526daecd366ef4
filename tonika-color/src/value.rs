//! # Lazy color values
//!
//! [`ColorValue`] holds a color in exactly one source-of-truth form, either
//! perceptual HCT coordinates, a packed ARGB integer or a hex string, and
//! derives the other representations on first access. Derived forms are
//! memoized and never recomputed for the lifetime of the value.
//!
//! ## Usage
//!
//! ```
//! use tonika_color::ColorValue;
//!
//! let color = ColorValue::from_hex("#6750a4").unwrap();
//! let tone = color.hct().t;
//! assert!((0.0..=100.0).contains(&tone));
//! assert_eq!(color.hex(), "#6750a4");
//! ```

use std::sync::OnceLock;

use material_color_utilities::hct::Hct as McuHct;

use crate::{ColorError, argb::Argb, space::Hct};

/// Reads the perceptual HCT coordinates of a packed color.
///
/// Alpha is not part of the perceptual model and is dropped.
#[must_use]
pub fn hct_from_argb(argb: Argb) -> Hct {
    let hct = McuHct::from_int(argb.into());
    Hct {
        h: hct.hue(),
        c: hct.chroma(),
        t: hct.tone(),
        opacity: None,
    }
}

/// Solves HCT coordinates back to the nearest packed sRGB color.
#[must_use]
pub fn argb_from_hct(hct: &Hct) -> Argb {
    Argb::new(McuHct::from(hct.h, hct.c, hct.t).to_int())
}

#[derive(Debug, Clone, Copy)]
enum Source {
    Hct(Hct),
    Packed(Argb),
}

/// A color with one owned source of truth and memoized derived forms.
///
/// Construction fixes the source; [`ColorValue::set_argb`] and friends
/// replace it, resetting every cached derivation. Because the source lives in
/// an enum, the "no source present" state of a slot-based design cannot be
/// expressed at all.
#[derive(Debug, Clone)]
pub struct ColorValue {
    source: Source,
    hct: OnceLock<Hct>,
    argb: OnceLock<Argb>,
    hex: OnceLock<String>,
}

impl ColorValue {
    fn from_source(source: Source) -> Self {
        Self {
            source,
            hct: OnceLock::new(),
            argb: OnceLock::new(),
            hex: OnceLock::new(),
        }
    }

    /// Creates a value whose source of truth is a packed ARGB color.
    #[must_use]
    pub fn from_argb(argb: Argb) -> Self {
        Self::from_source(Source::Packed(argb))
    }

    /// Creates a value whose source of truth is an HCT coordinate triple.
    ///
    /// # Errors
    ///
    /// Fails with [`ColorError::InvalidColorValue`] when any coordinate is
    /// NaN or infinite.
    pub fn from_hct(hct: Hct) -> Result<Self, ColorError> {
        let stated = [hct.h, hct.c, hct.t, hct.opacity.unwrap_or(1.0)];
        if stated.iter().all(|v| v.is_finite()) {
            Ok(Self::from_source(Source::Hct(hct)))
        } else {
            Err(ColorError::InvalidColorValue(
                "non-finite channel in hct color".to_string(),
            ))
        }
    }

    /// Creates a value from a hex color string, validating eagerly.
    ///
    /// The parsed packed form becomes the source of truth and the canonical
    /// lowercase spelling is kept for [`ColorValue::hex`]; a malformed string
    /// fails here rather than at first access.
    ///
    /// # Errors
    ///
    /// Fails with [`ColorError::InvalidHexColor`] when the string does not
    /// match any accepted pattern.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let argb = Argb::parse_hex(input)?;
        let value = Self::from_argb(argb);
        let _ = value.hex.set(argb.to_hex());
        Ok(value)
    }

    /// The perceptual HCT form, computed from the packed form on first use.
    #[must_use]
    pub fn hct(&self) -> Hct {
        *self.hct.get_or_init(|| match self.source {
            Source::Hct(hct) => hct,
            Source::Packed(argb) => hct_from_argb(argb),
        })
    }

    /// The packed ARGB form, computed from the HCT form on first use.
    #[must_use]
    pub fn argb(&self) -> Argb {
        *self.argb.get_or_init(|| match self.source {
            Source::Packed(argb) => argb,
            Source::Hct(hct) => argb_from_hct(&hct),
        })
    }

    /// The hex string form, formatted from the packed form on first use.
    #[must_use]
    pub fn hex(&self) -> &str {
        self.hex.get_or_init(|| self.argb().to_hex())
    }

    /// Replaces the source of truth with a packed color, resetting every
    /// cached derivation.
    pub fn set_argb(&mut self, argb: Argb) {
        *self = Self::from_argb(argb);
    }

    /// Replaces the source of truth with HCT coordinates, resetting every
    /// cached derivation.
    ///
    /// # Errors
    ///
    /// Same validation as [`ColorValue::from_hct`].
    pub fn set_hct(&mut self, hct: Hct) -> Result<(), ColorError> {
        *self = Self::from_hct(hct)?;
        Ok(())
    }

    /// Replaces the source of truth with a hex string, resetting every
    /// cached derivation.
    ///
    /// # Errors
    ///
    /// Same validation as [`ColorValue::from_hex`].
    pub fn set_hex(&mut self, input: &str) -> Result<(), ColorError> {
        *self = Self::from_hex(input)?;
        Ok(())
    }
}

impl PartialEq for ColorValue {
    fn eq(&self, other: &Self) -> bool {
        self.argb() == other.argb()
    }
}

impl From<Argb> for ColorValue {
    fn from(value: Argb) -> Self {
        Self::from_argb(value)
    }
}
