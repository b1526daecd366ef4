//! # Scheme variants
//!
//! A [`SchemeVariant`] names the algorithm used to spread a single seed color
//! into a full role palette. The seven variants map directly onto the
//! Material color utilities [`Variant`] table.
//!
//! String names use the camelCase spellings found in configuration files
//! (`"tonalSpot"`, `"neutral"`, ...). Two parsers are offered: the strict
//! [`FromStr`] implementation for typed boundaries, and
//! [`SchemeVariant::from_name_lossy`] for configuration paths where an
//! unknown name should degrade to [`SchemeVariant::Content`] instead of
//! failing the build.

use std::{fmt, str::FromStr};

use material_color_utilities::dynamiccolor::Variant;

use crate::ThemeError;

/// A named palette derivation algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SchemeVariant {
    /// Stays close to the seed color, including high-chroma seeds.
    #[default]
    Content,
    /// Playful palettes with shifted secondary and tertiary hues.
    Expressive,
    /// Matches the seed color exactly, adjusting only for contrast.
    Fidelity,
    /// Grayscale palettes ignoring the seed hue.
    Monochrome,
    /// Near-grayscale palettes with a hint of the seed hue.
    Neutral,
    /// Material's default: calm mid-chroma palettes.
    TonalSpot,
    /// Maximally chromatic palettes.
    Vibrant,
}

impl SchemeVariant {
    /// All variants, in name order.
    pub const ALL: [SchemeVariant; 7] = [
        Self::Content,
        Self::Expressive,
        Self::Fidelity,
        Self::Monochrome,
        Self::Neutral,
        Self::TonalSpot,
        Self::Vibrant,
    ];

    /// The camelCase configuration name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Expressive => "expressive",
            Self::Fidelity => "fidelity",
            Self::Monochrome => "monochrome",
            Self::Neutral => "neutral",
            Self::TonalSpot => "tonalSpot",
            Self::Vibrant => "vibrant",
        }
    }

    /// Parses a variant name, falling back to [`SchemeVariant::Content`] and
    /// logging a warning when the name is unknown.
    #[must_use]
    pub fn from_name_lossy(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!(scheme = name, "unknown scheme variant, using content");
            Self::Content
        })
    }

    pub(crate) const fn to_variant(self) -> Variant {
        match self {
            Self::Content => Variant::Content,
            Self::Expressive => Variant::Expressive,
            Self::Fidelity => Variant::Fidelity,
            Self::Monochrome => Variant::Monochrome,
            Self::Neutral => Variant::Neutral,
            Self::TonalSpot => Variant::TonalSpot,
            Self::Vibrant => Variant::Vibrant,
        }
    }
}

impl FromStr for SchemeVariant {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.name() == s)
            .ok_or_else(|| ThemeError::UnknownSchemeVariant(s.to_string()))
    }
}

impl fmt::Display for SchemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for variant in SchemeVariant::ALL {
            assert_eq!(variant.name().parse::<SchemeVariant>().unwrap(), variant);
        }
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        assert_eq!(
            "not-a-real-scheme".parse::<SchemeVariant>(),
            Err(ThemeError::UnknownSchemeVariant(
                "not-a-real-scheme".to_string()
            ))
        );
        // Names are exact; the PascalCase spelling is not accepted.
        assert!("TonalSpot".parse::<SchemeVariant>().is_err());
    }

    #[test]
    fn test_lossy_parse_falls_back_to_content() {
        assert_eq!(
            SchemeVariant::from_name_lossy("not-a-real-scheme"),
            SchemeVariant::Content
        );
        assert_eq!(
            SchemeVariant::from_name_lossy("vibrant"),
            SchemeVariant::Vibrant
        );
    }
}
