//! # Dynamic scheme construction
//!
//! Builds the underlying Material dynamic schemes from a seed color and
//! exposes role extraction against them. One [`ThemeScheme`] exists per
//! dark/light mode; both are derived from the same seed and contrast level.

use material_color_utilities::{
    dynamiccolor::{DynamicScheme, DynamicSchemeBuilder, MaterialDynamicColors, SpecVersion},
    hct::Hct,
};
use tonika_color::ColorValue;

use crate::{
    roles::{PALETTE_KEY_ROLES, RolePalette, STANDARD_ROLES},
    variant::SchemeVariant,
};

/// A built dynamic scheme together with the inputs that produced it.
pub struct ThemeScheme {
    variant: SchemeVariant,
    contrast_level: f64,
    is_dark: bool,
    scheme: DynamicScheme,
}

impl ThemeScheme {
    /// Builds a scheme from a seed color.
    ///
    /// The contrast level is passed through to the scheme builder
    /// unvalidated; values are conventionally in `[-1, 1]`.
    #[must_use]
    pub fn new(seed: &ColorValue, variant: SchemeVariant, is_dark: bool, contrast_level: f64) -> Self {
        let scheme = DynamicSchemeBuilder::default()
            .source_color_hct(Hct::from_int(seed.argb().into()))
            .variant(variant.to_variant())
            .spec_version(SpecVersion::Spec2025)
            .is_dark(is_dark)
            .contrast_level(contrast_level)
            .build();
        Self {
            variant,
            contrast_level,
            is_dark,
            scheme,
        }
    }

    /// The variant this scheme was built with.
    #[must_use]
    pub const fn variant(&self) -> SchemeVariant {
        self.variant
    }

    /// The contrast level this scheme was built with.
    #[must_use]
    pub const fn contrast_level(&self) -> f64 {
        self.contrast_level
    }

    /// Whether this is the dark scheme.
    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// Extracts a single role by name, standard roles and palette keys alike.
    #[must_use]
    pub fn role(&self, name: &str) -> Option<ColorValue> {
        STANDARD_ROLES
            .iter()
            .chain(PALETTE_KEY_ROLES)
            .find(|(role, _)| *role == name)
            .map(|(_, extract)| {
                ColorValue::from_argb(extract(&MaterialDynamicColors::new(), &self.scheme).into())
            })
    }

    /// Extracts the full role palette for this scheme.
    #[must_use]
    pub fn role_palette(&self) -> RolePalette {
        RolePalette::from_scheme(&self.scheme, self.is_dark)
    }
}

impl std::fmt::Debug for ThemeScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeScheme")
            .field("variant", &self.variant)
            .field("contrast_level", &self.contrast_level)
            .field("is_dark", &self.is_dark)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use tonika_color::Argb;

    use super::*;

    fn seed() -> ColorValue {
        ColorValue::from_argb(Argb::new(0xFF_67_50_A4))
    }

    #[test]
    fn test_role_palette_is_complete() {
        let scheme = ThemeScheme::new(&seed(), SchemeVariant::Content, false, 0.0);
        let palette = scheme.role_palette();
        assert_eq!(palette.len(), STANDARD_ROLES.len() + PALETTE_KEY_ROLES.len());
        for (name, _) in STANDARD_ROLES {
            assert!(palette.get(name).is_some(), "missing role {name}");
        }
    }

    #[test]
    fn test_role_lookup_matches_palette() {
        let scheme = ThemeScheme::new(&seed(), SchemeVariant::TonalSpot, true, 0.0);
        let palette = scheme.role_palette();
        let direct = scheme.role("primary").unwrap();
        assert_eq!(palette.get("primary"), Some(&direct));
        assert_eq!(scheme.role("no-such-role"), None);
    }

    #[test]
    fn test_dark_and_light_differ() {
        let dark = ThemeScheme::new(&seed(), SchemeVariant::Content, true, 0.0);
        let light = ThemeScheme::new(&seed(), SchemeVariant::Content, false, 0.0);
        assert_ne!(
            dark.role_palette().get("surface"),
            light.role_palette().get("surface")
        );
    }
}
