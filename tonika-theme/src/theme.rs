//! # Theme derivation
//!
//! [`make_theme`] is the top of the pipeline: it takes a seed color plus any
//! number of named custom colors, a scheme variant and a contrast level, and
//! produces the full dark and light role palettes together with the tonal
//! ladders backing them.
//!
//! The pipeline is a straight line: resolve the seed, build both dynamic
//! schemes, extract the standard roles, merge the custom-color roles, then
//! expand the tonal ladders. Every step is a pure value transformation, so
//! identical inputs always yield identical output maps.

use std::collections::BTreeMap;

use tonika_color::{AnyColor, ColorValue, argb_of};

use crate::{
    ThemeError,
    custom::{CustomColor, custom_color_group, harmonize, to_kebab_case},
    roles::RolePalette,
    scheme::ThemeScheme,
    tonal::TonalLadder,
    variant::SchemeVariant,
};

/// The color table driving a theme: a mandatory primary seed plus named
/// extras.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThemeColors {
    /// The seed color the whole palette is derived from.
    pub primary: CustomColor,
    /// Extra named colors, each contributing four roles per scheme.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub extras: BTreeMap<String, CustomColor>,
}

impl ThemeColors {
    /// Creates a table with just the seed color.
    pub fn new(primary: impl Into<CustomColor>) -> Self {
        Self {
            primary: primary.into(),
            extras: BTreeMap::new(),
        }
    }

    /// Adds a named custom color.
    #[must_use]
    pub fn with_color(mut self, name: impl Into<String>, color: impl Into<CustomColor>) -> Self {
        self.extras.insert(name.into(), color.into());
        self
    }
}

/// A fully derived theme.
#[derive(Debug)]
pub struct Theme {
    /// The resolved seed color.
    pub source: ColorValue,
    /// The variant the schemes were built with.
    pub variant: SchemeVariant,
    /// The contrast level the schemes were built with.
    pub contrast_level: f64,
    /// The dark dynamic scheme.
    pub dark_scheme: ThemeScheme,
    /// The light dynamic scheme.
    pub light_scheme: ThemeScheme,
    /// Tonal ladders per palette key color, dark scheme.
    pub dark_palette: BTreeMap<String, TonalLadder>,
    /// Tonal ladders per palette key color, light scheme.
    pub light_palette: BTreeMap<String, TonalLadder>,
    /// Merged dark role map: standard roles, palette keys and custom roles.
    pub dark: RolePalette,
    /// Merged light role map: standard roles, palette keys and custom roles.
    pub light: RolePalette,
}

/// The palette key roles expanded into tonal ladders.
const LADDER_KEYS: [&str; 5] = [
    "primary",
    "secondary",
    "tertiary",
    "neutral",
    "neutral-variant",
];

/// Derives a theme from a color table.
///
/// The `primary` entry resolves to the seed; its `harmonize` flag has no
/// effect since the seed is its own hue family. Custom color names are
/// kebab-cased before role keys are built from them.
///
/// # Errors
///
/// Fails with [`ThemeError::Color`] when the seed or any custom color fails
/// to parse or validate. Theme derivation itself cannot fail.
pub fn make_theme(
    colors: &ThemeColors,
    variant: SchemeVariant,
    contrast_level: f64,
) -> Result<Theme, ThemeError> {
    let source = ColorValue::from_argb(argb_of(&colors.primary.value)?);
    tracing::debug!(
        seed = source.hex(),
        variant = variant.name(),
        contrast_level,
        "deriving theme"
    );

    let dark_scheme = ThemeScheme::new(&source, variant, true, contrast_level);
    let light_scheme = ThemeScheme::new(&source, variant, false, contrast_level);

    let mut dark = dark_scheme.role_palette();
    let mut light = light_scheme.role_palette();

    for (name, custom) in &colors.extras {
        let value = argb_of(&custom.value)?;
        let blended = if custom.harmonize {
            harmonize(value, source.argb())
        } else {
            value
        };
        let key = to_kebab_case(name);
        for palette in [&mut dark, &mut light] {
            let group = custom_color_group(blended, palette.is_dark());
            for (role, argb) in group.named_roles(&key) {
                palette.insert(role, ColorValue::from_argb(argb));
            }
        }
    }

    tracing::trace!(
        roles = dark.len(),
        custom = colors.extras.len(),
        "role maps merged"
    );

    let dark_palette = tonal_ladders(&dark);
    let light_palette = tonal_ladders(&light);

    Ok(Theme {
        source,
        variant,
        contrast_level,
        dark_scheme,
        light_scheme,
        dark_palette,
        light_palette,
        dark,
        light,
    })
}

/// Derives a theme from a bare seed color with default options.
///
/// # Errors
///
/// Same failure surface as [`make_theme`].
pub fn make_theme_from_seed(seed: impl Into<AnyColor>) -> Result<Theme, ThemeError> {
    make_theme(
        &ThemeColors::new(seed.into()),
        SchemeVariant::default(),
        0.0,
    )
}

fn tonal_ladders(palette: &RolePalette) -> BTreeMap<String, TonalLadder> {
    LADDER_KEYS
        .iter()
        .filter_map(|key| {
            palette
                .get(&format!("{key}-palette-key"))
                .map(|color| ((*key).to_string(), TonalLadder::with_default_stops(color.clone())))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use tonika_color::{Argb, Rgb};

    use super::*;

    const SEED: &str = "#6750a4";

    #[test]
    fn test_theme_is_deterministic() {
        let colors = ThemeColors::new(SEED).with_color("brandColor", "#ff0000");
        let first = make_theme(&colors, SchemeVariant::Content, 0.0).unwrap();
        let second = make_theme(&colors, SchemeVariant::Content, 0.0).unwrap();
        assert_eq!(first.dark, second.dark);
        assert_eq!(first.light, second.light);
        assert_eq!(first.source, second.source);
    }

    #[test]
    fn test_lossy_variant_matches_content() {
        let colors = ThemeColors::new(SEED);
        let fallback = make_theme(
            &colors,
            SchemeVariant::from_name_lossy("not-a-real-scheme"),
            0.0,
        )
        .unwrap();
        let content = make_theme(&colors, SchemeVariant::Content, 0.0).unwrap();
        assert_eq!(fallback.dark, content.dark);
        assert_eq!(fallback.light, content.light);
    }

    #[test]
    fn test_custom_color_roles_are_kebab_cased() {
        let colors = ThemeColors::new(SEED).with_color("brandColor", "#ff0000");
        let theme = make_theme(&colors, SchemeVariant::Content, 0.0).unwrap();
        for palette in [&theme.dark, &theme.light] {
            for role in [
                "brand-color",
                "brand-color-container",
                "on-brand-color",
                "on-brand-color-container",
            ] {
                assert!(palette.get(role).is_some(), "missing {role}");
            }
        }
    }

    #[test]
    fn test_unharmonized_color_keeps_its_hue() {
        let red: CustomColor = CustomColor::unharmonized("#ff0000");
        let colors = ThemeColors::new("#0000ff").with_color("alert", red);
        let harmonized_colors = ThemeColors::new("#0000ff").with_color("alert", "#ff0000");

        let plain = make_theme(&colors, SchemeVariant::Content, 0.0).unwrap();
        let blended = make_theme(&harmonized_colors, SchemeVariant::Content, 0.0).unwrap();
        assert_ne!(plain.light.get("alert"), blended.light.get("alert"));
    }

    #[test]
    fn test_palette_ladders_cover_keys() {
        let theme = make_theme_from_seed(SEED).unwrap();
        for key in LADDER_KEYS {
            assert!(theme.dark_palette.contains_key(key), "missing {key}");
            assert!(theme.light_palette.contains_key(key), "missing {key}");
        }
        let primary = &theme.light_palette["primary"];
        assert_eq!(primary.len(), crate::tonal::DEFAULT_STOPS.len());
    }

    #[test]
    fn test_seed_accepts_many_forms() {
        let from_text = make_theme_from_seed("#ff0000").unwrap();
        let from_packed = make_theme_from_seed(0xFF_FF_00_00u32).unwrap();
        let from_rgb = make_theme_from_seed(Rgb::new(255, 0, 0)).unwrap();
        assert_eq!(from_text.source.argb(), Argb::new(0xFF_FF_00_00));
        assert_eq!(from_text.light, from_packed.light);
        assert_eq!(from_text.light, from_rgb.light);
    }

    #[test]
    fn test_invalid_seed_fails_fast() {
        assert!(make_theme_from_seed("#nothex").is_err());
    }

    #[test]
    fn test_surface_elevation_overlay() {
        let theme = make_theme_from_seed(SEED).unwrap();
        let rest = theme.light.surface_color_at_elevation(0.0).unwrap();
        assert_eq!(Some(&rest), theme.light.get("surface"));

        let raised = theme.light.surface_color_at_elevation(8.0).unwrap();
        assert_ne!(Some(&raised), theme.light.get("surface"));
    }

    #[test]
    fn test_on_color_lookup_covers_custom_roles() {
        let colors = ThemeColors::new(SEED).with_color("brand", "#00ff00");
        let theme = make_theme(&colors, SchemeVariant::Content, 0.0).unwrap();
        let on_brand = theme.light.on_color_for("brand").unwrap();
        assert_eq!(Some(on_brand), theme.light.get("on-brand"));
        assert!(theme.light.on_color_for("surface-container-high").is_some());
    }
}
