//! # Role palettes
//!
//! A [`RolePalette`] is the flat map from semantic role names
//! (`"primary"`, `"on-surface-variant"`, ...) to concrete colors, extracted
//! once from a dynamic scheme and immutable afterwards apart from the
//! custom-color roles merged in by the theme pipeline.
//!
//! The role tables below pair each kebab-case name with the Material dynamic
//! color that produces it. Palette key colors are kept under `…-palette-key`
//! names; they feed the tonal ladders and are filtered out of CSS output.

use std::collections::BTreeMap;

use material_color_utilities::dynamiccolor::{DynamicScheme, MaterialDynamicColors};
use tonika_color::ColorValue;

/// Produces one role's packed color from a scheme.
pub(crate) type RoleExtractor = fn(&MaterialDynamicColors, &DynamicScheme) -> u32;

/// The standard Material roles, name order mirroring the scheme structure.
pub(crate) const STANDARD_ROLES: &[(&str, RoleExtractor)] = &[
    ("primary", |c, s| c.primary().get_argb(s)),
    ("on-primary", |c, s| c.on_primary().get_argb(s)),
    ("primary-container", |c, s| c.primary_container().get_argb(s)),
    ("on-primary-container", |c, s| {
        c.on_primary_container().get_argb(s)
    }),
    ("secondary", |c, s| c.secondary().get_argb(s)),
    ("on-secondary", |c, s| c.on_secondary().get_argb(s)),
    ("secondary-container", |c, s| {
        c.secondary_container().get_argb(s)
    }),
    ("on-secondary-container", |c, s| {
        c.on_secondary_container().get_argb(s)
    }),
    ("tertiary", |c, s| c.tertiary().get_argb(s)),
    ("on-tertiary", |c, s| c.on_tertiary().get_argb(s)),
    ("tertiary-container", |c, s| {
        c.tertiary_container().get_argb(s)
    }),
    ("on-tertiary-container", |c, s| {
        c.on_tertiary_container().get_argb(s)
    }),
    ("error", |c, s| c.error().get_argb(s)),
    ("on-error", |c, s| c.on_error().get_argb(s)),
    ("error-container", |c, s| c.error_container().get_argb(s)),
    ("on-error-container", |c, s| {
        c.on_error_container().get_argb(s)
    }),
    ("background", |c, s| c.background().get_argb(s)),
    ("on-background", |c, s| c.on_background().get_argb(s)),
    ("surface", |c, s| c.surface().get_argb(s)),
    ("on-surface", |c, s| c.on_surface().get_argb(s)),
    ("surface-variant", |c, s| c.surface_variant().get_argb(s)),
    ("on-surface-variant", |c, s| {
        c.on_surface_variant().get_argb(s)
    }),
    ("surface-dim", |c, s| c.surface_dim().get_argb(s)),
    ("surface-bright", |c, s| c.surface_bright().get_argb(s)),
    ("surface-container-lowest", |c, s| {
        c.surface_container_lowest().get_argb(s)
    }),
    ("surface-container-low", |c, s| {
        c.surface_container_low().get_argb(s)
    }),
    ("surface-container", |c, s| c.surface_container().get_argb(s)),
    ("surface-container-high", |c, s| {
        c.surface_container_high().get_argb(s)
    }),
    ("surface-container-highest", |c, s| {
        c.surface_container_highest().get_argb(s)
    }),
    ("outline", |c, s| c.outline().get_argb(s)),
    ("outline-variant", |c, s| c.outline_variant().get_argb(s)),
    ("shadow", |c, s| c.shadow().get_argb(s)),
    ("scrim", |c, s| c.scrim().get_argb(s)),
    ("surface-tint", |c, s| c.surface_tint().get_argb(s)),
    ("inverse-surface", |c, s| c.inverse_surface().get_argb(s)),
    ("inverse-on-surface", |c, s| {
        c.inverse_on_surface().get_argb(s)
    }),
    ("inverse-primary", |c, s| c.inverse_primary().get_argb(s)),
    ("primary-fixed", |c, s| c.primary_fixed().get_argb(s)),
    ("primary-fixed-dim", |c, s| c.primary_fixed_dim().get_argb(s)),
    ("on-primary-fixed", |c, s| c.on_primary_fixed().get_argb(s)),
    ("on-primary-fixed-variant", |c, s| {
        c.on_primary_fixed_variant().get_argb(s)
    }),
    ("secondary-fixed", |c, s| c.secondary_fixed().get_argb(s)),
    ("secondary-fixed-dim", |c, s| {
        c.secondary_fixed_dim().get_argb(s)
    }),
    ("on-secondary-fixed", |c, s| {
        c.on_secondary_fixed().get_argb(s)
    }),
    ("on-secondary-fixed-variant", |c, s| {
        c.on_secondary_fixed_variant().get_argb(s)
    }),
    ("tertiary-fixed", |c, s| c.tertiary_fixed().get_argb(s)),
    ("tertiary-fixed-dim", |c, s| {
        c.tertiary_fixed_dim().get_argb(s)
    }),
    ("on-tertiary-fixed", |c, s| c.on_tertiary_fixed().get_argb(s)),
    ("on-tertiary-fixed-variant", |c, s| {
        c.on_tertiary_fixed_variant().get_argb(s)
    }),
];

/// The palette key colors backing the tonal ladders.
pub(crate) const PALETTE_KEY_ROLES: &[(&str, RoleExtractor)] = &[
    ("primary-palette-key", |c, s| {
        c.primary_palette_key_color().get_argb(s)
    }),
    ("secondary-palette-key", |c, s| {
        c.secondary_palette_key_color().get_argb(s)
    }),
    ("tertiary-palette-key", |c, s| {
        c.tertiary_palette_key_color().get_argb(s)
    }),
    ("neutral-palette-key", |c, s| {
        c.neutral_palette_key_color().get_argb(s)
    }),
    ("neutral-variant-palette-key", |c, s| {
        c.neutral_variant_palette_key_color().get_argb(s)
    }),
];

/// The suffix marking palette key entries in a role map.
pub const PALETTE_KEY_SUFFIX: &str = "-palette-key";

/// A flat role-name to color map for one scheme.
#[derive(Debug, Clone, PartialEq)]
pub struct RolePalette {
    is_dark: bool,
    roles: BTreeMap<String, ColorValue>,
}

impl RolePalette {
    /// Extracts every standard role and palette key color from a scheme.
    pub(crate) fn from_scheme(scheme: &DynamicScheme, is_dark: bool) -> Self {
        let colors = MaterialDynamicColors::new();
        let roles = STANDARD_ROLES
            .iter()
            .chain(PALETTE_KEY_ROLES)
            .map(|(name, extract)| {
                (
                    (*name).to_string(),
                    ColorValue::from_argb(extract(&colors, scheme).into()),
                )
            })
            .collect();
        Self { is_dark, roles }
    }

    #[cfg(test)]
    pub(crate) fn for_tests(is_dark: bool) -> Self {
        Self {
            is_dark,
            roles: BTreeMap::new(),
        }
    }

    /// Whether this palette belongs to the dark scheme.
    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// Looks up a role by name.
    #[must_use]
    pub fn get(&self, role: &str) -> Option<&ColorValue> {
        self.roles.get(role)
    }

    /// Iterates over all roles in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorValue)> {
        self.roles.iter().map(|(name, color)| (name.as_str(), color))
    }

    /// The number of roles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether the palette holds no roles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub(crate) fn insert(&mut self, role: String, color: ColorValue) {
        self.roles.insert(role, color);
    }

    /// Returns the matching content color for a role, when one exists.
    ///
    /// Surface-family roles resolve to `on-surface`, fixed roles to their
    /// shared `on-…-fixed` color, and everything else to the `on-` prefixed
    /// counterpart when the palette contains it.
    #[must_use]
    pub fn on_color_for(&self, role: &str) -> Option<&ColorValue> {
        let on_role = match role {
            "surface" | "surface-dim" | "surface-bright" | "surface-container-lowest"
            | "surface-container-low" | "surface-container" | "surface-container-high"
            | "surface-container-highest" => "on-surface".to_string(),
            "inverse-surface" => "inverse-on-surface".to_string(),
            "primary-fixed" | "primary-fixed-dim" => "on-primary-fixed".to_string(),
            "secondary-fixed" | "secondary-fixed-dim" => "on-secondary-fixed".to_string(),
            "tertiary-fixed" | "tertiary-fixed-dim" => "on-tertiary-fixed".to_string(),
            other => format!("on-{other}"),
        };
        self.get(&on_role)
    }

    /// Computes the surface color under a tonal elevation overlay.
    ///
    /// The overlay strength follows the Material elevation curve and blends
    /// the surface toward the surface tint in linear space. Returns `None`
    /// when the palette lacks the surface or surface-tint roles.
    #[must_use]
    pub fn surface_color_at_elevation(&self, elevation: f64) -> Option<ColorValue> {
        let surface = self.get("surface")?;
        if elevation <= 0.0 {
            return Some(surface.clone());
        }
        let tint = self.get("surface-tint")?;
        let alpha = ((4.5 * (elevation + 1.0).ln()) + 2.0) / 100.0;
        Some(ColorValue::from_argb(
            surface.argb().blend_over(tint.argb(), alpha),
        ))
    }
}
