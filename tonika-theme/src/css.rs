//! # CSS custom-property assembly
//!
//! Turns a pair of derived role palettes into flat maps of CSS custom
//! property declarations. Output stays at the map level, selector and rule
//! templating belongs to the consumer.
//!
//! ## Suffix modes
//!
//! The dark and light suffixes select how the two schemes share a variable:
//!
//! * both empty: dark and light write the same base name, the consumer
//!   scopes the dark map under its dark selector;
//! * both set: each scheme gets its own suffixed value variable and the base
//!   name aliases the active one through `var()`;
//! * one set: the unsuffixed scheme writes the base name directly, the other
//!   gets a suffixed variable plus a base alias for its mode.
//!
//! Palette key entries (`…-palette-key`) are internal and never emitted.

use std::collections::BTreeMap;

use tonika_color::ColorValue;

use crate::{
    roles::{PALETTE_KEY_SUFFIX, RolePalette},
    theme::Theme,
};

/// Formats a color as the default `rgb(r g b)` triplet.
///
/// The space-separated form slots into Tailwind's
/// `rgb(var(--x) / <alpha-value>)` pattern.
#[must_use]
pub fn css_rgb(color: &ColorValue) -> String {
    let argb = color.argb();
    format!("rgb({} {} {})", argb.red(), argb.green(), argb.blue())
}

/// Options controlling variable naming and value formatting.
#[derive(Debug, Clone)]
pub struct CssOptions {
    /// Prefix inserted between `--` and the role name.
    pub prefix: String,
    /// Suffix for dark value variables; empty writes dark values to the base
    /// name.
    pub dark_suffix: String,
    /// Suffix for light value variables; empty writes light values to the
    /// base name.
    pub light_suffix: String,
    /// Value formatter, [`css_rgb`] by default.
    pub stringify: fn(&ColorValue) -> String,
}

impl Default for CssOptions {
    fn default() -> Self {
        Self {
            prefix: "md-".to_string(),
            dark_suffix: String::new(),
            light_suffix: String::new(),
            stringify: css_rgb,
        }
    }
}

/// Assembled CSS custom-property fragments.
///
/// Each map is a set of `property -> value` declarations; `vars` maps role
/// names to their base variable name for building token configurations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CssVars {
    /// Role name to base variable name.
    pub vars: BTreeMap<String, String>,
    /// Dark value declarations.
    pub dark_values: BTreeMap<String, String>,
    /// Light value declarations.
    pub light_values: BTreeMap<String, String>,
    /// Base-name aliases active in dark mode.
    pub dark_vars: BTreeMap<String, String>,
    /// Base-name aliases active in light mode.
    pub light_vars: BTreeMap<String, String>,
}

/// Assembles CSS variable maps from a dark and a light role palette.
///
/// Roles present in only one palette are skipped; palette key entries are
/// filtered out.
#[must_use]
pub fn assemble_css(dark: &RolePalette, light: &RolePalette, options: &CssOptions) -> CssVars {
    let mut out = CssVars::default();
    let stringify = options.stringify;

    for (role, dark_color) in dark.iter() {
        if role.ends_with(PALETTE_KEY_SUFFIX) {
            continue;
        }
        let Some(light_color) = light.get(role) else {
            continue;
        };

        let base = format!("--{}{}", options.prefix, role);
        let dark_value = stringify(dark_color);
        let light_value = stringify(light_color);

        match (
            options.dark_suffix.is_empty(),
            options.light_suffix.is_empty(),
        ) {
            (true, true) => {
                out.light_values.insert(base.clone(), light_value);
                out.dark_values.insert(base.clone(), dark_value);
            }
            (false, false) => {
                let dark_name = format!("{base}{}", options.dark_suffix);
                let light_name = format!("{base}{}", options.light_suffix);
                out.dark_vars
                    .insert(base.clone(), format!("var({dark_name})"));
                out.light_vars
                    .insert(base.clone(), format!("var({light_name})"));
                out.dark_values.insert(dark_name, dark_value);
                out.light_values.insert(light_name, light_value);
            }
            (true, false) => {
                let light_name = format!("{base}{}", options.light_suffix);
                out.dark_values.insert(base.clone(), dark_value);
                out.light_vars
                    .insert(base.clone(), format!("var({light_name})"));
                out.light_values.insert(light_name, light_value);
            }
            (false, true) => {
                let dark_name = format!("{base}{}", options.dark_suffix);
                out.light_values.insert(base.clone(), light_value);
                out.dark_vars
                    .insert(base.clone(), format!("var({dark_name})"));
                out.dark_values.insert(dark_name, dark_value);
            }
        }

        out.vars.insert(role.to_string(), base);
    }

    out
}

impl Theme {
    /// Assembles CSS variable maps for this theme's merged role palettes.
    #[must_use]
    pub fn css_vars(&self, options: &CssOptions) -> CssVars {
        assemble_css(&self.dark, &self.light, options)
    }
}

#[cfg(test)]
mod tests {
    use tonika_color::Argb;

    use super::*;
    use crate::roles::RolePalette;

    fn palettes() -> (RolePalette, RolePalette) {
        let mut dark = RolePalette::for_tests(true);
        let mut light = RolePalette::for_tests(false);
        dark.insert(
            "primary".to_string(),
            ColorValue::from_argb(Argb::new(0xFF_01_02_03)),
        );
        light.insert(
            "primary".to_string(),
            ColorValue::from_argb(Argb::new(0xFF_04_05_06)),
        );
        dark.insert(
            "primary-palette-key".to_string(),
            ColorValue::from_argb(Argb::new(0xFF_00_00_00)),
        );
        light.insert(
            "primary-palette-key".to_string(),
            ColorValue::from_argb(Argb::new(0xFF_FF_FF_FF)),
        );
        (dark, light)
    }

    #[test]
    fn test_direct_mode() {
        let (dark, light) = palettes();
        let vars = assemble_css(&dark, &light, &CssOptions::default());

        assert_eq!(
            vars.light_values.get("--md-primary"),
            Some(&"rgb(4 5 6)".to_string())
        );
        assert_eq!(
            vars.dark_values.get("--md-primary"),
            Some(&"rgb(1 2 3)".to_string())
        );
        assert!(vars.dark_vars.is_empty());
        assert!(vars.light_vars.is_empty());
        assert_eq!(vars.vars.get("primary"), Some(&"--md-primary".to_string()));
    }

    #[test]
    fn test_suffixed_mode() {
        let (dark, light) = palettes();
        let options = CssOptions {
            dark_suffix: "-dark".to_string(),
            light_suffix: "-light".to_string(),
            ..CssOptions::default()
        };
        let vars = assemble_css(&dark, &light, &options);

        assert_eq!(
            vars.dark_values.get("--md-primary-dark"),
            Some(&"rgb(1 2 3)".to_string())
        );
        assert_eq!(
            vars.light_values.get("--md-primary-light"),
            Some(&"rgb(4 5 6)".to_string())
        );
        assert_eq!(
            vars.dark_vars.get("--md-primary"),
            Some(&"var(--md-primary-dark)".to_string())
        );
        assert_eq!(
            vars.light_vars.get("--md-primary"),
            Some(&"var(--md-primary-light)".to_string())
        );
    }

    #[test]
    fn test_mixed_mode_dark_direct() {
        let (dark, light) = palettes();
        let options = CssOptions {
            light_suffix: "-light".to_string(),
            ..CssOptions::default()
        };
        let vars = assemble_css(&dark, &light, &options);

        assert_eq!(
            vars.dark_values.get("--md-primary"),
            Some(&"rgb(1 2 3)".to_string())
        );
        assert_eq!(
            vars.light_values.get("--md-primary-light"),
            Some(&"rgb(4 5 6)".to_string())
        );
        assert_eq!(
            vars.light_vars.get("--md-primary"),
            Some(&"var(--md-primary-light)".to_string())
        );
        assert!(vars.dark_vars.is_empty());
    }

    #[test]
    fn test_mixed_mode_light_direct() {
        let (dark, light) = palettes();
        let options = CssOptions {
            dark_suffix: "-dark".to_string(),
            ..CssOptions::default()
        };
        let vars = assemble_css(&dark, &light, &options);

        assert_eq!(
            vars.light_values.get("--md-primary"),
            Some(&"rgb(4 5 6)".to_string())
        );
        assert_eq!(
            vars.dark_values.get("--md-primary-dark"),
            Some(&"rgb(1 2 3)".to_string())
        );
        assert_eq!(
            vars.dark_vars.get("--md-primary"),
            Some(&"var(--md-primary-dark)".to_string())
        );
        assert!(vars.light_vars.is_empty());
    }

    #[test]
    fn test_palette_keys_are_filtered() {
        let (dark, light) = palettes();
        let vars = assemble_css(&dark, &light, &CssOptions::default());
        assert!(!vars.vars.contains_key("primary-palette-key"));
        assert!(!vars.light_values.contains_key("--md-primary-palette-key"));
    }

    #[test]
    fn test_custom_stringify() {
        let (dark, light) = palettes();
        let options = CssOptions {
            stringify: |color| color.hex().to_string(),
            ..CssOptions::default()
        };
        let vars = assemble_css(&dark, &light, &options);
        assert_eq!(
            vars.light_values.get("--md-primary"),
            Some(&"#040506".to_string())
        );
    }
}
