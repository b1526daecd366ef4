//! Material dynamic scheme derivation and CSS variable assembly.
//!
//! # Overview
//!
//! From a single seed color, this crate derives a complete dark and light
//! role palette (primary/secondary/tertiary/error families, the surface
//! ladder, outlines, fixed roles and more), harmonizes any number of extra
//! named colors into the palette, expands tonal shade ladders, and finally
//! flattens everything into CSS custom-property maps.
//!
//! The heavy perceptual lifting is delegated to the Material color
//! utilities; this crate owns the pipeline around them: input normalization,
//! role naming, custom-color expansion and output assembly. The whole
//! pipeline is pure and deterministic.
//!
//! # Usage
//!
//! ```
//! use tonika_theme::{CssOptions, SchemeVariant, ThemeColors, make_theme};
//!
//! let colors = ThemeColors::new("#6750a4").with_color("brandColor", "#cc0033");
//! let theme = make_theme(&colors, SchemeVariant::TonalSpot, 0.0).unwrap();
//!
//! assert!(theme.light.get("on-primary-container").is_some());
//! assert!(theme.dark.get("brand-color").is_some());
//!
//! let css = theme.css_vars(&CssOptions::default());
//! assert!(css.light_values.contains_key("--md-primary"));
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

mod css;
mod custom;
mod error;
mod roles;
mod scheme;
mod theme;
mod tonal;
mod variant;

pub use css::{CssOptions, CssVars, assemble_css, css_rgb};
pub use custom::{ColorGroup, CustomColor, custom_color_group, harmonize, to_kebab_case};
pub use error::ThemeError;
pub use roles::{PALETTE_KEY_SUFFIX, RolePalette};
pub use scheme::ThemeScheme;
pub use theme::{Theme, ThemeColors, make_theme, make_theme_from_seed};
pub use tonal::{DEFAULT_STOPS, TonalLadder};
pub use variant::SchemeVariant;
