//! # Custom theme colors
//!
//! Named colors supplied alongside the seed. Each custom color contributes
//! four roles per scheme, following the fixed name patterns `{name}`,
//! `{name}-container`, `on-{name}` and `on-{name}-container`, with the name
//! normalized to kebab-case first.
//!
//! When a custom color is harmonized, its hue is rotated toward the seed's
//! hue family before the tonal group is derived, pulling the extra color
//! into visual cohesion with the rest of the palette.

use tonika_color::{AnyColor, Argb, Hct, argb_from_hct, hct_from_argb};

/// A named extra color in the theme input.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "CustomColorRepr"))]
pub struct CustomColor {
    /// The color value in any accepted form.
    pub value: AnyColor,
    /// Whether to rotate the hue toward the seed. Defaults to `true`.
    pub harmonize: bool,
}

impl CustomColor {
    /// Creates a harmonized custom color.
    pub fn new(value: impl Into<AnyColor>) -> Self {
        Self {
            value: value.into(),
            harmonize: true,
        }
    }

    /// Creates a custom color kept at its own hue.
    pub fn unharmonized(value: impl Into<AnyColor>) -> Self {
        Self {
            value: value.into(),
            harmonize: false,
        }
    }
}

impl<T: Into<AnyColor>> From<T> for CustomColor {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum CustomColorRepr {
    Bare(AnyColor),
    Record {
        value: AnyColor,
        #[serde(default = "default_harmonize")]
        harmonize: bool,
    },
}

#[cfg(feature = "serde")]
fn default_harmonize() -> bool {
    true
}

#[cfg(feature = "serde")]
impl From<CustomColorRepr> for CustomColor {
    fn from(repr: CustomColorRepr) -> Self {
        match repr {
            CustomColorRepr::Bare(value) => Self::new(value),
            CustomColorRepr::Record { value, harmonize } => Self { value, harmonize },
        }
    }
}

/// The four tonal roles derived for one custom color in one scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorGroup {
    /// The accent color itself.
    pub color: Argb,
    /// Content color for the accent.
    pub on_color: Argb,
    /// The container color.
    pub container: Argb,
    /// Content color for the container.
    pub on_container: Argb,
}

impl ColorGroup {
    /// Expands the group into named role entries for `name` (already
    /// kebab-cased).
    #[must_use]
    pub fn named_roles(&self, name: &str) -> [(String, Argb); 4] {
        [
            (name.to_string(), self.color),
            (format!("{name}-container"), self.container),
            (format!("on-{name}"), self.on_color),
            (format!("on-{name}-container"), self.on_container),
        ]
    }
}

/// Rotates `design` at most 15 degrees toward the hue of `source`.
///
/// The rotation is half the hue difference along the shortest path, capped;
/// chroma and tone are preserved.
#[must_use]
pub fn harmonize(design: Argb, source: Argb) -> Argb {
    let from = hct_from_argb(design);
    let to = hct_from_argb(source);

    // Shortest angular path, wraparound at 0/360 included.
    let mut delta = (to.h - from.h).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    let rotation = (delta / 2.0).clamp(-15.0, 15.0);

    argb_from_hct(&Hct::new(
        (from.h + rotation).rem_euclid(360.0),
        from.c,
        from.t,
    ))
}

/// Derives the tonal group for a custom color value.
///
/// Tones follow the Material custom-color contract: 40/100/90/10 in light
/// schemes and 80/20/30/90 in dark schemes, on a ladder whose chroma is at
/// least 48.
#[must_use]
pub fn custom_color_group(value: Argb, is_dark: bool) -> ColorGroup {
    let hct = hct_from_argb(value);
    let chroma = hct.c.max(48.0);
    let tone = |t: f64| argb_from_hct(&Hct::new(hct.h, chroma, t));

    if is_dark {
        ColorGroup {
            color: tone(80.0),
            on_color: tone(20.0),
            container: tone(30.0),
            on_container: tone(90.0),
        }
    } else {
        ColorGroup {
            color: tone(40.0),
            on_color: tone(100.0),
            container: tone(90.0),
            on_container: tone(10.0),
        }
    }
}

/// Normalizes a name to kebab-case.
///
/// Word boundaries are lower-to-upper transitions, the last capital of an
/// uppercase run (`XMLHttp` splits as `xml-http`) and any run of
/// non-alphanumeric characters.
#[must_use]
pub fn to_kebab_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            continue;
        }
        if c.is_uppercase() {
            let boundary = match chars[..i].iter().rev().find(|p| p.is_alphanumeric()) {
                Some(prev) if prev.is_lowercase() || prev.is_numeric() => true,
                Some(prev) if prev.is_uppercase() => {
                    chars.get(i + 1).is_some_and(|next| next.is_lowercase())
                }
                _ => false,
            };
            if boundary && !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out.trim_end_matches('-').to_string()
}
