//! # Tonal shade ladders
//!
//! A [`TonalLadder`] spreads one key color into a fixed sequence of shades
//! by varying tone while holding hue and chroma constant. Shade stops use
//! the familiar 50..950 numbering, where `tone = (1000 - stop) / 10`; stop
//! 0 would be pure white and stop 1000 pure black.

use std::collections::BTreeMap;

use tonika_color::{ColorValue, Hct, argb_from_hct};

/// The default shade stops, 50 through 950.
pub const DEFAULT_STOPS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// A key color and its derived shades.
#[derive(Debug, Clone, PartialEq)]
pub struct TonalLadder {
    key: ColorValue,
    shades: BTreeMap<u16, ColorValue>,
}

impl TonalLadder {
    /// Derives a ladder from a key color over the given stops.
    #[must_use]
    pub fn new(key: ColorValue, stops: &[u16]) -> Self {
        let hct = key.hct();
        let shades = stops
            .iter()
            .map(|&stop| {
                let tone = (1000.0 - f64::from(stop)) / 10.0;
                (
                    stop,
                    ColorValue::from_argb(argb_from_hct(&Hct::new(hct.h, hct.c, tone))),
                )
            })
            .collect();
        Self { key, shades }
    }

    /// Derives a ladder over [`DEFAULT_STOPS`].
    #[must_use]
    pub fn with_default_stops(key: ColorValue) -> Self {
        Self::new(key, &DEFAULT_STOPS)
    }

    /// The key color, exposed as the `DEFAULT` entry of the ladder.
    #[must_use]
    pub const fn key(&self) -> &ColorValue {
        &self.key
    }

    /// Looks up a shade by stop value.
    #[must_use]
    pub fn shade(&self, stop: u16) -> Option<&ColorValue> {
        self.shades.get(&stop)
    }

    /// Iterates over the shades in ascending stop order.
    pub fn shades(&self) -> impl Iterator<Item = (u16, &ColorValue)> {
        self.shades.iter().map(|(stop, color)| (*stop, color))
    }

    /// The number of shades, the key color excluded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shades.len()
    }

    /// Whether the ladder holds no shades.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use tonika_color::Argb;

    use super::*;

    #[test]
    fn test_default_ladder_shape() {
        let key = ColorValue::from_argb(Argb::new(0xFF_67_50_A4));
        let ladder = TonalLadder::with_default_stops(key.clone());
        assert_eq!(ladder.len(), DEFAULT_STOPS.len());
        assert_eq!(ladder.key(), &key);
        assert!(ladder.shade(500).is_some());
        assert!(ladder.shade(25).is_none());
    }

    #[test]
    fn test_tones_follow_stops() {
        let key = ColorValue::from_argb(Argb::new(0xFF_67_50_A4));
        let ladder = TonalLadder::with_default_stops(key);
        for (stop, shade) in ladder.shades() {
            let expected = (1000.0 - f64::from(stop)) / 10.0;
            assert!(
                (shade.hct().t - expected).abs() < 2.0,
                "stop {stop} expected tone {expected}, got {}",
                shade.hct().t
            );
        }
    }

    #[test]
    fn test_lightness_is_monotonic() {
        let key = ColorValue::from_argb(Argb::new(0xFF_00_66_CC));
        let ladder = TonalLadder::with_default_stops(key);
        let tones: Vec<f64> = ladder.shades().map(|(_, shade)| shade.hct().t).collect();
        for pair in tones.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn test_extreme_stops_clamp_to_white_and_black() {
        let key = ColorValue::from_argb(Argb::new(0xFF_67_50_A4));
        let ladder = TonalLadder::new(key, &[0, 1000]);
        assert_eq!(ladder.shade(0).map(ColorValue::hex), Some("#ffffff"));
        assert_eq!(ladder.shade(1000).map(ColorValue::hex), Some("#000000"));
    }
}
