//! Color representations, codecs and space conversions for the tonika theme
//! engine.
//!
//! # Overview
//!
//! This crate is the value layer underneath `tonika-theme`: packed 32-bit
//! ARGB colors with exact wraparound semantics, hex parsing and formatting,
//! six channel-typed color shapes with conversions into the [`palette`]
//! backend, and a lazy [`ColorValue`] wrapper that memoizes its perceptual,
//! packed and hex forms.
//!
//! Everything here is a pure value transformation: no I/O, no shared state,
//! and deterministic output for identical input.
//!
//! # Usage
//!
//! ```
//! use tonika_color::{AnyColor, ColorValue, Hsl, argb_of};
//!
//! // Resolve heterogeneous inputs to a packed color.
//! let from_text = argb_of(&AnyColor::from("#ff0000")).unwrap();
//! let from_hsl = argb_of(&AnyColor::from(Hsl::new(0.0, 1.0, 0.5))).unwrap();
//! assert_eq!(from_text, from_hsl);
//!
//! // Wrap it and read derived forms on demand.
//! let value = ColorValue::from_argb(from_text);
//! assert_eq!(value.hex(), "#ff0000");
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

mod argb;
mod error;
pub mod space;
mod value;

pub use argb::{Argb, linear_to_srgb, srgb_to_linear, uint8, uint32};
pub use error::ColorError;
pub use space::{AnyColor, Hcl, Hct, Hsl, Hsv, Lab, Normalized, Rgb, Space, argb_of, normalize};
pub use value::{ColorValue, argb_from_hct, hct_from_argb};
