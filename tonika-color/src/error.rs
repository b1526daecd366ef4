use thiserror::Error;

/// Errors produced by the color representation layer.
///
/// Codec and integer operations never fail for finite input; these variants
/// surface only at parsing and construction boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A string did not match any accepted hex color pattern
    /// (`#rgb`, `#rrggbb` or `#rrggbbaa`, case-insensitive, `#` optional).
    #[error("invalid hex color {0:?}")]
    InvalidHexColor(String),

    /// A numeric channel was out of domain, e.g. NaN or infinite.
    #[error("invalid color value: {0}")]
    InvalidColorValue(String),

    /// An open-ended input matched none of the known color shapes.
    #[error("unrecognized color shape")]
    UnrecognizedColor,
}
