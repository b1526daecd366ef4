use thiserror::Error;
use tonika_color::ColorError;

/// Errors produced while deriving a theme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// A scheme variant name matched none of the known variants.
    ///
    /// Only the strict string parser produces this;
    /// [`crate::SchemeVariant::from_name_lossy`] falls back to
    /// [`crate::SchemeVariant::Content`] instead.
    #[error("unknown scheme variant {0:?}")]
    UnknownSchemeVariant(String),

    /// A color in the theme input failed to parse or validate.
    #[error(transparent)]
    Color(#[from] ColorError),
}
