//! Error types for palette operations

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,

    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for palette validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// No colors provided in palette
    #[error("palette cannot be empty")]
    EmptyPalette,

    /// A palette entry contains NaN or infinity
    #[error("palette entry {index} is not a finite color")]
    NonFinite {
        /// Index of the offending entry
        index: usize,
    },

    /// A hex entry could not be parsed
    #[error("palette entry {index}: {source}")]
    ParseColor {
        /// Index of the offending entry
        index: usize,
        /// Underlying parse failure
        #[source]
        source: ParseColorError,
    },
}
