//! Unified error type for the diffuse-dither public API.

use thiserror::Error;

use crate::palette::PaletteError;

/// Unified error type for the diffuse-dither public API.
///
/// Every failure is detected before the scan starts; a dither call either
/// returns a complete image or one of these.
///
/// # Example
///
/// ```
/// use diffuse_dither::{DitherConfig, DitherError, Palette};
///
/// fn setup(mode: &str, hex: &[&str]) -> Result<(DitherConfig, Palette), DitherError> {
///     let config = DitherConfig::parse(mode, "oklab")?;
///     let palette = Palette::from_hex(hex)?;
///     Ok((config, palette))
/// }
///
/// assert!(setup("Atkinson", &["#000", "#fff"]).is_ok());
/// assert!(matches!(
///     setup("Bayer", &["#000"]),
///     Err(DitherError::InvalidConfig { setting: "mode", .. })
/// ));
/// ```
#[derive(Debug, Error)]
pub enum DitherError {
    /// Unrecognized dither mode or colour-space name.
    #[error("unrecognized {setting}: {value:?}")]
    InvalidConfig {
        /// Which setting was being parsed (`"mode"` or `"colour_space"`)
        setting: &'static str,
        /// The rejected value, as given
        value: String,
    },

    /// The image or palette handed to a dither call is unusable.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// Palette construction failed.
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),
}

/// Why an input image or palette was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("palette has no entries")]
    EmptyPalette,

    #[error("image has no channel axis, expected height x width x 3")]
    MissingChannelAxis,

    #[error("image has {found} channels, expected 3")]
    ChannelCount { found: usize },

    #[error("image is empty ({height}x{width})")]
    EmptyImage { height: usize, width: usize },

    #[error("data holds {found} samples, shape needs {expected}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("non-finite sample at row {row}, column {col}, channel {channel}")]
    NonFinite {
        row: usize,
        col: usize,
        channel: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_config_message() {
        let err = DitherError::InvalidConfig {
            setting: "colour_space",
            value: "hsv".into(),
        };
        assert_eq!(err.to_string(), "unrecognized colour_space: \"hsv\"");
    }

    #[test]
    fn test_invalid_input_converts_and_chains() {
        let err: DitherError = InvalidInput::ChannelCount { found: 4 }.into();
        assert_eq!(err.to_string(), "invalid input: image has 4 channels, expected 3");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_palette_error_converts() {
        let err: DitherError = PaletteError::EmptyPalette.into();
        assert!(matches!(err, DitherError::Palette(PaletteError::EmptyPalette)));
    }
}
