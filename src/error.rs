use diffuse_dither::{DitherError, PaletteError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Dither error: {0}")]
    Dither(#[from] DitherError),

    #[error("PNG decode error: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("Unsupported PNG layout: {color:?} at {depth:?}")]
    UnsupportedPng {
        color: png::ColorType,
        depth: png::BitDepth,
    },

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: usize, height: usize },

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<PaletteError> for AppError {
    fn from(e: PaletteError) -> Self {
        AppError::Dither(e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_dither() {
        let error = AppError::from(DitherError::InvalidConfig {
            setting: "mode",
            value: "Bayer".to_string(),
        });
        assert_eq!(error.to_string(), "Dither error: unrecognized mode: \"Bayer\"");
    }

    #[test]
    fn test_app_error_from_palette_error() {
        let error: AppError = PaletteError::EmptyPalette.into();
        match error {
            AppError::Dither(DitherError::Palette(PaletteError::EmptyPalette)) => {}
            other => panic!("Expected Dither(Palette) variant, got {other:?}"),
        }
    }

    #[test]
    fn test_app_error_unsupported_png() {
        let error = AppError::UnsupportedPng {
            color: png::ColorType::Indexed,
            depth: png::BitDepth::Four,
        };
        assert_eq!(error.to_string(), "Unsupported PNG layout: Indexed at Four");
    }

    #[test]
    fn test_app_error_unsupported_dimensions() {
        let error = AppError::UnsupportedDimensions {
            width: 0,
            height: 10,
        };
        assert_eq!(error.to_string(), "Unsupported dimensions: 0x10");
    }

    #[test]
    fn test_app_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.png");
        let error: AppError = io.into();
        assert_eq!(error.to_string(), "IO error: missing.png");
    }
}
