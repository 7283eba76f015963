pub mod compare;
pub mod png_io;

pub use compare::{compare_panels, side_by_side, Panel};
pub use png_io::{decode_png, encode_png};

use diffuse_dither::Ditherer;

use crate::error::AppError;
use crate::models::Settings;

/// Decode `png_data`, dither it with `settings` and encode the result.
pub fn dither_png(png_data: &[u8], settings: &Settings) -> Result<Vec<u8>, AppError> {
    let image = decode_png(png_data)?;
    let result = Ditherer::new(settings.config).dither(&image, &settings.palette)?;

    tracing::debug!(
        width = result.width(),
        height = result.height(),
        mode = %settings.config.mode,
        colour_space = %settings.config.colour_space,
        "Dithered image"
    );
    encode_png(result.width(), result.height(), result.rgb())
}

/// Decode `png_data` and encode the original next to one dithered copy per
/// colour space. The configured colour space is ignored.
pub fn compare_png(png_data: &[u8], settings: &Settings) -> Result<Vec<u8>, AppError> {
    let image = decode_png(png_data)?;
    let panels = compare_panels(&image, settings.mode(), &settings.palette)?;
    let strip = side_by_side(&panels)?;
    encode_png(strip.width, strip.height, &strip.rgb)
}
