//! PNG decoding to 8-bit RGB rasters and RGB encoding.

use diffuse_dither::{DitherError, Raster};
use std::io::Cursor;

use crate::error::AppError;

/// Decode a PNG into an 8-bit `height x width x 3` raster.
///
/// Palette and low-bit-depth images are expanded and 16-bit samples are
/// stripped to 8 bits. Grey is replicated across channels; alpha is
/// dropped without compositing.
pub fn decode_png(data: &[u8]) -> Result<Raster<u8>, AppError> {
    let mut decoder = png::Decoder::new(Cursor::new(data));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;

    let samples = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        png::ColorType::Indexed => 0,
    };
    if samples == 0 || info.bit_depth != png::BitDepth::Eight {
        return Err(AppError::UnsupportedPng {
            color: info.color_type,
            depth: info.bit_depth,
        });
    }

    let (width, height) = (info.width as usize, info.height as usize);
    let row_bytes = width * samples;
    let mut rgb = Vec::with_capacity(width * height * 3);
    for row in buf.chunks_exact(info.line_size).take(height) {
        for px in row[..row_bytes].chunks_exact(samples) {
            if samples < 3 {
                rgb.extend_from_slice(&[px[0]; 3]);
            } else {
                rgb.extend_from_slice(&px[..3]);
            }
        }
    }

    tracing::debug!(
        width,
        height,
        color = ?info.color_type,
        "Decoded PNG"
    );
    Raster::new(height, width, 3, rgb).map_err(|e| DitherError::from(e).into())
}

/// Encode packed 8-bit RGB pixels as a PNG.
pub fn encode_png(width: usize, height: usize, rgb: &[u8]) -> Result<Vec<u8>, AppError> {
    let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(AppError::UnsupportedDimensions { width, height });
    };
    if w == 0 || h == 0 || rgb.len() != width * height * 3 {
        return Err(AppError::UnsupportedDimensions { width, height });
    }

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, w, h);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(rgb)?;
        writer.finish()?;
    }
    Ok(buf.into_inner())
}
