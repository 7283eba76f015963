//! Assertion helpers for tests.

use std::collections::HashSet;

use diffuse_dither::Raster;
use ditherkit::rendering::decode_png;
use pretty_assertions::assert_eq;

/// Assert bytes are a PNG and decode them
pub fn assert_png(bytes: &[u8]) -> Raster<u8> {
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G']),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
    decode_png(bytes).expect("decode PNG")
}

/// Assert decoded image has the expected size
pub fn assert_dims(raster: &Raster<u8>, width: usize, height: usize) {
    assert_eq!(
        (raster.width(), raster.height()),
        (width, height),
        "Unexpected image dimensions"
    );
}

/// Distinct pixel colours in a decoded image
pub fn distinct_colors(raster: &Raster<u8>) -> HashSet<[u8; 3]> {
    raster
        .data()
        .chunks_exact(3)
        .map(|px| [px[0], px[1], px[2]])
        .collect()
}

/// Assert every pixel is one of `allowed`
pub fn assert_only_colors(raster: &Raster<u8>, allowed: &[[u8; 3]]) {
    for color in distinct_colors(raster) {
        assert!(
            allowed.contains(&color),
            "Unexpected colour {color:?}, allowed {allowed:?}"
        );
    }
}
