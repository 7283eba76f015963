//! Output types for the dithering pipeline.
//!
//! [`DitheredImage`] carries both the 8-bit RGB result and the palette
//! index chosen for every pixel.

mod dithered_image;

pub use dithered_image::DitheredImage;
