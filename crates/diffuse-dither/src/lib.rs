#![allow(clippy::excessive_precision, clippy::module_inception)]

//! diffuse-dither: palette error-diffusion dithering
//!
//! Reduce an image to a fixed palette with Floyd-Steinberg or Atkinson
//! error diffusion, matching colours in gamma-encoded sRGB, linear sRGB or
//! OKLab.
//!
//! # Quick Start
//!
//! The [`Ditherer`] is the primary entry point:
//!
//! ```
//! use diffuse_dither::{DitherConfig, Ditherer, Palette, Raster};
//!
//! let config = DitherConfig::parse("Atkinson", "oklab").unwrap();
//! let ditherer = Ditherer::new(config);
//!
//! let palette = Palette::from_hex(&["#000000", "#FFFFFF", "#FF0000"]).unwrap();
//! let image = Raster::from_pixels(2, 2, vec![[128u8, 64, 64]; 4]).unwrap();
//!
//! let result = ditherer.dither(&image, &palette).unwrap();
//! assert_eq!(result.width(), 2);
//! assert_eq!(result.rgb().len(), 2 * 2 * 3);
//! ```
//!
//! # Input
//!
//! Anything implementing [`ImageView`] can be dithered: it reports
//! `(height, width, channels)` and yields samples convertible to `f64`.
//! Integer data (0..=255) and float data (0.0..=1.0) are both accepted; if
//! any sample exceeds 1.0 the whole image is divided by 255. Palettes follow
//! the same rule.
//!
//! # Colour Spaces
//!
//! | Name | Matching | Notes |
//! |------|----------|-------|
//! | `srgb` | Euclidean on gamma-encoded values | Default |
//! | `lin-srgb` | Euclidean, channels weighted 0.2126 / 0.7152 / 0.0722 | Error diffused in linear light |
//! | `oklab` | Euclidean in OKLab | Clamped to the RGB gamut on the way back |
//!
//! The palette is transformed once per call. The scan, the error and its
//! diffusion all live in the chosen space; the result is transformed back
//! and quantized to 8 bits. Each output pixel therefore equals
//! `round(255 * unapply(apply(entry)))` for one palette entry, which
//! [`Palette::output_bytes`] lists.
//!
//! # Dithering Algorithms
//!
//! - Floyd-Steinberg (100% error propagation, default)
//! - Atkinson (75% error propagation, higher contrast)
//!
//! Both scan strictly row-major. Errors pushed past the image border are
//! dropped, and values are never clamped mid-scan.

pub mod api;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;
pub mod raster;


pub use api::{DitherConfig, DitherError, Ditherer, InvalidInput};
pub use color::{linear_to_srgb, srgb_to_linear, Color, ColourSpace, LinearRgb, Oklab, Srgb};
pub use dither::{Atkinson, Dither, DitherMode, FloydSteinberg, Kernel};
pub use output::DitheredImage;
pub use palette::{find_nearest, DistanceMetric, Palette, PaletteError, ParseColorError};
pub use raster::{Dims, ImageBuffer, ImageView, Raster};
