//! Color types and colour-space transforms
//!
//! This module provides type-safe color handling with compile-time distinction
//! between sRGB, linear RGB and OKLab, plus the [`ColourSpace`] dispatch used
//! by the ditherer to move whole images in and out of the active space.
//!
//! # Color Spaces
//!
//! - **Srgb**: gamma-encoded storage/display values. Use for I/O.
//! - **LinearRgb**: linear light intensity.
//! - **Oklab**: perceptually uniform lightness + two chroma axes.
//!
//! # Example
//!
//! ```
//! use diffuse_dither::{LinearRgb, Oklab, Srgb};
//!
//! let srgb = Srgb::from_u8(128, 64, 32);
//! let linear = LinearRgb::from(srgb);
//! let lab = Oklab::from(linear);
//!
//! let back = Srgb::from(LinearRgb::from(lab));
//! assert_eq!(back.to_bytes(), [128, 64, 32]);
//! ```

mod gamma;
mod linear_rgb;
mod oklab;
mod space;
mod srgb;

pub use gamma::{linear_to_srgb, srgb_to_linear};
pub use linear_rgb::LinearRgb;
pub use oklab::Oklab;
pub use space::ColourSpace;
pub use srgb::Srgb;

/// Three channels of one pixel or palette entry in whichever colour space is
/// currently active. Which space that is depends on context: the working
/// buffer of a dither call holds [`ColourSpace::apply`] output.
pub type Color = [f64; 3];
