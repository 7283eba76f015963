//! Error diffusion dithering algorithms.
//!
//! Both algorithms walk the image in strict row-major order (top to bottom,
//! left to right). Each pixel is replaced by its nearest palette entry and
//! the difference is pushed onto neighbours that have not been visited yet.
//!
//! - **Floyd-Steinberg**: 4 neighbours, 100% error propagation (default)
//! - **Atkinson**: 6 neighbours, 75% error propagation
//!
//! # Architecture
//!
//! Both algorithms implement the [`Dither`] trait. [`DitherMode`] is the
//! closed, parseable selection used by [`DitherConfig`](crate::DitherConfig).

mod atkinson;
mod floyd_steinberg;
mod kernel;

pub use atkinson::Atkinson;
pub use floyd_steinberg::FloydSteinberg;
pub use kernel::*;

use std::fmt;
use std::str::FromStr;

use crate::api::DitherError;
use crate::color::Color;
use crate::palette::{find_nearest, DistanceMetric};
use crate::raster::ImageBuffer;

/// Error diffusion algorithm selection.
///
/// # Example
///
/// ```
/// use diffuse_dither::DitherMode;
///
/// let mode: DitherMode = "atkinson".parse().unwrap();
/// assert_eq!(mode, DitherMode::Atkinson);
/// assert_eq!(mode.to_string(), "Atkinson");
/// assert_eq!(DitherMode::default(), DitherMode::FloydSteinberg);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DitherMode {
    /// Floyd-Steinberg error diffusion (100% propagation).
    #[default]
    FloydSteinberg,

    /// Atkinson error diffusion (75% propagation).
    ///
    /// Higher contrast; highlights and shadows lose detail.
    Atkinson,
}

impl DitherMode {
    /// All modes, in declaration order.
    pub const ALL: [DitherMode; 2] = [DitherMode::FloydSteinberg, DitherMode::Atkinson];

    /// Canonical configuration name.
    pub fn name(self) -> &'static str {
        match self {
            DitherMode::FloydSteinberg => "FloydSteinberg",
            DitherMode::Atkinson => "Atkinson",
        }
    }

    /// The diffusion kernel this mode scans with.
    pub fn kernel(self) -> &'static Kernel {
        match self {
            DitherMode::FloydSteinberg => &FLOYD_STEINBERG,
            DitherMode::Atkinson => &ATKINSON,
        }
    }

    /// Run this mode's algorithm over `image`.
    ///
    /// See [`Dither::dither`].
    pub fn run(self, image: &mut ImageBuffer, palette: &[Color], metric: DistanceMetric) -> Vec<usize> {
        match self {
            DitherMode::FloydSteinberg => FloydSteinberg.dither(image, palette, metric),
            DitherMode::Atkinson => Atkinson.dither(image, palette, metric),
        }
    }
}

impl fmt::Display for DitherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DitherMode {
    type Err = DitherError;

    /// Case-insensitive; `-` and `_` separators are ignored, so
    /// `floyd-steinberg` parses as well as `FloydSteinberg`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "floydsteinberg" => Ok(DitherMode::FloydSteinberg),
            "atkinson" => Ok(DitherMode::Atkinson),
            _ => Err(DitherError::InvalidConfig {
                setting: "mode",
                value: s.to_string(),
            }),
        }
    }
}

/// Trait for error diffusion dithering algorithms.
pub trait Dither {
    /// Dither `image` in place and return the chosen palette index for
    /// every pixel, in row-major order.
    ///
    /// `image` and `palette` must already be in the same colour space.
    /// On return every pixel of `image` holds its chosen palette entry.
    ///
    /// # Panics
    ///
    /// Panics if `palette` is empty.
    fn dither(&self, image: &mut ImageBuffer, palette: &[Color], metric: DistanceMetric)
        -> Vec<usize>;
}

/// Generic error diffusion over a row-major raster scan.
///
/// Values are never clamped mid-scan; accumulated error may push pixels
/// outside the palette's range and matching still picks the nearest entry.
pub fn dither_with_kernel(
    image: &mut ImageBuffer,
    palette: &[Color],
    kernel: &Kernel,
    metric: DistanceMetric,
) -> Vec<usize> {
    assert!(!palette.is_empty(), "cannot dither against an empty palette");

    let width = image.width();
    let height = image.height();
    let mut indices = Vec::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let pixel = image.get(x, y);
            let index = find_nearest(pixel, palette, metric);
            let chosen = palette[index];

            let error = [
                pixel[0] - chosen[0],
                pixel[1] - chosen[1],
                pixel[2] - chosen[2],
            ];

            image.set(x, y, chosen);
            indices.push(index);
            kernel.diffuse(image, x, y, error);
        }
        tracing::trace!(row = y, rows = height, "row dithered");
    }

    indices
}
