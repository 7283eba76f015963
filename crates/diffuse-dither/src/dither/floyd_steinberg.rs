//! Floyd-Steinberg error diffusion dithering algorithm.

use crate::color::Color;
use crate::palette::DistanceMetric;
use crate::raster::ImageBuffer;

use super::{dither_with_kernel, Dither, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// The classic algorithm: 100% of the quantization error goes to 4
/// neighbours.
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
///
/// # Example
///
/// ```
/// use diffuse_dither::{Dither, DistanceMetric, FloydSteinberg, ImageBuffer};
///
/// let mut image = ImageBuffer::new(2, 2, vec![[0.5; 3]; 4]).unwrap();
/// let palette = [[0.0; 3], [1.0; 3]];
/// let indices = FloydSteinberg.dither(&mut image, &palette, DistanceMetric::Euclidean);
/// assert_eq!(indices.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(
        &self,
        image: &mut ImageBuffer,
        palette: &[Color],
        metric: DistanceMetric,
    ) -> Vec<usize> {
        dither_with_kernel(image, palette, &FLOYD_STEINBERG, metric)
    }
}
