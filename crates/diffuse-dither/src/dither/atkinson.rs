//! Atkinson error diffusion dithering algorithm.
//!
//! Atkinson propagates only 75% of the quantization error. The lost 25%
//! pushes near-white and near-black regions to clean solid colour, giving
//! the high-contrast look of the original Macintosh.

use crate::color::Color;
use crate::palette::DistanceMetric;
use crate::raster::ImageBuffer;

use super::{dither_with_kernel, Dither, ATKINSON};

/// Atkinson error diffusion dithering.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
///
/// Each weight is 1/8; six neighbours receive 6/8 of the error in total.
///
/// # Example
///
/// ```
/// use diffuse_dither::{Atkinson, Dither, DistanceMetric, ImageBuffer};
///
/// let mut image = ImageBuffer::new(3, 3, vec![[0.5; 3]; 9]).unwrap();
/// let palette = [[0.0; 3], [1.0; 3]];
/// let indices = Atkinson.dither(&mut image, &palette, DistanceMetric::Euclidean);
/// assert_eq!(indices.len(), 9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Atkinson;

impl Dither for Atkinson {
    fn dither(
        &self,
        image: &mut ImageBuffer,
        palette: &[Color],
        metric: DistanceMetric,
    ) -> Vec<usize> {
        dither_with_kernel(image, palette, &ATKINSON, metric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dither::FloydSteinberg;

    const BW: [Color; 2] = [[0.0; 3], [1.0; 3]];

    fn gray(width: usize, height: usize, value: f64) -> ImageBuffer {
        ImageBuffer::new(width, height, vec![[value; 3]; width * height]).unwrap()
    }

    #[test]
    fn test_atkinson_basic() {
        let mut image = gray(4, 4, 0.5);
        let result = Atkinson.dither(&mut image, &BW, DistanceMetric::Euclidean);

        assert_eq!(result.len(), 16);
        assert!(result.contains(&0));
        assert!(result.contains(&1));
    }

    #[test]
    fn test_atkinson_exact_colors() {
        let mut black = gray(3, 3, 0.0);
        let mut white = gray(3, 3, 1.0);
        assert!(Atkinson
            .dither(&mut black, &BW, DistanceMetric::Euclidean)
            .iter()
            .all(|&i| i == 0));
        assert!(Atkinson
            .dither(&mut white, &BW, DistanceMetric::Euclidean)
            .iter()
            .all(|&i| i == 1));
    }

    /// Light grey: the 25% loss keeps more pixels white than full propagation.
    #[test]
    fn test_atkinson_loses_error_in_highlights() {
        let (width, height) = (16, 16);
        let mut atk = gray(width, height, 0.9);
        let mut fs = gray(width, height, 0.9);

        let atk_white = Atkinson
            .dither(&mut atk, &BW, DistanceMetric::Euclidean)
            .iter()
            .filter(|&&i| i == 1)
            .count();
        let fs_white = FloydSteinberg
            .dither(&mut fs, &BW, DistanceMetric::Euclidean)
            .iter()
            .filter(|&&i| i == 1)
            .count();

        assert!(
            atk_white > fs_white,
            "Atkinson white {atk_white} should exceed Floyd-Steinberg white {fs_white}"
        );
    }
}
