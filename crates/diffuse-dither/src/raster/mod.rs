//! Input containers, validation and normalization.
//!
//! The ditherer reads pixels through the [`ImageView`] trait so any numeric
//! grid that can report its shape and yield samples by
//! `(row, col, channel)` can be dithered. [`Raster`] is the owned
//! implementation used by the rest of the workspace; [`ImageBuffer`] is the
//! validated, normalized `f64` working buffer a dither call mutates.

mod buffer;
mod raster;

pub use buffer::ImageBuffer;
pub use raster::Raster;

use num_traits::ToPrimitive;

/// Shape of an image as reported by an [`ImageView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    /// Number of rows
    pub height: usize,
    /// Number of columns
    pub width: usize,
    /// Samples per pixel, or `None` for a rank-2 (single-value) grid
    pub channels: Option<usize>,
}

/// Read access to a rank-2 or rank-3 numeric grid.
pub trait ImageView {
    /// Sample type; anything convertible to `f64`.
    type Sample: ToPrimitive;

    /// Shape of the grid.
    fn dims(&self) -> Dims;

    /// Sample at `(row, col, channel)`. Rank-2 grids ignore `channel`.
    fn sample(&self, row: usize, col: usize, channel: usize) -> Self::Sample;
}

/// Divisor that brings `values` into 0.0..=1.0.
///
/// Any value strictly greater than 1.0 marks the whole set as 0..=255
/// data (divisor 255). Otherwise the set is taken as already normalized,
/// including when its maximum is exactly 1.0.
pub(crate) fn normalization_divisor(values: impl IntoIterator<Item = f64>) -> f64 {
    if values.into_iter().any(|v| v > 1.0) {
        255.0
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divisor_threshold() {
        assert_eq!(normalization_divisor([0.0, 0.5, 1.0]), 1.0);
        assert_eq!(normalization_divisor([0.0, 1.0000001]), 255.0);
        assert_eq!(normalization_divisor([2.0]), 255.0);
        assert_eq!(normalization_divisor(std::iter::empty()), 1.0);
    }
}
