//! Owned row-major numeric grid.

use num_traits::ToPrimitive;

use super::{Dims, ImageView};
use crate::api::InvalidInput;

/// An owned row-major grid of samples, rank 2 (`H×W`) or rank 3 (`H×W×C`).
///
/// # Example
///
/// ```
/// use diffuse_dither::{ImageView, Raster};
///
/// let raster = Raster::from_pixels(1, 2, vec![[255u8, 0, 0], [0, 0, 255]]).unwrap();
/// assert_eq!(raster.dims().channels, Some(3));
/// assert_eq!(raster.sample(0, 1, 2), 255);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Raster<T> {
    height: usize,
    width: usize,
    channels: Option<usize>,
    data: Vec<T>,
}

impl<T> Raster<T> {
    /// Wrap `data` as an `height×width×channels` grid.
    ///
    /// # Errors
    ///
    /// [`InvalidInput::ShapeMismatch`] if `data.len()` differs from the
    /// product of the dimensions.
    pub fn new(
        height: usize,
        width: usize,
        channels: usize,
        data: Vec<T>,
    ) -> Result<Self, InvalidInput> {
        check_len(height * width * channels, data.len())?;
        Ok(Self {
            height,
            width,
            channels: Some(channels),
            data,
        })
    }

    /// Wrap `data` as a rank-2 `height×width` grid.
    ///
    /// # Errors
    ///
    /// [`InvalidInput::ShapeMismatch`] on a length mismatch.
    pub fn grid(height: usize, width: usize, data: Vec<T>) -> Result<Self, InvalidInput> {
        check_len(height * width, data.len())?;
        Ok(Self {
            height,
            width,
            channels: None,
            data,
        })
    }

    /// Build an `height×width×3` grid from per-pixel triples.
    ///
    /// # Errors
    ///
    /// [`InvalidInput::ShapeMismatch`] if `pixels.len() != height * width`.
    pub fn from_pixels(
        height: usize,
        width: usize,
        pixels: Vec<[T; 3]>,
    ) -> Result<Self, InvalidInput> {
        check_len(height * width, pixels.len())?;
        Ok(Self {
            height,
            width,
            channels: Some(3),
            data: pixels.into_iter().flatten().collect(),
        })
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Raw samples in row-major order.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Consume the raster, returning its samples.
    #[inline]
    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

fn check_len(expected: usize, found: usize) -> Result<(), InvalidInput> {
    if expected == found {
        Ok(())
    } else {
        Err(InvalidInput::ShapeMismatch { expected, found })
    }
}

impl<T: ToPrimitive + Copy> ImageView for Raster<T> {
    type Sample = T;

    fn dims(&self) -> Dims {
        Dims {
            height: self.height,
            width: self.width,
            channels: self.channels,
        }
    }

    #[inline]
    fn sample(&self, row: usize, col: usize, channel: usize) -> T {
        let pixel = row * self.width + col;
        match self.channels {
            Some(c) => self.data[pixel * c + channel],
            None => self.data[pixel],
        }
    }
}
