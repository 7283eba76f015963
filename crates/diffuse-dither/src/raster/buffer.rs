//! The working buffer of one dither call.

use num_traits::ToPrimitive;

use super::{normalization_divisor, ImageView};
use crate::api::InvalidInput;
use crate::color::Color;

/// Row-major `f64` RGB buffer, exclusively owned by one dither call.
///
/// Values start normalized to 0.0..=1.0 and may leave that range while
/// carried quantization error accumulates.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Wrap already-normalized pixels.
    ///
    /// # Errors
    ///
    /// [`InvalidInput::ShapeMismatch`] if `pixels.len() != width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<Color>) -> Result<Self, InvalidInput> {
        if pixels.len() != width * height {
            return Err(InvalidInput::ShapeMismatch {
                expected: width * height,
                found: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Validate `view` and copy it into a normalized buffer.
    ///
    /// Checks run before anything is allocated for the scan: the view must
    /// be rank 3 with exactly three channels, non-empty, and every sample
    /// must convert to a finite `f64`. If any sample exceeds 1.0 the whole
    /// image is divided by 255.
    ///
    /// # Errors
    ///
    /// The matching [`InvalidInput`] variant for the first failed check.
    pub fn from_view<V: ImageView + ?Sized>(view: &V) -> Result<Self, InvalidInput> {
        let dims = view.dims();
        match dims.channels {
            None => return Err(InvalidInput::MissingChannelAxis),
            Some(3) => {}
            Some(found) => return Err(InvalidInput::ChannelCount { found }),
        }
        if dims.height == 0 || dims.width == 0 {
            return Err(InvalidInput::EmptyImage {
                height: dims.height,
                width: dims.width,
            });
        }

        let mut pixels = Vec::with_capacity(dims.height * dims.width);
        for row in 0..dims.height {
            for col in 0..dims.width {
                let mut px = [0.0; 3];
                for (channel, value) in px.iter_mut().enumerate() {
                    let v = view
                        .sample(row, col, channel)
                        .to_f64()
                        .unwrap_or(f64::NAN);
                    if !v.is_finite() {
                        return Err(InvalidInput::NonFinite { row, col, channel });
                    }
                    *value = v;
                }
                pixels.push(px);
            }
        }

        let divisor = normalization_divisor(pixels.iter().flatten().copied());
        if divisor != 1.0 {
            for px in pixels.iter_mut() {
                for v in px.iter_mut() {
                    *v /= divisor;
                }
            }
        }

        Ok(Self {
            width: dims.width,
            height: dims.height,
            pixels,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.width + x]
    }

    /// Overwrite the pixel at column `x`, row `y`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Color) {
        self.pixels[y * self.width + x] = color;
    }

    /// Add `delta` to the pixel at column `x`, row `y`.
    #[inline]
    pub fn add(&mut self, x: usize, y: usize, delta: Color) {
        let px = &mut self.pixels[y * self.width + x];
        px[0] += delta[0];
        px[1] += delta[1];
        px[2] += delta[2];
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Mutable access to all pixels in row-major order.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }
}
