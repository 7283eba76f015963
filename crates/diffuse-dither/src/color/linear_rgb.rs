//! Linear RGB color type
//!
//! Linear RGB is the color space where light addition is physically accurate.

use super::gamma::srgb_to_linear;
use super::srgb::Srgb;
use super::Color;

/// A color in linear RGB color space (sRGB primaries, gamma removed).
///
/// Values are typically in 0.0..=1.0 but may leave that range while
/// quantization error is being carried.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Clamp every channel to 0.0..=1.0.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }
}

impl From<Srgb> for LinearRgb {
    /// Gamma-decode with the exact IEC 61966-2-1 formula.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}

impl From<Color> for LinearRgb {
    #[inline]
    fn from(c: Color) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<LinearRgb> for Color {
    #[inline]
    fn from(c: LinearRgb) -> Self {
        [c.r, c.g, c.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped() {
        let c = LinearRgb::new(-0.25, 0.5, 1.000001).clamped();
        assert_eq!(c, LinearRgb::new(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_gamma_direction() {
        // Gamma decoding darkens mid-tones; encoding brightens them.
        let linear = LinearRgb::from(Srgb::new(0.5, 0.5, 0.5));
        assert!(linear.r < 0.5);
        let srgb = Srgb::from(LinearRgb::new(0.5, 0.5, 0.5));
        assert!(srgb.r > 0.5);
    }
}
