//! Error diffusion kernel definitions.
//!
//! Each kernel specifies how the quantization error of one pixel is spread
//! over neighbours the raster scan has not reached yet.

use crate::color::Color;
use crate::raster::ImageBuffer;

/// An error diffusion kernel.
///
/// Every entry is `(dx, dy, weight)`; the neighbour at that offset receives
/// `error * weight / divisor`. All offsets point at pixels later in
/// row-major order (`dy > 0`, or `dy == 0` with `dx > 0`).
///
/// # Error Propagation
///
/// The fraction of error propagated is `sum(weights) / divisor`.
/// Floyd-Steinberg propagates all of it; Atkinson only 75%.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    pub entries: &'static [(i32, i32, u8)],

    /// Total divisor for normalizing weights.
    pub divisor: u8,
}

impl Kernel {
    /// Fraction of the error this kernel hands on.
    pub fn propagation(&self) -> f64 {
        let sum: u32 = self.entries.iter().map(|&(_, _, w)| u32::from(w)).sum();
        f64::from(sum) / f64::from(self.divisor)
    }

    /// Spread `error` from the pixel at (`x`, `y`) over its neighbours.
    ///
    /// Offsets that land outside the image are skipped; nothing wraps and
    /// nothing is clamped to the edge.
    #[inline]
    pub fn diffuse(&self, image: &mut ImageBuffer, x: usize, y: usize, error: Color) {
        let divisor = f64::from(self.divisor);
        for &(dx, dy, weight) in self.entries {
            let nx = x as i64 + i64::from(dx);
            let ny = y as i64 + i64::from(dy);
            if nx < 0 || ny < 0 || nx >= image.width() as i64 || ny >= image.height() as i64 {
                continue;
            }
            let factor = f64::from(weight) / divisor;
            image.add(
                nx as usize,
                ny as usize,
                [error[0] * factor, error[1] * factor, error[2] * factor],
            );
        }
    }
}

/// Atkinson dithering kernel.
///
/// Six neighbours at 1/8 each: 75% of the error propagates and the rest is
/// dropped. The loss is part of the algorithm's look.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
///
/// Originally developed by Bill Atkinson for the Apple Macintosh.
pub const ATKINSON: Kernel = Kernel {
    entries: &[
        (1, 0, 1),  // right
        (2, 0, 1),  // two right
        (-1, 1, 1), // bottom-left
        (0, 1, 1),  // bottom
        (1, 1, 1),  // bottom-right
        (0, 2, 1),  // two below
    ],
    divisor: 8,
};

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floyd_steinberg_propagates_everything() {
        assert_eq!(FLOYD_STEINBERG.propagation(), 1.0);
        assert_eq!(FLOYD_STEINBERG.entries.len(), 4);
    }

    #[test]
    fn test_atkinson_propagates_three_quarters() {
        assert_eq!(ATKINSON.propagation(), 0.75);
        assert_eq!(ATKINSON.entries.len(), 6);
    }

    /// Every target must come after its source in row-major order.
    #[test]
    fn test_offsets_point_forward() {
        for kernel in [FLOYD_STEINBERG, ATKINSON] {
            for &(dx, dy, _) in kernel.entries {
                assert!(dy > 0 || (dy == 0 && dx > 0), "({dx}, {dy}) points backwards");
            }
        }
    }

    #[test]
    fn test_diffuse_interior_weights() {
        let mut image = ImageBuffer::new(3, 2, vec![[0.0; 3]; 6]).unwrap();
        FLOYD_STEINBERG.diffuse(&mut image, 1, 0, [16.0, 0.0, -32.0]);

        assert_eq!(image.get(2, 0), [7.0, 0.0, -14.0]);
        assert_eq!(image.get(0, 1), [3.0, 0.0, -6.0]);
        assert_eq!(image.get(1, 1), [5.0, 0.0, -10.0]);
        assert_eq!(image.get(2, 1), [1.0, 0.0, -2.0]);
        // Source and already-visited pixels untouched
        assert_eq!(image.get(0, 0), [0.0; 3]);
        assert_eq!(image.get(1, 0), [0.0; 3]);
    }

    #[test]
    fn test_diffuse_skips_out_of_bounds() {
        // 1x1: every target is outside.
        let mut image = ImageBuffer::new(1, 1, vec![[0.5; 3]]).unwrap();
        ATKINSON.diffuse(&mut image, 0, 0, [1.0; 3]);
        FLOYD_STEINBERG.diffuse(&mut image, 0, 0, [1.0; 3]);
        assert_eq!(image.get(0, 0), [0.5; 3]);
    }

    #[test]
    fn test_diffuse_left_edge_drops_bottom_left() {
        let mut image = ImageBuffer::new(2, 2, vec![[0.0; 3]; 4]).unwrap();
        FLOYD_STEINBERG.diffuse(&mut image, 0, 0, [16.0; 3]);
        let total: f64 = image.pixels().iter().map(|p| p[0]).sum();
        // 7 + 5 + 1; the 3/16 share would land at x = -1.
        assert_eq!(total, 13.0);
    }

    #[test]
    fn test_atkinson_reaches_two_rows_down() {
        let mut image = ImageBuffer::new(4, 3, vec![[0.0; 3]; 12]).unwrap();
        ATKINSON.diffuse(&mut image, 1, 0, [8.0; 3]);
        for (x, y) in [(2, 0), (3, 0), (0, 1), (1, 1), (2, 1), (1, 2)] {
            assert_eq!(image.get(x, y), [1.0; 3], "({x}, {y})");
        }
        let total: f64 = image.pixels().iter().map(|p| p[1]).sum();
        assert_eq!(total, 6.0);
    }
}
