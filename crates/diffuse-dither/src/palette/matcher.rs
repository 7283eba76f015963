//! Nearest-color search.

use crate::color::Color;

/// Distance metric for palette color matching.
///
/// Both variants compute a squared Euclidean distance; the square root is
/// monotonic and irrelevant for picking the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DistanceMetric {
    /// Plain squared Euclidean distance.
    #[default]
    Euclidean,

    /// Each channel difference is scaled by its weight before squaring.
    Weighted([f64; 3]),
}

impl DistanceMetric {
    /// Squared distance between two colors under this metric.
    ///
    /// ```
    /// use diffuse_dither::DistanceMetric;
    ///
    /// let d = DistanceMetric::Euclidean.distance_squared([0.0, 0.0, 0.0], [1.0, 1.0, 0.0]);
    /// assert_eq!(d, 2.0);
    ///
    /// let w = DistanceMetric::Weighted([0.5, 1.0, 1.0]);
    /// assert_eq!(w.distance_squared([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]), 0.25);
    /// ```
    #[inline]
    pub fn distance_squared(self, a: Color, b: Color) -> f64 {
        let mut d = [a[0] - b[0], a[1] - b[1], a[2] - b[2]];
        if let DistanceMetric::Weighted(w) = self {
            for (dc, wc) in d.iter_mut().zip(w) {
                *dc *= wc;
            }
        }
        d[0] * d[0] + d[1] * d[1] + d[2] * d[2]
    }
}

/// Index of the palette entry nearest to `pixel`.
///
/// Ties go to the lowest index. `palette` must not be empty; callers
/// validate that before scanning, an empty slice yields index 0.
#[inline]
pub fn find_nearest(pixel: Color, palette: &[Color], metric: DistanceMetric) -> usize {
    let mut best_idx = 0;
    let mut best_dist = f64::INFINITY;
    for (i, &entry) in palette.iter().enumerate() {
        let dist = metric.distance_squared(pixel, entry);
        if dist < best_dist {
            best_dist = dist;
            best_idx = i;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;

    const BW: [Color; 2] = [[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];

    #[test]
    fn test_nearest_basic() {
        assert_eq!(find_nearest([0.2, 0.2, 0.2], &BW, DistanceMetric::Euclidean), 0);
        assert_eq!(find_nearest([0.8, 0.7, 0.9], &BW, DistanceMetric::Euclidean), 1);
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        assert_eq!(find_nearest([0.5, 0.5, 0.5], &BW, DistanceMetric::Euclidean), 0);

        let reversed = [BW[1], BW[0]];
        assert_eq!(
            find_nearest([0.5, 0.5, 0.5], &reversed, DistanceMetric::Euclidean),
            0
        );
    }

    #[test]
    fn test_duplicate_entries_pick_first() {
        let palette = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 0.0]];
        assert_eq!(find_nearest([0.9, 0.0, 0.0], &palette, DistanceMetric::Euclidean), 1);
    }

    #[test]
    fn test_single_entry_always_wins() {
        let palette = [[0.3, 0.6, 0.9]];
        for pixel in [[0.0; 3], [1.0; 3], [-4.0, 7.0, 0.5]] {
            assert_eq!(find_nearest(pixel, &palette, DistanceMetric::Euclidean), 0);
        }
    }

    /// Weighting can flip the winner: green differences dominate under
    /// luminance weights while red ones barely count.
    #[test]
    fn test_weights_change_the_winner() {
        let palette = [[0.0, 0.3, 0.0], [0.6, 0.0, 0.0]];
        let pixel = [0.0, 0.0, 0.0];

        // Unweighted: 0.09 vs 0.36 -> entry 0
        assert_eq!(find_nearest(pixel, &palette, DistanceMetric::Euclidean), 0);

        // Weighted: (0.3*0.7152)^2 = 0.046 vs (0.6*0.2126)^2 = 0.016 -> entry 1
        let luma = DistanceMetric::Weighted([0.2126, 0.7152, 0.0722]);
        assert_eq!(find_nearest(pixel, &palette, luma), 1);
    }

    #[test]
    fn test_distance_symmetry_and_identity() {
        let a = [0.1, 0.5, 0.9];
        let b = [0.7, 0.2, 0.4];
        for metric in [DistanceMetric::Euclidean, DistanceMetric::Weighted([0.2, 0.7, 0.1])] {
            assert_eq!(metric.distance_squared(a, b), metric.distance_squared(b, a));
            assert_eq!(metric.distance_squared(a, a), 0.0);
        }
    }
}
