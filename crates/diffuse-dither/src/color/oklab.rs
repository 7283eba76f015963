//! Oklab perceptual color space
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use super::linear_rgb::LinearRgb;
use super::Color;

/// Linear sRGB to LMS (M1).
const M1: [[f64; 3]; 3] = [
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
];

/// Non-linear LMS to Lab (M2).
const M2: [[f64; 3]; 3] = [
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
];

/// Lab to non-linear LMS (M2 inverse).
const M2_INV: [[f64; 3]; 3] = [
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
];

/// LMS to linear sRGB (M1 inverse).
const M1_INV: [[f64; 3]; 3] = [
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.7076147010],
];

#[inline]
fn mul(m: &[[f64; 3]; 3], v: Color) -> Color {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// A color in Oklab perceptual color space.
///
/// - `l`: Lightness (0.0 = black, 1.0 = white for in-gamut colors)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// Values are not clamped. Carried quantization error may push components
/// outside their in-gamut ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colors
    pub l: f64,
    /// Green-red axis: typically -0.5 to 0.5
    pub a: f64,
    /// Blue-yellow axis: typically -0.5 to 0.5
    pub b: f64,
}

impl Oklab {
    /// Create a new Oklab color.
    ///
    /// ```
    /// use diffuse_dither::Oklab;
    ///
    /// let gray = Oklab::new(0.5, 0.0, 0.0);
    /// assert_eq!(gray.l, 0.5);
    /// ```
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

impl From<LinearRgb> for Oklab {
    /// Convert from linear RGB to Oklab (2021-01-25 matrices).
    ///
    /// ```
    /// use diffuse_dither::{LinearRgb, Oklab};
    ///
    /// let oklab = Oklab::from(LinearRgb::new(0.5, 0.5, 0.5));
    /// assert!(oklab.a.abs() < 1e-6);
    /// assert!(oklab.b.abs() < 1e-6);
    /// ```
    fn from(rgb: LinearRgb) -> Self {
        let lms = mul(&M1, rgb.into());
        let lms_ = [lms[0].cbrt(), lms[1].cbrt(), lms[2].cbrt()];
        let [l, a, b] = mul(&M2, lms_);
        Oklab { l, a, b }
    }
}

impl From<Oklab> for LinearRgb {
    /// Convert from Oklab to linear RGB.
    ///
    /// The result is not clamped: out-of-gamut Oklab colors produce
    /// channels outside 0.0..=1.0. See [`LinearRgb::clamped`].
    fn from(lab: Oklab) -> Self {
        let lms_ = mul(&M2_INV, lab.into());
        let lms = [
            lms_[0] * lms_[0] * lms_[0],
            lms_[1] * lms_[1] * lms_[1],
            lms_[2] * lms_[2] * lms_[2],
        ];
        LinearRgb::from(mul(&M1_INV, lms))
    }
}

impl From<Color> for Oklab {
    #[inline]
    fn from(c: Color) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<Oklab> for Color {
    #[inline]
    fn from(c: Oklab) -> Self {
        [c.l, c.a, c.b]
    }
}
