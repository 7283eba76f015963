//! sRGB transfer function (IEC 61966-2-1).
//!
//! Both directions are evaluated with the exact piecewise formula in `f64`.
//! Inputs outside 0.0..=1.0 are accepted: the linear segment handles
//! negatives and the power segment extends past 1.0, so error-laden values
//! never produce NaN.

/// Convert one sRGB channel to linear light.
#[inline]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert one linear-light channel back to sRGB.
#[inline]
pub fn linear_to_srgb(v: f64) -> f64 {
    if v <= 0.0031308 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}
