//! Colour-space dispatch for the dithering pipeline.
//!
//! [`ColourSpace`] selects where palette matching and error diffusion
//! happen. Every variant maps normalized sRGB into its working space with
//! [`apply`](ColourSpace::apply) and back with
//! [`unapply`](ColourSpace::unapply); the `_all` variants run the same
//! pointwise mapping over a whole buffer.

use std::fmt;
use std::str::FromStr;

use super::{Color, LinearRgb, Oklab, Srgb};
use crate::api::DitherError;
use crate::palette::DistanceMetric;

/// Rec. 709 luminance weights applied per channel when matching in linear sRGB.
pub(crate) const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// The colour space palette matching and error diffusion operate in.
///
/// # Example
///
/// ```
/// use diffuse_dither::ColourSpace;
///
/// let space: ColourSpace = "lin-srgb".parse().unwrap();
/// assert_eq!(space, ColourSpace::LinSrgb);
/// assert_eq!(space.to_string(), "lin-srgb");
///
/// assert!("hsv".parse::<ColourSpace>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColourSpace {
    /// Gamma-encoded sRGB as stored; apply/unapply are the identity.
    #[default]
    Srgb,
    /// Linear-light sRGB; matching weights channels by luminance.
    LinSrgb,
    /// OKLab; unapply clamps linear RGB to 0.0..=1.0 before gamma encoding.
    Oklab,
}

impl ColourSpace {
    /// All colour spaces, in declaration order.
    pub const ALL: [ColourSpace; 3] = [ColourSpace::Srgb, ColourSpace::LinSrgb, ColourSpace::Oklab];

    /// Canonical configuration name.
    pub fn name(self) -> &'static str {
        match self {
            ColourSpace::Srgb => "srgb",
            ColourSpace::LinSrgb => "lin-srgb",
            ColourSpace::Oklab => "oklab",
        }
    }

    /// Map one normalized sRGB color into this space.
    #[inline]
    pub fn apply(self, color: Color) -> Color {
        let srgb = Srgb::from(color);
        match self {
            ColourSpace::Srgb => color,
            ColourSpace::LinSrgb => LinearRgb::from(srgb).into(),
            ColourSpace::Oklab => Oklab::from(LinearRgb::from(srgb)).into(),
        }
    }

    /// Map one color in this space back to normalized sRGB.
    #[inline]
    pub fn unapply(self, color: Color) -> Color {
        match self {
            ColourSpace::Srgb => color,
            ColourSpace::LinSrgb => Srgb::from(LinearRgb::from(color)).into(),
            ColourSpace::Oklab => {
                // The OKLab round trip can leave the RGB gamut.
                let linear = LinearRgb::from(Oklab::from(color)).clamped();
                Srgb::from(linear).into()
            }
        }
    }

    /// [`apply`](Self::apply) every color in place.
    pub fn apply_all(self, colors: &mut [Color]) {
        if self == ColourSpace::Srgb {
            return;
        }
        for c in colors.iter_mut() {
            *c = self.apply(*c);
        }
    }

    /// [`unapply`](Self::unapply) every color in place.
    pub fn unapply_all(self, colors: &mut [Color]) {
        if self == ColourSpace::Srgb {
            return;
        }
        for c in colors.iter_mut() {
            *c = self.unapply(*c);
        }
    }

    /// Distance metric used for palette matching in this space.
    pub fn metric(self) -> DistanceMetric {
        match self {
            ColourSpace::LinSrgb => DistanceMetric::Weighted(LUMA_WEIGHTS),
            ColourSpace::Srgb | ColourSpace::Oklab => DistanceMetric::Euclidean,
        }
    }
}

impl fmt::Display for ColourSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColourSpace {
    type Err = DitherError;

    /// Parse `srgb`, `lin-srgb` or `oklab` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ColourSpace::ALL
            .into_iter()
            .find(|space| space.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DitherError::InvalidConfig {
                setting: "colour_space",
                value: s.to_string(),
            })
    }
}
