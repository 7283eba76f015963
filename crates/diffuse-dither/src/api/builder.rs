//! Ditherer -- the primary entry point for the crate.
//!
//! [`Ditherer`] runs the whole pipeline for one image: validation,
//! normalization, the forward colour-space transform, the raster scan, the
//! inverse transform and 8-bit quantization.

use crate::color::{ColourSpace, Srgb};
use crate::dither::DitherMode;
use crate::output::DitheredImage;
use crate::palette::Palette;
use crate::raster::{ImageBuffer, ImageView};

use super::error::{DitherError, InvalidInput};

/// Dither algorithm and colour space, fixed for the lifetime of a
/// [`Ditherer`].
///
/// # Example
///
/// ```
/// use diffuse_dither::{ColourSpace, DitherConfig, DitherMode};
///
/// let config = DitherConfig::default()
///     .with_mode(DitherMode::Atkinson)
///     .with_colour_space(ColourSpace::Oklab);
///
/// assert_eq!(config, DitherConfig::parse("atkinson", "OKLab").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DitherConfig {
    /// Error diffusion algorithm.
    pub mode: DitherMode,
    /// Space palette matching and error diffusion happen in.
    pub colour_space: ColourSpace,
}

impl DitherConfig {
    /// Set the dither mode.
    #[inline]
    pub fn with_mode(mut self, mode: DitherMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the colour space.
    #[inline]
    pub fn with_colour_space(mut self, colour_space: ColourSpace) -> Self {
        self.colour_space = colour_space;
        self
    }

    /// Build a config from mode and colour-space names.
    ///
    /// # Errors
    ///
    /// [`DitherError::InvalidConfig`] naming the first unrecognized setting.
    pub fn parse(mode: &str, colour_space: &str) -> Result<Self, DitherError> {
        Ok(Self {
            mode: mode.parse()?,
            colour_space: colour_space.parse()?,
        })
    }
}

/// Palette error-diffusion ditherer.
///
/// Immutable after construction and holds no per-call state, so one
/// instance can be shared and reused across images.
///
/// # Example
///
/// ```
/// use diffuse_dither::{ColourSpace, DitherConfig, Ditherer, Palette, Raster};
///
/// let ditherer = Ditherer::new(DitherConfig::default().with_colour_space(ColourSpace::LinSrgb));
/// let palette = Palette::from_hex(&["#000", "#f00", "#fff"]).unwrap();
///
/// let image = Raster::from_pixels(2, 2, vec![[200u8, 40, 40]; 4]).unwrap();
/// let result = ditherer.dither(&image, &palette).unwrap();
///
/// assert_eq!((result.width(), result.height()), (2, 2));
/// let allowed = palette.output_bytes(ColourSpace::LinSrgb);
/// assert!(result.pixels().all(|px| allowed.contains(&px)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Ditherer {
    config: DitherConfig,
}

impl Ditherer {
    /// Create a ditherer with the given configuration.
    pub fn new(config: DitherConfig) -> Self {
        Self { config }
    }

    /// The configuration this ditherer was built with.
    #[inline]
    pub fn config(&self) -> DitherConfig {
        self.config
    }

    /// Dither `image` against `palette`.
    ///
    /// `image` must be `height x width x 3`, integer (0..=255) or float
    /// (0.0..=1.0). If any sample exceeds 1.0 the image is taken to be
    /// 0..=255 data and divided by 255.
    ///
    /// Every output pixel is some palette entry `c` after the round trip
    /// through the active colour space, i.e.
    /// `round(255 * unapply(apply(c)))`.
    ///
    /// # Errors
    ///
    /// [`DitherError::InvalidInput`] if the palette is empty, the image is
    /// not `H x W x 3`, is empty, or holds non-finite samples. Nothing is
    /// scanned in that case.
    pub fn dither<V: ImageView + ?Sized>(
        &self,
        image: &V,
        palette: &Palette,
    ) -> Result<DitheredImage, DitherError> {
        if palette.is_empty() {
            return Err(InvalidInput::EmptyPalette.into());
        }
        let mut buffer = ImageBuffer::from_view(image)?;

        let DitherConfig { mode, colour_space } = self.config;
        let (width, height) = (buffer.width(), buffer.height());
        tracing::debug!(
            width,
            height,
            %mode,
            %colour_space,
            palette = palette.len(),
            "dithering image"
        );

        colour_space.apply_all(buffer.pixels_mut());
        let entries = palette.transformed(colour_space);

        let indices = mode.run(&mut buffer, &entries, colour_space.metric());

        colour_space.unapply_all(buffer.pixels_mut());
        let rgb: Vec<u8> = buffer
            .pixels()
            .iter()
            .flat_map(|&c| Srgb::from(c).to_bytes())
            .collect();

        if tracing::enabled!(tracing::Level::DEBUG) {
            let mut usage = vec![0usize; palette.len()];
            for &i in &indices {
                usage[i] += 1;
            }
            tracing::debug!(?usage, "dithering complete");
        }

        Ok(DitheredImage::new(width, height, rgb, indices))
    }

    /// Dither `image` against the default black and white palette.
    ///
    /// # Errors
    ///
    /// As [`dither`](Self::dither).
    pub fn dither_default<V: ImageView + ?Sized>(
        &self,
        image: &V,
    ) -> Result<DitheredImage, DitherError> {
        self.dither(image, &Palette::black_and_white())
    }
}
