//! Ordered palette of sRGB colors.

use num_traits::ToPrimitive;

use super::error::PaletteError;
use crate::color::{Color, ColourSpace, Srgb};
use crate::raster::normalization_divisor;

/// An ordered, non-empty list of allowed output colors.
///
/// Colors are stored as normalized sRGB (0.0..=1.0). Order matters: when two
/// entries are equally near a pixel the lower index wins. Duplicates are
/// allowed and simply never win over their first occurrence.
///
/// # Example
///
/// ```
/// use diffuse_dither::{Palette, Srgb};
///
/// let palette = Palette::new(&[Srgb::from_u8(0, 0, 0), Srgb::from_u8(255, 0, 0)]).unwrap();
/// assert_eq!(palette.len(), 2);
///
/// let hex = Palette::from_hex(&["#000", "#ff0000"]).unwrap();
/// assert_eq!(hex, palette);
///
/// // The default palette is black and white.
/// assert_eq!(Palette::default().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Srgb>,
}

impl Palette {
    /// Create a palette from normalized sRGB colors.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `colors` is empty
    /// - [`PaletteError::NonFinite`] if any channel is NaN or infinite
    pub fn new(colors: &[Srgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        if let Some(index) = colors.iter().position(|c| !c.is_finite()) {
            return Err(PaletteError::NonFinite { index });
        }
        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// Create a palette from hex strings (`#RRGGBB`, `#RGB`, hash optional).
    ///
    /// # Errors
    ///
    /// [`PaletteError::ParseColor`] naming the first entry that fails to
    /// parse, or [`PaletteError::EmptyPalette`].
    pub fn from_hex<S: AsRef<str>>(hex: &[S]) -> Result<Self, PaletteError> {
        let colors = hex
            .iter()
            .enumerate()
            .map(|(index, s)| {
                s.as_ref()
                    .parse::<Srgb>()
                    .map_err(|source| PaletteError::ParseColor { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&colors)
    }

    /// Create a palette from raw numeric RGB triples.
    ///
    /// Triples may be 0..=255 or already normalized: if any value exceeds
    /// 1.0 the whole list is divided by 255.
    ///
    /// ```
    /// use diffuse_dither::{Palette, Srgb};
    ///
    /// let bytes = Palette::from_raw(&[[0u8, 0, 0], [255, 255, 255]]).unwrap();
    /// let floats = Palette::from_raw(&[[0.0f32, 0.0, 0.0], [1.0, 1.0, 1.0]]).unwrap();
    /// assert_eq!(bytes, floats);
    /// assert_eq!(bytes.get(1), Some(Srgb::new(1.0, 1.0, 1.0)));
    /// ```
    ///
    /// # Errors
    ///
    /// [`PaletteError::EmptyPalette`] or [`PaletteError::NonFinite`].
    pub fn from_raw<T: ToPrimitive>(entries: &[[T; 3]]) -> Result<Self, PaletteError> {
        let raw: Vec<Color> = entries
            .iter()
            .map(|e| {
                [
                    e[0].to_f64().unwrap_or(f64::NAN),
                    e[1].to_f64().unwrap_or(f64::NAN),
                    e[2].to_f64().unwrap_or(f64::NAN),
                ]
            })
            .collect();
        if let Some(index) = raw.iter().position(|c| c.iter().any(|v| !v.is_finite())) {
            return Err(PaletteError::NonFinite { index });
        }
        let divisor = normalization_divisor(raw.iter().flatten().copied());
        let colors: Vec<Srgb> = raw
            .into_iter()
            .map(|c| Srgb::new(c[0] / divisor, c[1] / divisor, c[2] / divisor))
            .collect();
        Self::new(&colors)
    }

    /// The two-color black and white palette.
    pub fn black_and_white() -> Self {
        Self {
            colors: vec![Srgb::new(0.0, 0.0, 0.0), Srgb::new(1.0, 1.0, 1.0)],
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; construction rejects empty palettes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Entry at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Srgb> {
        self.colors.get(index).copied()
    }

    /// All entries in palette order.
    #[inline]
    pub fn colors(&self) -> &[Srgb] {
        &self.colors
    }

    /// Entries mapped into `space`, ready for matching.
    pub fn transformed(&self, space: ColourSpace) -> Vec<Color> {
        self.colors.iter().map(|&c| space.apply(c.into())).collect()
    }

    /// Entries mapped into `space` and back, quantized to 8 bits.
    ///
    /// These are exactly the pixel values a dither call in `space` can emit.
    pub fn output_bytes(&self, space: ColourSpace) -> Vec<[u8; 3]> {
        self.transformed(space)
            .into_iter()
            .map(|c| Srgb::from(space.unapply(c)).to_bytes())
            .collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::black_and_white()
    }
}
