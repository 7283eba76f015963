//! The result of one dither call.

/// Dithered image: 8-bit RGB pixels plus the palette index behind each.
///
/// Both are row-major. The RGB bytes are what the inverse colour-space
/// transform produced from the chosen entries, so index `i` always maps to
/// the same three bytes within one image.
///
/// # Example
///
/// ```
/// use diffuse_dither::DitheredImage;
///
/// let image = DitheredImage::new(2, 1, vec![0, 0, 0, 255, 255, 255], vec![0, 1]);
/// assert_eq!(image.pixel(1, 0), [255, 255, 255]);
/// assert_eq!(image.indices(), &[0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DitheredImage {
    width: usize,
    height: usize,
    /// Three bytes per pixel.
    rgb: Vec<u8>,
    /// One palette index per pixel.
    indices: Vec<usize>,
}

impl DitheredImage {
    /// Assemble a result.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `rgb` holds three bytes and `indices` one entry
    /// per pixel.
    pub fn new(width: usize, height: usize, rgb: Vec<u8>, indices: Vec<usize>) -> Self {
        debug_assert_eq!(
            rgb.len(),
            width * height * 3,
            "rgb length ({}) must be 3 * {}x{}",
            rgb.len(),
            width,
            height,
        );
        debug_assert_eq!(indices.len(), width * height);
        Self {
            width,
            height,
            rgb,
            indices,
        }
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

    /// Packed RGB bytes, row-major.
    #[inline]
    pub fn rgb(&self) -> &[u8] {
        &self.rgb
    }

    /// Palette index per pixel, row-major.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// RGB bytes of the pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let i = (y * self.width + x) * 3;
        [self.rgb[i], self.rgb[i + 1], self.rgb[i + 2]]
    }

    /// Iterate over pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.rgb.chunks_exact(3).map(|c| [c[0], c[1], c[2]])
    }

    /// Consume the image, keeping the RGB bytes.
    pub fn into_rgb(self) -> Vec<u8> {
        self.rgb
    }
}
