//! Test fixtures and constants.

use std::path::PathBuf;

use ditherkit::rendering::encode_png;
use tempfile::TempDir;

/// Palette strings used across tests
pub mod palettes {
    /// Primary colours plus black and white
    pub const RGB5: &str = "#000000,#FFFFFF,#FF0000,#00FF00,#0000FF";

    /// Same as [`RGB5`], as a YAML list
    pub const RGB5_YAML: &str = r##"["#000000", "#FFFFFF", "#FF0000", "#00FF00", "#0000FF"]"##;
}

/// Horizontal black-to-white ramp as packed RGB.
pub fn gray_ramp(width: usize, height: usize) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(width * height * 3);
    for _ in 0..height {
        for x in 0..width {
            let v = (x * 255 / (width - 1)) as u8;
            rgb.extend_from_slice(&[v, v, v]);
        }
    }
    rgb
}

/// Red/green/blue gradient as packed RGB.
pub fn rgb_gradient(width: usize, height: usize) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            rgb.extend_from_slice(&[
                (x * 255 / (width - 1)) as u8,
                (y * 255 / (height - 1)) as u8,
                ((width - 1 - x) * 255 / (width - 1)) as u8,
            ]);
        }
    }
    rgb
}

/// Encoded PNG of [`gray_ramp`].
pub fn gray_ramp_png(width: usize, height: usize) -> Vec<u8> {
    encode_png(width, height, &gray_ramp(width, height)).expect("encode ramp")
}

/// Encoded PNG of [`rgb_gradient`].
pub fn rgb_gradient_png(width: usize, height: usize) -> Vec<u8> {
    encode_png(width, height, &rgb_gradient(width, height)).expect("encode gradient")
}

/// Scratch directory with helpers for writing input files.
pub struct Scratch {
    pub dir: TempDir,
}

impl Scratch {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("write scratch file");
        path
    }
}
