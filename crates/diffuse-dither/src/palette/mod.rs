//! Palette types and nearest-color matching
//!
//! This module provides the ordered [`Palette`] container, the
//! [`DistanceMetric`] used to compare colors, and the error types for
//! palette construction and hex parsing.

mod error;
mod matcher;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use matcher::{find_nearest, DistanceMetric};
pub use palette::Palette;
