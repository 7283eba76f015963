//! ditherkit - palette dithering for PNG images
//!
//! Command-line front end for the `diffuse-dither` crate.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
