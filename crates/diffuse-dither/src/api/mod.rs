//! Public API for the diffuse-dither crate.
//!
//! This module provides the high-level API: the [`Ditherer`] orchestrator,
//! its [`DitherConfig`], and the [`DitherError`] unified error type.

mod builder;
mod error;

pub use builder::{DitherConfig, Ditherer};
pub use error::{DitherError, InvalidInput};
