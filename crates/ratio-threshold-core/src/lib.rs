//! Pixel buffer model shared by the `ratio-threshold-*` crates.
//!
//! This crate is intentionally small. It knows nothing about thresholding
//! algorithms or image codecs; it only defines the sample types, the
//! row-major greyscale buffer, and the logger used by the binaries.

mod image;
mod logger;
mod pixel;

pub use image::{BufferError, GrayImage, GrayImageView};
pub use pixel::{BitDepth, Pixel, UnsupportedBitDepth};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
