//! Benchmark ratio-driven threshold estimators and binarize greyscale images.
//!
//! This crate provides:
//! - re-exports of the estimator and buffer crates
//! - the benchmark harness that times all six estimators on one image
//! - the binarization applier and its tie policy
//! - (feature-gated) image I/O via the `image` crate and an end-to-end `run`
//!
//! ## Quickstart
//!
//! ```
//! use ratio_threshold::{binarize, run_benchmark, HarnessConfig, NullSink};
//! use ratio_threshold::core::GrayImage;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut img = GrayImage::from_vec(4, 1, vec![12u8, 200, 90, 40])?;
//! let outcome = run_benchmark(&img.view(), &HarnessConfig::default(), &mut NullSink)?;
//! binarize(img.as_mut_slice(), outcome.threshold);
//! assert!(img.data.iter().all(|&p| p == 0 || p == 255));
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `ratio_threshold::core`: pixel types and greyscale buffers.
//! - `ratio_threshold::estimators`: the six threshold estimators.
//! - [`run_benchmark`]: timed evaluation in fixed order.
//! - [`binarize`]: threshold application.
//! - [`run`] (feature `image`): load -> benchmark -> binarize -> save.

pub use ratio_threshold_core as core;
pub use ratio_threshold_estimators as estimators;

pub use ratio_threshold_core::{BitDepth, GrayImage, GrayImageView, Pixel};
pub use ratio_threshold_estimators::{EstimatorKind, EstimatorParams, Ratio};

mod binarize;
mod config;
mod error;
mod harness;
mod report;

#[cfg(feature = "image")]
mod io;
#[cfg(feature = "image")]
mod pipeline;

pub use binarize::{binarize, binarize_pixel, binarized, black_fraction};
pub use config::RunConfig;
pub use error::{HarnessError, IoError, RunError};
pub use harness::{run_benchmark, BenchmarkOutcome, HarnessConfig};
pub use report::{BenchmarkReport, EstimatorRun, LogSink, NullSink, ReportSink, TextReport};

#[cfg(feature = "image")]
pub use io::DynGrayImage;
#[cfg(feature = "image")]
pub use pipeline::{process_image, run, RunSummary};
