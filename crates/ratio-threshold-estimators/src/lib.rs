//! Threshold estimators driven by a target black-pixel ratio.
//!
//! Each estimator takes a greyscale buffer and a [`Ratio`] and returns the
//! intensity below which roughly that fraction of pixels lies:
//!
//! - exact: [`counting_sort`], [`standard_sort`], [`nth_element`]. All three
//!   return the value a full ascending sort holds at
//!   `min(floor(N * ratio), N - 1)`.
//! - approximate: [`uniform_sample`] (exact quantile of a strided subsample),
//!   [`normal_estimate`] and [`weighted_estimate`] (moment heuristics).
//!
//! `standard_sort` and `nth_element` reorder their input. Use
//! [`EstimatorKind::estimate`] to run any estimator without touching the
//! caller's buffer.
//!
//! ```
//! use ratio_threshold_estimators::{counting_sort, Ratio};
//!
//! let pixels = [10u8, 20, 30, 40, 50];
//! let ratio = Ratio::new(0.4).unwrap();
//! assert_eq!(counting_sort(&pixels, ratio).unwrap(), 30);
//! ```

mod error;
mod histogram;
mod kind;
mod ratio;
mod sort;
mod stats;

pub use error::{InvalidArgument, ThresholdError};
pub use histogram::{counting_sort, uniform_sample, DEFAULT_SAMPLE_STRIDE};
pub use kind::{EstimatorKind, EstimatorParams, UnknownEstimator};
pub use ratio::Ratio;
pub use sort::{nth_element, standard_sort};
pub use stats::{normal_estimate, weighted_estimate};

pub use ratio_threshold_core::Pixel;
