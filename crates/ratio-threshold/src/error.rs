use ratio_threshold_core::BufferError;
use ratio_threshold_estimators::{InvalidArgument, ThresholdError};
use std::path::PathBuf;

/// File, JSON and codec failures.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "image")]
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Buffer(#[from] BufferError),
}

/// Errors raised while benchmarking estimators.
#[derive(thiserror::Error, Debug)]
pub enum HarnessError {
    #[error("{estimator} failed: {source}")]
    Estimator {
        estimator: &'static str,
        #[source]
        source: ThresholdError,
    },
    #[error("failed to write benchmark output: {0}")]
    Sink(#[from] std::io::Error),
}

/// Errors from the end-to-end load -> benchmark -> binarize -> save path.
#[derive(thiserror::Error, Debug)]
pub enum RunError {
    #[error("invalid configuration: {0}")]
    Config(#[from] InvalidArgument),
    #[error("failed to load {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: IoError,
    },
    #[error(transparent)]
    Harness(#[from] HarnessError),
    #[error("failed to save {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: IoError,
    },
    #[error("failed to write report {path}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: IoError,
    },
}
