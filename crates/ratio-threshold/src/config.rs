//! JSON run configuration.

use crate::{HarnessConfig, IoError};
use ratio_threshold_core::BitDepth;
use ratio_threshold_estimators::{
    EstimatorKind, EstimatorParams, InvalidArgument, Ratio, DEFAULT_SAMPLE_STRIDE,
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

fn default_input_path() -> String {
    "sample_image.png".to_string()
}

fn default_output_path() -> String {
    "sample_binary.png".to_string()
}

fn default_sample_stride() -> usize {
    DEFAULT_SAMPLE_STRIDE
}

fn default_threshold_from() -> EstimatorKind {
    EstimatorKind::UniformSample
}

/// Configuration for one load -> benchmark -> binarize -> save run.
///
/// Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default = "default_input_path")]
    pub input_path: String,
    #[serde(default = "default_output_path")]
    pub output_path: String,
    /// Where to write the JSON benchmark report, if anywhere.
    #[serde(default)]
    pub report_path: Option<String>,
    /// Target fraction of black pixels.
    #[serde(default)]
    pub ratio: Ratio,
    #[serde(default = "default_sample_stride")]
    pub sample_stride: usize,
    #[serde(default)]
    pub bit_depth: BitDepth,
    /// Estimator whose threshold is applied to the output image.
    #[serde(default = "default_threshold_from")]
    pub threshold_from: EstimatorKind,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            report_path: None,
            ratio: Ratio::default(),
            sample_stride: default_sample_stride(),
            bit_depth: BitDepth::default(),
            threshold_from: default_threshold_from(),
        }
    }
}

impl RunConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn input_path(&self) -> PathBuf {
        PathBuf::from(&self.input_path)
    }

    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_path)
    }

    pub fn report_path(&self) -> Option<PathBuf> {
        self.report_path.as_ref().map(PathBuf::from)
    }

    /// Build harness settings, rejecting a zero sample stride.
    pub fn harness_config(&self) -> Result<HarnessConfig, InvalidArgument> {
        if self.sample_stride == 0 {
            return Err(InvalidArgument::ZeroStride);
        }
        Ok(HarnessConfig {
            params: EstimatorParams {
                ratio: self.ratio,
                sample_stride: self.sample_stride,
            },
            chosen: self.threshold_from,
        })
    }
}
