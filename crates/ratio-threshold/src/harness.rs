//! Timed evaluation of every estimator on one image.
//!
//! Estimators run in the fixed order of [`EstimatorKind::ALL`]. Destructive
//! estimators get a private copy of the pixels, made before their clock
//! starts, so the caller's image is never modified and every reported
//! threshold reflects the original data.

use crate::report::{BenchmarkReport, EstimatorRun, ReportSink};
use crate::HarnessError;
use ratio_threshold_core::{GrayImageView, Pixel};
use ratio_threshold_estimators::{EstimatorKind, EstimatorParams};
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Harness configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HarnessConfig {
    pub params: EstimatorParams,
    /// Estimator whose threshold is carried forward to binarization.
    pub chosen: EstimatorKind,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            params: EstimatorParams::default(),
            chosen: EstimatorKind::UniformSample,
        }
    }
}

/// Report plus the chosen threshold in the image's own sample type.
#[derive(Clone, Debug)]
pub struct BenchmarkOutcome<P: Pixel> {
    pub report: BenchmarkReport,
    pub threshold: P,
}

fn time_estimator<P: Pixel>(
    kind: EstimatorKind,
    pixels: &[P],
    params: &EstimatorParams,
) -> Result<(P, f64), HarnessError> {
    let wrap = |source| HarnessError::Estimator {
        estimator: kind.name(),
        source,
    };
    if kind.is_destructive() {
        let mut work = pixels.to_vec();
        let start = Instant::now();
        let threshold = kind.estimate_in_place(&mut work, params).map_err(wrap)?;
        Ok((threshold, start.elapsed().as_secs_f64()))
    } else {
        let start = Instant::now();
        let threshold = kind.estimate(pixels, params).map_err(wrap)?;
        Ok((threshold, start.elapsed().as_secs_f64()))
    }
}

/// Run all six estimators on `img`, streaming each result to `sink`.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "info",
        skip(img, config, sink),
        fields(width = img.width, height = img.height, depth = P::BIT_DEPTH)
    )
)]
pub fn run_benchmark<P: Pixel>(
    img: &GrayImageView<'_, P>,
    config: &HarnessConfig,
    sink: &mut dyn ReportSink,
) -> Result<BenchmarkOutcome<P>, HarnessError> {
    let mut runs = Vec::with_capacity(EstimatorKind::ALL.len());
    let mut chosen = None;

    for kind in EstimatorKind::ALL {
        let (threshold, elapsed_s) = time_estimator(kind, img.data, &config.params)?;
        log::debug!("{kind}: threshold={threshold} elapsed={elapsed_s:.6}s");
        sink.record(kind.name(), threshold.to_usize() as u32, elapsed_s)?;
        if kind == config.chosen {
            chosen = Some(threshold);
        }
        runs.push(EstimatorRun {
            kind,
            threshold: threshold.to_usize() as u32,
            elapsed_s,
        });
    }

    // ALL covers every kind, so the chosen one has always run.
    let threshold = chosen.unwrap_or(P::ZERO);
    log::info!(
        "{} estimators on {}x{} {}: {} threshold {}",
        runs.len(),
        img.width,
        img.height,
        P::DEPTH,
        config.chosen,
        threshold
    );

    Ok(BenchmarkOutcome {
        report: BenchmarkReport {
            width: img.width,
            height: img.height,
            bit_depth: P::DEPTH,
            ratio: config.params.ratio,
            sample_stride: config.params.sample_stride,
            runs,
            chosen: config.chosen,
        },
        threshold,
    })
}
