//! End-to-end run: load, benchmark, binarize, save.

use crate::binarize::{binarize, black_fraction};
use crate::harness::{run_benchmark, HarnessConfig};
use crate::io::DynGrayImage;
use crate::report::{BenchmarkReport, ReportSink};
use crate::{HarnessError, RunConfig, RunError};
use ratio_threshold_core::{GrayImage, Pixel};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// What a run produced besides the output file.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub report: BenchmarkReport,
    /// Fraction of output pixels that ended up black.
    pub black_fraction: f64,
}

fn benchmark_and_binarize<P: Pixel>(
    img: &mut GrayImage<P>,
    config: &HarnessConfig,
    sink: &mut dyn ReportSink,
) -> Result<RunSummary, HarnessError> {
    let outcome = run_benchmark(&img.view(), config, sink)?;
    binarize(img.as_mut_slice(), outcome.threshold);
    Ok(RunSummary {
        report: outcome.report,
        black_fraction: black_fraction(&img.data),
    })
}

/// Benchmark and binarize an already-decoded image in place.
pub fn process_image(
    img: &mut DynGrayImage,
    config: &HarnessConfig,
    sink: &mut dyn ReportSink,
) -> Result<RunSummary, HarnessError> {
    match img {
        DynGrayImage::Luma8(g) => benchmark_and_binarize(g, config, sink),
        DynGrayImage::Luma16(g) => benchmark_and_binarize(g, config, sink),
    }
}

/// Run the whole pipeline described by `config`.
///
/// Fails before any estimator runs if the configuration is invalid or the
/// input cannot be decoded. Encode and report failures are returned after the
/// benchmark has already been streamed to `sink`.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(config, sink), fields(input = %config.input_path))
)]
pub fn run(config: &RunConfig, sink: &mut dyn ReportSink) -> Result<RunSummary, RunError> {
    let harness = config.harness_config()?;

    let input = config.input_path();
    let mut img = DynGrayImage::open(&input, config.bit_depth).map_err(|source| RunError::Load {
        path: input.clone(),
        source,
    })?;
    log::info!(
        "loaded {} ({}x{}, {})",
        input.display(),
        img.width(),
        img.height(),
        img.bit_depth()
    );

    let summary = process_image(&mut img, &harness, sink)?;
    log::info!(
        "binarized: {:.1}% black (target {:.1}%)",
        summary.black_fraction * 100.0,
        config.ratio.get() * 100.0
    );

    let output = config.output_path();
    img.save(&output).map_err(|source| RunError::Save {
        path: output.clone(),
        source,
    })?;
    log::info!("wrote {}", output.display());

    if let Some(path) = config.report_path() {
        summary
            .report
            .write_json(&path)
            .map_err(|source| RunError::Report {
                path: path.clone(),
                source,
            })?;
        log::info!("wrote report {}", path.display());
    }

    Ok(summary)
}
