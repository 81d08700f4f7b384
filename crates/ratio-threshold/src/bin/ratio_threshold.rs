//! `ratio-threshold`: benchmark the six estimators on an image and write the
//! binarized result.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use ratio_threshold::core::BitDepth;
use ratio_threshold::estimators::{EstimatorKind, Ratio};
use ratio_threshold::{run, LogSink, ReportSink, RunConfig, TextReport};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Depth {
    #[value(name = "8")]
    Eight,
    #[value(name = "16")]
    Sixteen,
}

impl From<Depth> for BitDepth {
    fn from(d: Depth) -> Self {
        match d {
            Depth::Eight => BitDepth::Eight,
            Depth::Sixteen => BitDepth::Sixteen,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "ratio-threshold",
    version,
    about = "Benchmark ratio-driven threshold estimators and binarize a greyscale image"
)]
struct Cli {
    /// Input image. Overrides `input_path` from --config.
    input: Option<PathBuf>,

    /// JSON run configuration; flags below override its fields.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output path for the binarized image.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Target fraction of black pixels, in [0, 1].
    #[arg(short, long, value_parser = parse_ratio)]
    ratio: Option<Ratio>,

    /// Read every Nth pixel in the uniform-sample estimator.
    #[arg(short = 's', long, value_parser = clap::value_parser!(u64).range(1..))]
    sample_stride: Option<u64>,

    /// Sample width used when decoding the image.
    #[arg(short, long, value_enum)]
    bit_depth: Option<Depth>,

    /// Estimator whose threshold is applied to the output image.
    #[arg(short, long)]
    threshold_from: Option<EstimatorKind>,

    /// Also write the benchmark results as JSON.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Send per-estimator results to the log instead of stdout.
    #[arg(short, long)]
    quiet: bool,

    /// Write the effective configuration as JSON and exit without running.
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,

    /// Log level for stderr diagnostics.
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    /// Emit JSON log lines (requires the `tracing` feature).
    #[cfg(feature = "tracing")]
    #[arg(long)]
    json_log: bool,
}

fn parse_ratio(s: &str) -> Result<Ratio, String> {
    let v: f32 = s.parse().map_err(|e| format!("{e}"))?;
    Ratio::new(v).map_err(|e| e.to_string())
}

fn build_config(cli: &Cli) -> Result<RunConfig, ratio_threshold::IoError> {
    let mut cfg = match &cli.config {
        Some(path) => RunConfig::load_json(path)?,
        None => RunConfig::default(),
    };
    if let Some(input) = &cli.input {
        cfg.input_path = input.to_string_lossy().into_owned();
    }
    if let Some(output) = &cli.output {
        cfg.output_path = output.to_string_lossy().into_owned();
    }
    if let Some(report) = &cli.report {
        cfg.report_path = Some(report.to_string_lossy().into_owned());
    }
    if let Some(ratio) = cli.ratio {
        cfg.ratio = ratio;
    }
    if let Some(stride) = cli.sample_stride {
        cfg.sample_stride = usize::try_from(stride).unwrap_or(usize::MAX);
    }
    if let Some(depth) = cli.bit_depth {
        cfg.bit_depth = depth.into();
    }
    if let Some(kind) = cli.threshold_from {
        cfg.threshold_from = kind;
    }
    Ok(cfg)
}

#[cfg(feature = "tracing")]
fn init_logging(cli: &Cli) {
    ratio_threshold::core::init_tracing(cli.json_log);
    let _ = tracing_log::LogTracer::init_with_filter(cli.log_level);
}

#[cfg(not(feature = "tracing"))]
fn init_logging(cli: &Cli) {
    let _ = ratio_threshold::core::init_with_level(cli.log_level);
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    let cfg = match build_config(&cli) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    log::debug!("run config: {cfg:?}");

    if let Some(path) = &cli.write_config {
        return match cfg.write_json(path) {
            Ok(()) => {
                log::info!("wrote config {}", path.display());
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: failed to write config {}: {err}", path.display());
                ExitCode::FAILURE
            }
        };
    }

    let mut stdout_sink;
    let mut log_sink = LogSink;
    let sink: &mut dyn ReportSink = if cli.quiet {
        &mut log_sink
    } else {
        stdout_sink = TextReport::stdout();
        &mut stdout_sink
    };
    match run(&cfg, sink) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
