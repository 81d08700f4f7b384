//! Benchmark results and the sinks that display them.

use ratio_threshold_core::BitDepth;
use ratio_threshold_estimators::{EstimatorKind, Ratio};
use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path};

/// One timed estimator call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstimatorRun {
    pub kind: EstimatorKind,
    pub threshold: u32,
    pub elapsed_s: f64,
}

/// Everything measured by one benchmark pass over an image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub width: usize,
    pub height: usize,
    pub bit_depth: BitDepth,
    pub ratio: Ratio,
    pub sample_stride: usize,
    /// Runs in execution order.
    pub runs: Vec<EstimatorRun>,
    /// Estimator whose threshold drives binarization.
    pub chosen: EstimatorKind,
}

impl BenchmarkReport {
    pub fn run(&self, kind: EstimatorKind) -> Option<&EstimatorRun> {
        self.runs.iter().find(|r| r.kind == kind)
    }

    pub fn threshold(&self, kind: EstimatorKind) -> Option<u32> {
        self.run(kind).map(|r| r.threshold)
    }

    pub fn chosen_threshold(&self) -> Option<u32> {
        self.threshold(self.chosen)
    }

    pub fn total_elapsed_s(&self) -> f64 {
        self.runs.iter().map(|r| r.elapsed_s).sum()
    }

    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, crate::IoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), crate::IoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Receives each result as soon as it is measured.
pub trait ReportSink {
    fn record(&mut self, name: &str, threshold: u32, elapsed_s: f64) -> io::Result<()>;
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl ReportSink for NullSink {
    fn record(&mut self, _name: &str, _threshold: u32, _elapsed_s: f64) -> io::Result<()> {
        Ok(())
    }
}

/// Human-readable block per estimator:
///
/// ```text
/// Counting Sort
///     Threshold: 84
///     Execution Time: 0.001s
/// ```
pub struct TextReport<W: io::Write> {
    out: W,
}

const PADDING: &str = "    ";

impl<W: io::Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TextReport<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: io::Write> ReportSink for TextReport<W> {
    fn record(&mut self, name: &str, threshold: u32, elapsed_s: f64) -> io::Result<()> {
        writeln!(self.out, "{name}")?;
        writeln!(self.out, "{PADDING}Threshold: {threshold}")?;
        writeln!(self.out, "{PADDING}Execution Time: {elapsed_s:.3}s")?;
        self.out.flush()
    }
}

/// Forwards results to the `log` facade at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn record(&mut self, name: &str, threshold: u32, elapsed_s: f64) -> io::Result<()> {
        log::info!("{name}: threshold={threshold} elapsed={elapsed_s:.6}s");
        Ok(())
    }
}
