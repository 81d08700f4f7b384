use assert_cmd::Command;
use image::{GrayImage, Luma};
use predicates::prelude::*;
use ratio_threshold::{BitDepth, EstimatorKind, RunConfig};
use std::path::Path;

fn write_halves(path: &Path) {
    let img = GrayImage::from_fn(40, 10, |x, _| {
        if x < 20 {
            Luma([40u8])
        } else {
            Luma([200u8])
        }
    });
    img.save(path).expect("write test image");
}

fn cli() -> Command {
    Command::cargo_bin("ratio-threshold").expect("binary built")
}

#[test]
fn prints_all_six_results_and_writes_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_halves(&input);

    cli()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .args(["--ratio", "0.25", "--sample-stride", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Counting Sort\n    Threshold: 40\n"))
        .stdout(predicate::str::contains("Standard Sort\n    Threshold: 40\n"))
        .stdout(predicate::str::contains("Nth Element\n    Threshold: 40\n"))
        .stdout(predicate::str::contains("Normal Estimate"))
        .stdout(predicate::str::contains("Weighted Estimate"))
        .stdout(predicate::str::contains("Uniform Sample"))
        .stdout(predicate::str::is_match(r"Execution Time: \d+\.\d{3}s").expect("regex"));

    let out = image::open(&output).expect("output image").to_luma8();
    assert!(out.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
}

#[test]
fn config_file_supplies_defaults_and_flags_override() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.png");
    let report = dir.path().join("report.json");
    write_halves(&input);

    let config = dir.path().join("run.json");
    std::fs::write(
        &config,
        format!(
            r#"{{"input_path": {:?}, "output_path": {:?}, "ratio": 0.9, "threshold_from": "counting_sort"}}"#,
            input.to_string_lossy(),
            dir.path().join("out.png").to_string_lossy()
        ),
    )
    .expect("write config");

    cli()
        .arg("--config")
        .arg(&config)
        .args(["--ratio", "0.25"])
        .arg("--report")
        .arg(&report)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).expect("report")).expect("json");
    assert_eq!(json["chosen"], "counting_sort");
    assert_eq!(json["runs"][0]["threshold"], 40);
    assert_eq!(json["runs"].as_array().map(Vec::len), Some(6));
}

#[test]
fn missing_input_exits_non_zero() {
    let dir = tempfile::tempdir().expect("tempdir");
    cli()
        .arg(dir.path().join("absent.png"))
        .arg("--output")
        .arg(dir.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load"));
}

#[test]
fn out_of_range_ratio_is_rejected_by_the_parser() {
    cli()
        .args(["in.png", "--ratio", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ratio must be a finite value in [0, 1]"));
}

#[test]
fn unknown_estimator_is_rejected() {
    cli()
        .args(["in.png", "--threshold-from", "otsu"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown estimator"));
}

#[test]
fn quiet_sends_results_to_the_log() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.png");
    write_halves(&input);

    cli()
        .arg(&input)
        .arg("--output")
        .arg(dir.path().join("out.png"))
        .args(["--ratio", "0.25", "--quiet", "--log-level", "info"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Counting Sort: threshold=40"));
}

#[test]
fn write_config_saves_effective_settings_without_running() {
    let dir = tempfile::tempdir().expect("tempdir");
    let written = dir.path().join("effective.json");
    let output = dir.path().join("out.png");

    cli()
        .arg(dir.path().join("absent.png"))
        .arg("--output")
        .arg(&output)
        .args(["--ratio", "0.6", "--bit-depth", "16", "--threshold-from", "nth_element"])
        .arg("--write-config")
        .arg(&written)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(!output.exists());
    let cfg = RunConfig::load_json(&written).expect("load written config");
    assert_eq!(cfg.ratio.get(), 0.6);
    assert_eq!(cfg.bit_depth, BitDepth::Sixteen);
    assert_eq!(cfg.threshold_from, EstimatorKind::NthElement);
    assert_eq!(cfg.sample_stride, 10);
}
