//! End-to-end harness tests against stub subject programs
//!
//! The stubs are tiny shell scripts run via `sh`, so no compilation or
//! chmod is needed. Each stub appends a line to a counter file, which lets
//! the tests verify exactly how many times each subject was invoked.

use pagerank_bench::config::BenchConfig;
use pagerank_bench::matrix::GraphSizeConfig;
use pagerank_bench::output::{CsvExporter, ExcelExporter};
use pagerank_bench::runner::BenchmarkRunner;
use pagerank_bench::subject::SubjectCommand;
use std::path::Path;

/// A stub subject: `sh <script> <counter>` with the harness appending the
/// experiment arguments after the counter path
fn stub_subject(dir: &Path, name: &str) -> SubjectCommand {
    let script = dir.join(format!("{name}.sh"));
    let counter = dir.join(format!("{name}.count"));
    std::fs::write(&script, "echo run >> \"$1\"\nexit 0\n").unwrap();
    SubjectCommand::new(
        "sh",
        vec![
            script.to_string_lossy().into_owned(),
            counter.to_string_lossy().into_owned(),
        ],
    )
}

fn invocation_count(dir: &Path, name: &str) -> usize {
    let counter = dir.join(format!("{name}.count"));
    std::fs::read_to_string(counter)
        .map(|c| c.lines().count())
        .unwrap_or(0)
}

fn stub_config(dir: &Path) -> BenchConfig {
    BenchConfig {
        graph_sizes: vec![GraphSizeConfig::new(100, 200)],
        concurrency_levels: vec![2, 4],
        num_repeats: 3,
        baseline: stub_subject(dir, "baseline"),
        variant: stub_subject(dir, "variant"),
        output_path: dir.join("report.xlsx"),
    }
}

#[test]
fn full_run_produces_expected_rows() {
    let dir = tempfile::tempdir().unwrap();
    let config = stub_config(dir.path());

    let table = BenchmarkRunner::new(config).run().unwrap();

    assert_eq!(table.len(), 2);
    let rows = table.rows();
    assert_eq!(rows[0].graph_size, GraphSizeConfig::new(100, 200));
    assert_eq!(rows[0].concurrency_level, 2);
    assert_eq!(rows[1].concurrency_level, 4);
    assert!(rows.iter().all(|r| r.speedup.is_applicable()));
    assert!(rows.iter().all(|r| r.baseline_mean_secs > 0.0));
    assert!(rows.iter().all(|r| r.variant_mean_secs > 0.0));
}

#[test]
fn baseline_runs_once_per_size_variant_once_per_pair() {
    let dir = tempfile::tempdir().unwrap();
    let config = stub_config(dir.path());

    BenchmarkRunner::new(config).run().unwrap();

    // Baseline: repeats × 1 size. Variant: repeats × (sizes × levels).
    assert_eq!(invocation_count(dir.path(), "baseline"), 3);
    assert_eq!(invocation_count(dir.path(), "variant"), 6);
}

#[test]
fn baseline_mean_is_shared_across_the_inner_loop() {
    let dir = tempfile::tempdir().unwrap();
    let config = stub_config(dir.path());

    let table = BenchmarkRunner::new(config).run().unwrap();
    let rows = table.rows();
    assert_eq!(rows[0].baseline_mean_secs, rows[1].baseline_mean_secs);
}

#[test]
fn level_one_reports_not_applicable() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = stub_config(dir.path());
    config.concurrency_levels = vec![1, 2];

    let table = BenchmarkRunner::new(config).run().unwrap();
    let rows = table.rows();
    assert!(!rows[0].speedup.is_applicable());
    assert!(rows[1].speedup.is_applicable());
}

#[test]
fn failing_subject_aborts_before_any_report() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = stub_config(dir.path());
    config.variant = SubjectCommand::new(
        "sh",
        vec!["-c".to_string(), "exit 1".to_string()],
    );

    let result = BenchmarkRunner::new(config.clone()).run();
    assert!(result.is_err());
    assert!(!config.output_path.exists());
}

#[test]
fn missing_executable_aborts_before_any_report() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = stub_config(dir.path());
    config.baseline = SubjectCommand::new("/nonexistent/pagerank-binary", vec![]);

    let result = BenchmarkRunner::new(config.clone()).run();
    assert!(result.is_err());
    assert!(!config.output_path.exists());
}

#[test]
fn reports_are_shape_stable_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let config = stub_config(dir.path());
    let csv_path = dir.path().join("report.csv");

    let first = BenchmarkRunner::new(config.clone()).run().unwrap();
    CsvExporter::export(&first, &csv_path).unwrap();
    let first_lines = std::fs::read_to_string(&csv_path).unwrap().lines().count();

    let second = BenchmarkRunner::new(config.clone()).run().unwrap();
    CsvExporter::export(&second, &csv_path).unwrap();
    let second_lines = std::fs::read_to_string(&csv_path).unwrap().lines().count();

    // Values drift with timing noise; row count and columns do not
    assert_eq!(first_lines, second_lines);

    ExcelExporter::export(&second, &config.output_path).unwrap();
    assert!(config.output_path.exists());
}
