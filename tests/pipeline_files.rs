//! Tests for running the pipeline against files on disk.

use std::path::PathBuf;

use tempfile::TempDir;
use url_domain::{run_pipeline, InputFormat, OutputFormat, PipelineConfig, Rule};

#[test]
fn test_run_pipeline_lines_file_to_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = temp_dir.path().join("urls.txt");
    let output = temp_dir.path().join("domains.txt");
    std::fs::write(
        &input,
        "https://compass.dagster.io/path\nhttps://www.dagster.io\n\\N\ndagster.io?ref=foo\n",
    )
    .expect("Failed to write input");

    let config = PipelineConfig {
        input,
        output: Some(output.clone()),
        ..Default::default()
    };
    let report = run_pipeline(&config).expect("pipeline succeeds");

    assert_eq!(
        std::fs::read_to_string(&output).expect("Failed to read output"),
        "compass.dagster.io\ndagster.io\n\\N\ndagster.io\n"
    );
    assert_eq!(report.total_rows, 4);
    assert_eq!(report.null_rows, 1);
    assert!(report.rule_counts.contains(&(Rule::Www, 1)));
    assert!(report.rule_counts.contains(&(Rule::Query, 1)));
}

#[test]
fn test_run_pipeline_csv_to_jsonl() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = temp_dir.path().join("visits.csv");
    let output = temp_dir.path().join("visits.jsonl");
    std::fs::write(
        &input,
        "visitor,page\nalice,https://docs.dagster.io/some/path\nbob,\n",
    )
    .expect("Failed to write input");

    let config = PipelineConfig {
        input,
        input_format: InputFormat::Csv,
        url_column: "page".to_string(),
        output: Some(output.clone()),
        output_format: OutputFormat::Jsonl,
        ..Default::default()
    };
    run_pipeline(&config).expect("pipeline succeeds");

    let lines: Vec<serde_json::Value> = std::fs::read_to_string(&output)
        .expect("Failed to read output")
        .lines()
        .map(|l| serde_json::from_str(l).expect("each line is JSON"))
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["domain"], "docs.dagster.io");
    assert!(lines[1]["url"].is_null());
    assert!(lines[1]["domain"].is_null());
}

#[test]
fn test_run_pipeline_missing_input_file() {
    let config = PipelineConfig {
        input: PathBuf::from("/nonexistent/urls.txt"),
        output: None,
        ..Default::default()
    };
    let err = run_pipeline(&config).expect_err("missing input should fail");
    assert!(format!("{:#}", err).contains("Failed to open input file"));
}

#[test]
fn test_run_pipeline_custom_null_token() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = temp_dir.path().join("urls.txt");
    let output = temp_dir.path().join("domains.txt");
    std::fs::write(&input, "NULL\nhttps://dagster.io\n").expect("Failed to write input");

    let config = PipelineConfig {
        input,
        output: Some(output.clone()),
        null_token: "NULL".to_string(),
        ..Default::default()
    };
    run_pipeline(&config).expect("pipeline succeeds");

    assert_eq!(
        std::fs::read_to_string(&output).expect("Failed to read output"),
        "NULL\ndagster.io\n"
    );
}
