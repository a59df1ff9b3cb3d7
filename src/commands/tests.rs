//! Tests for command implementations and report rendering.

use super::file::cmd_file;
use super::hunk::cmd_hunk;
use super::report::{FileReport, render};
use super::ReportOptions;
use crate::cli::{Cli, FileArgs, HunkArgs};
use clap::Parser;
use hunkstat::config::{Config, OutputFormat};
use hunkstat::diff::{FileDiff, Hunk, InputFormat};
use hunkstat::error::HunkstatError;
use std::path::PathBuf;
use tempfile::TempDir;

fn text_options() -> ReportOptions {
    ReportOptions {
        format: OutputFormat::Text,
        show_intervals: true,
        per_hunk: false,
    }
}

fn sample_diff() -> FileDiff {
    FileDiff {
        orig_name: "a/src/lib.rs".to_string(),
        new_name: "b/src/lib.rs".to_string(),
        extended: Vec::new(),
        hunks: vec![
            Hunk::new(3, 3, " a\n-b\n+c\n"),
            Hunk::new(10, 10, " x\n+y\n+z\n"),
        ],
    }
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_options_default_to_config() {
    let cli = Cli::try_parse_from(["hunkstat", "file", "d.json"]).unwrap();
    let config = Config {
        output_format: OutputFormat::Yaml,
        per_hunk: true,
        ..Config::default()
    };

    let options = ReportOptions::resolve(&config, &cli.global);
    assert_eq!(options.format, OutputFormat::Yaml);
    assert!(options.show_intervals);
    assert!(options.per_hunk);
}

#[test]
fn test_flags_override_config() {
    let cli = Cli::try_parse_from([
        "hunkstat",
        "--format",
        "json",
        "--no-intervals",
        "file",
        "d.json",
    ])
    .unwrap();
    let config = Config::default();

    let options = ReportOptions::resolve(&config, &cli.global);
    assert_eq!(options.format, OutputFormat::Json);
    assert!(!options.show_intervals);
    assert!(!options.per_hunk);
}

#[test]
fn test_render_text_summary_and_intervals() {
    let report = FileReport::for_file_diff(&sample_diff(), false);
    let text = render(&[report], &text_options()).unwrap();

    assert_eq!(
        text,
        "b/src/lib.rs: 2 added, 0 deleted, 1 changed\n  added lines: 4, 11-12\n  deleted lines: 4\n"
    );
}

#[test]
fn test_render_text_without_intervals() {
    let report = FileReport::for_file_diff(&sample_diff(), false);
    let options = ReportOptions {
        show_intervals: false,
        ..text_options()
    };

    let text = render(&[report], &options).unwrap();
    assert_eq!(text, "b/src/lib.rs: 2 added, 0 deleted, 1 changed\n");
}

#[test]
fn test_render_text_per_hunk_and_total() {
    let deleted = FileDiff {
        orig_name: "a/gone.rs".to_string(),
        new_name: "/dev/null".to_string(),
        hunks: vec![Hunk::new(1, 0, "-a\n-b\n")],
        ..FileDiff::default()
    };
    let reports = vec![
        FileReport::for_file_diff(&sample_diff(), true),
        FileReport::for_file_diff(&deleted, true),
    ];
    let options = ReportOptions {
        show_intervals: false,
        per_hunk: true,
        ..text_options()
    };

    let text = render(&reports, &options).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines,
        vec![
            "b/src/lib.rs: 2 added, 0 deleted, 1 changed",
            "  hunk 1 (-3 +3): 0 added, 0 deleted, 1 changed",
            "  hunk 2 (-10 +10): 2 added, 0 deleted, 0 changed",
            "a/gone.rs: 0 added, 2 deleted, 0 changed",
            "  hunk 1 (-1 +0): 0 added, 2 deleted, 0 changed",
            "total: 2 added, 2 deleted, 1 changed",
        ]
    );
}

#[test]
fn test_render_json() {
    let report = FileReport::for_file_diff(&sample_diff(), false);
    let options = ReportOptions {
        format: OutputFormat::Json,
        ..text_options()
    };

    let json = render(&[report], &options).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value[0]["name"], "b/src/lib.rs");
    assert_eq!(value[0]["added"], 2);
    assert_eq!(value[0]["changed"], 1);
    assert_eq!(value[0]["added_line_intervals"][1]["start"], 11);
    assert_eq!(value[0]["added_line_intervals"][1]["end"], 12);
    assert!(value[0].get("hunks").is_none());
}

#[test]
fn test_render_yaml_per_hunk() {
    let report = FileReport::for_file_diff(&sample_diff(), true);
    let options = ReportOptions {
        format: OutputFormat::Yaml,
        per_hunk: true,
        ..text_options()
    };

    let yaml = render(&[report], &options).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(value[0]["hunks"][1]["new_start_line"].as_u64(), Some(10));
    assert_eq!(value[0]["hunks"][1]["added"].as_u64(), Some(2));
}

#[test]
fn test_cmd_file_reads_document() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "diff.json",
        r#"[{"new_name": "b/a.rs", "hunks": [{"orig_start_line": 1, "new_start_line": 1, "body": "+x\n+y\n"}]}]"#,
    );

    let args = FileArgs {
        path,
        input_format: None,
    };
    let text = cmd_file(args, &Config::default(), &text_options()).unwrap();

    assert_eq!(text, "b/a.rs: 2 added, 0 deleted, 0 changed\n  added lines: 1-2\n");
}

#[test]
fn test_cmd_file_input_format_flag_wins() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "diff.txt", "new_name: b/a.rs\nhunks: []\n");

    let args = FileArgs {
        path,
        input_format: Some(InputFormat::Yaml),
    };
    let text = cmd_file(args, &Config::default(), &text_options()).unwrap();

    assert_eq!(text, "b/a.rs: 0 added, 0 deleted, 0 changed\n");
}

#[test]
fn test_cmd_file_malformed_document() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "diff.json", "[{");

    let args = FileArgs {
        path,
        input_format: None,
    };
    let err = cmd_file(args, &Config::default(), &text_options()).unwrap_err();
    assert!(matches!(err, HunkstatError::InputError(_)));
}

#[test]
fn test_cmd_hunk_reads_body_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "body.diff", " ctx\n-old\n+new\n+extra\n");

    let args = HunkArgs {
        orig_start: 20,
        new_start: 30,
        body: Some(path.clone()),
    };
    let text = cmd_hunk(args, &Config::default(), &text_options()).unwrap();

    assert_eq!(
        text,
        format!(
            "{}: 1 added, 0 deleted, 1 changed\n  added lines: 31-32\n  deleted lines: 21\n",
            path.display()
        )
    );
}

#[test]
fn test_cmd_hunk_missing_body_file() {
    let dir = TempDir::new().unwrap();
    let args = HunkArgs {
        orig_start: 1,
        new_start: 1,
        body: Some(dir.path().join("missing.diff")),
    };

    let err = cmd_hunk(args, &Config::default(), &text_options()).unwrap_err();
    assert!(matches!(err, HunkstatError::InputError(_)));
}

#[test]
fn test_cmd_hunk_respects_max_input_bytes() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "body.diff", "+a\n+b\n+c\n");
    let config = Config {
        max_input_bytes: 3,
        ..Config::default()
    };

    let args = HunkArgs {
        orig_start: 1,
        new_start: 1,
        body: Some(path),
    };
    let err = cmd_hunk(args, &config, &text_options()).unwrap_err();
    assert!(err.to_string().contains("max_input_bytes"));
}
