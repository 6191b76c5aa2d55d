use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use std::fs;
use std::path::Path;

mod common;
use common::{SAMPLE_LOG, no_config, rat, temp_path, write_log};

#[test]
fn test_run_writes_invalid_report_and_summary() {
    let log = write_log("run_pipeline", SAMPLE_LOG);
    let invalid = temp_path("run_pipeline_invalid", "csv");
    let summary = temp_path("run_pipeline_summary", "csv");

    rat()
        .args([
            "--config",
            &no_config("run_pipeline"),
            "run",
            &log,
            "--invalid-out",
            &invalid,
            "--summary-out",
            &summary,
        ])
        .assert()
        .success()
        .stdout(contains("Invalid rows"))
        .stdout(contains("Employee Log Summary"));

    let report = fs::read_to_string(&invalid).expect("read invalid report");
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "Employee Name,Event,Timestamp,Missing Field");
    assert_eq!(lines[1], ",Check-Out,2024-03-04 12:00:00,Employee Name");
    assert_eq!(lines[2], "Carol,,,\"Event, Timestamp\"");
    assert_eq!(lines.len(), 3);

    let content = fs::read_to_string(&summary).expect("read summary");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        "Employee Name,Total Check-Ins,Cumulative Time (hours),Errors"
    );
    assert_eq!(lines[1], "Alice,1,8.5,None");
    assert_eq!(
        lines[2],
        "Bob,2,0.0,\"Multiple Check-Ins without Check-Out, Check-In without Check-Out\""
    );
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_run_also_writes_valid_rows() {
    let log = write_log("run_valid_rows", SAMPLE_LOG);
    let valid = temp_path("run_valid_rows_valid", "csv");

    rat()
        .args([
            "--config",
            &no_config("run_valid_rows"),
            "--quiet",
            "run",
            &log,
            "--invalid-out",
            &temp_path("run_valid_rows_invalid", "csv"),
            "--summary-out",
            &temp_path("run_valid_rows_summary", "csv"),
            "--valid-out",
            &valid,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&valid).expect("read valid rows");
    assert_eq!(content.lines().count(), 5);
    assert!(content.starts_with("Employee Name,Event,Timestamp\n"));
    assert!(!content.contains("Carol"));
}

#[test]
fn test_missing_column_aborts_before_any_output() {
    let log = write_log(
        "missing_column",
        "Employee Name,Timestamp\nAlice,2024-03-04 09:00:00\n",
    );
    let summary = temp_path("missing_column_summary", "csv");

    rat()
        .args([
            "--config",
            &no_config("missing_column"),
            "run",
            &log,
            "--summary-out",
            &summary,
        ])
        .assert()
        .failure()
        .stderr(contains("Missing required column: Event"));

    assert!(!Path::new(&summary).exists());
}

#[test]
fn test_short_row_goes_to_invalid_report() {
    let log = write_log(
        "short_row",
        "Employee Name,Event,Timestamp\n\
         Alice,Check-In\n\
         Bob,Check-In,2024-03-04 09:00:00\n\
         Bob,Check-Out,2024-03-04 17:00:00\n",
    );
    let invalid = temp_path("short_row_invalid", "csv");
    let summary = temp_path("short_row_summary", "csv");

    rat()
        .args([
            "--config",
            &no_config("short_row"),
            "run",
            &log,
            "--invalid-out",
            &invalid,
            "--summary-out",
            &summary,
        ])
        .assert()
        .success();

    let report = fs::read_to_string(&invalid).expect("read invalid report");
    assert!(report.contains("Alice,Check-In,,Timestamp"));

    let summary = fs::read_to_string(&summary).expect("read summary");
    assert!(summary.contains("Bob,1,8.0,None"));
    assert!(!summary.contains("Alice"));
}

#[test]
fn test_long_row_is_malformed() {
    let log = write_log(
        "long_row",
        "Employee Name,Event,Timestamp\nAlice,Check-In,2024-03-04 09:00:00,extra\n",
    );

    rat()
        .args(["--config", &no_config("long_row"), "validate", &log])
        .assert()
        .failure()
        .stderr(contains("Malformed input"));
}

#[test]
fn test_missing_input_file_fails() {
    rat()
        .args([
            "--config",
            &no_config("missing_input"),
            "summary",
            &temp_path("does_not_exist", "csv"),
        ])
        .assert()
        .failure()
        .stderr(contains("I/O error"));
}

#[test]
fn test_validate_lists_invalid_rows() {
    let log = write_log("validate_list", SAMPLE_LOG);

    rat()
        .args(["--config", &no_config("validate_list"), "validate", &log])
        .assert()
        .success()
        .stdout(contains("Missing Field"))
        .stdout(contains("Carol"))
        .stdout(contains("2 of 6 rows have missing fields"));
}

#[test]
fn test_validate_clean_log() {
    let log = write_log(
        "validate_clean",
        "Employee Name,Event,Timestamp\nAlice,Check-In,2024-03-04 09:00:00\n",
    );

    rat()
        .args(["--config", &no_config("validate_clean"), "validate", &log])
        .assert()
        .success()
        .stdout(contains("All 1 rows are valid."))
        .stdout(contains("Missing Field").not());
}

#[test]
fn test_summary_json_output() {
    let log = write_log("summary_json", SAMPLE_LOG);
    let out = temp_path("summary_json", "json");

    rat()
        .args([
            "--config",
            &no_config("summary_json"),
            "summary",
            &log,
            "--out",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("Alice"));

    let content = fs::read_to_string(&out).expect("read summary json");
    let json: Value = serde_json::from_str(&content).expect("valid json");
    let rows = json.as_array().expect("array");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["Employee Name"], "Alice");
    assert_eq!(rows[0]["Total Check-Ins"], 1);
    assert_eq!(rows[0]["Cumulative Time (hours)"], 8.5);
    assert_eq!(rows[0]["Errors"], "None");
    assert_eq!(rows[1]["Employee Name"], "Bob");
}

#[test]
fn test_summary_explicit_format_overrides_extension() {
    let log = write_log("summary_format", SAMPLE_LOG);
    let out = temp_path("summary_format", "txt");

    rat()
        .args([
            "--config",
            &no_config("summary_format"),
            "summary",
            &log,
            "--out",
            &out,
            "--format",
            "json",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read output");
    assert!(serde_json::from_str::<Value>(&content).is_ok());
}

#[test]
fn test_unknown_extension_is_rejected() {
    let log = write_log("summary_unknown_ext", SAMPLE_LOG);

    rat()
        .args([
            "--config",
            &no_config("summary_unknown_ext"),
            "summary",
            &log,
            "--out",
            &temp_path("summary_unknown_ext", "txt"),
        ])
        .assert()
        .failure()
        .stderr(contains("Export format not supported: txt"));
}

#[test]
fn test_summary_xlsx_output() {
    let log = write_log("summary_xlsx", SAMPLE_LOG);
    let out = temp_path("summary_xlsx", "xlsx");

    rat()
        .args([
            "--config",
            &no_config("summary_xlsx"),
            "summary",
            &log,
            "--out",
            &out,
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read xlsx");
    // xlsx files are zip archives
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_summary_without_validation_keeps_named_rows() {
    let log = write_log(
        "summary_no_validate",
        "Employee Name,Event,Timestamp\n\
         Alice,Check-In,2024-03-04 09:00:00\n\
         Alice,,2024-03-04 12:00:00\n\
         Alice,Check-Out,2024-03-04 17:00:00\n\
         Frank,Check-In,\n",
    );
    let out = temp_path("summary_no_validate_out", "csv");

    rat()
        .args([
            "--config",
            &no_config("summary_no_validate"),
            "summary",
            &log,
            "--no-validate",
            "--out",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("could not be parsed"));

    let content = fs::read_to_string(&out).expect("read summary");
    assert!(content.contains("Alice,1,8.0,None"));
    assert!(content.contains("Frank,1,0.0,Check-In without Check-Out"));
}

#[test]
fn test_existing_output_requires_confirmation() {
    let log = write_log("overwrite", SAMPLE_LOG);
    let out = temp_path("overwrite_out", "csv");
    fs::write(&out, "keep me").expect("seed output");

    rat()
        .args(["--config", &no_config("overwrite"), "summary", &log, "--out", &out])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rat()
        .args(["--config", &no_config("overwrite"), "summary", &log, "--out", &out])
        .write_stdin("y\n")
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("Alice"));

    rat()
        .args([
            "--config",
            &no_config("overwrite"),
            "summary",
            &log,
            "--out",
            &out,
            "--force",
        ])
        .assert()
        .success();
}

#[test]
fn test_config_init_and_print() {
    let cfg = temp_path("config_init", "conf");

    rat()
        .args(["--config", &cfg, "config", "--init"])
        .assert()
        .success();
    assert!(Path::new(&cfg).exists());

    rat()
        .args(["--config", &cfg, "config", "--init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    rat()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("check_in_label: Check-In"))
        .stdout(contains("long_stay_minutes: 600"));
}

#[test]
fn test_config_custom_labels_and_thresholds() {
    let cfg = temp_path("config_custom", "conf");
    fs::write(
        &cfg,
        "check_in_label: IN\ncheck_out_label: OUT\nshort_stay_minutes: 60\n",
    )
    .expect("write config");

    let log = write_log(
        "config_custom",
        "Employee Name,Event,Timestamp\n\
         Gina,IN,2024-03-04 09:00:00\n\
         Gina,OUT,2024-03-04 09:45:00\n",
    );
    let out = temp_path("config_custom_summary", "csv");

    rat()
        .args(["--config", &cfg, "summary", &log, "--out", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read summary");
    assert!(content.contains("Gina,1,0.75,Stay shorter than 1 hour"));
}

#[test]
fn test_broken_config_is_reported() {
    let cfg = temp_path("config_broken", "conf");
    fs::write(&cfg, "short_stay_minutes: [not, a, number]\n").expect("write config");

    rat()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}
