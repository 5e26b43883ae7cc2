use std::fs;

use crate::common::{make_temp_dir, read_log_contents, run_with_args, stderr_of, stdout_of};

fn write_config(dir: &std::path::Path, format: &str, count_only: bool, file_logging: bool) {
    let cfg = format!(
        r#"{{
      "format": {{ "value": "{format}", "description": "fmt" }},
      "count_only": {{ "value": {count_only}, "description": "count" }},
      "file_logging_enabled": {{ "value": {file_logging}, "description": "logs" }}
    }}"#
    );
    fs::write(dir.join("config.json"), cfg).unwrap();
}

#[test]
fn config_supplies_defaults() {
    let dir = make_temp_dir("config");
    write_config(&dir, "csv", true, false);
    let output = run_with_args(&dir, &["--config", "config.json", "-l", "10"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "4\n");
}

#[test]
fn flags_override_config_format() {
    let dir = make_temp_dir("config");
    write_config(&dir, "csv", false, false);
    let output = run_with_args(&dir, &["--config", "config.json", "-l", "10", "-f", "plain"]);
    assert_eq!(stdout_of(&output), "Primes: [2, 3, 5, 7]\nTotal primes: 4\n");
}

#[test]
fn missing_config_is_a_startup_error() {
    let dir = make_temp_dir("config");
    let output = run_with_args(&dir, &["--config", "absent.json", "-l", "10"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).is_empty());
    assert!(stderr_of(&output).contains("not found"));
}

#[test]
fn file_logging_records_the_run() {
    let dir = make_temp_dir("config");
    write_config(&dir, "plain", false, true);
    let output = run_with_args(&dir, &["--config", "config.json", "-l", "-3"]);
    assert!(output.status.success());

    let log = read_log_contents(&dir).expect("log file should exist");
    assert!(log.contains("Config FORMAT"));
    assert!(log.contains("Rejected limit -3"));
    assert!(log.contains("WARN"));
}
