use crate::common::{make_temp_dir, run_with_args, stderr_of, stdout_of};

#[test]
fn limit_prints_plain_list_and_total() {
    let dir = make_temp_dir("one-shot");
    let output = run_with_args(&dir, &["--limit", "30"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "Primes: [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]\nTotal primes: 10\n"
    );
}

#[test]
fn count_only_json_omits_the_list() {
    let dir = make_temp_dir("one-shot");
    let output = run_with_args(&dir, &["-l", "100", "-c", "-f", "json"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "{\"count\":25}\n");
}

#[test]
fn csv_output_has_two_lines() {
    let dir = make_temp_dir("one-shot");
    let output = run_with_args(&dir, &["-l", "10", "--format", "csv"]);
    assert_eq!(stdout_of(&output), "2,3,5,7\n4\n");
}

#[test]
fn negative_limit_reports_error_and_still_succeeds() {
    let dir = make_temp_dir("one-shot");
    let output = run_with_args(&dir, &["--limit", "-7"]);
    assert!(output.status.success(), "domain errors keep exit status 0");
    assert_eq!(stdout_of(&output), "Error: limit must be non-negative\n");
}

#[test]
fn unknown_format_is_rejected_by_the_parser() {
    let dir = make_temp_dir("one-shot");
    let output = run_with_args(&dir, &["-l", "10", "-f", "xml"]);
    assert!(!output.status.success());
    assert!(stdout_of(&output).is_empty());
    assert!(stderr_of(&output).contains("xml"));
}

#[test]
fn version_flag_prints_version_and_exits() {
    let dir = make_temp_dir("one-shot");
    let output = run_with_args(&dir, &["-v"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output).trim(),
        format!("primes {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn one_shot_writes_no_log_files_by_default() {
    let dir = make_temp_dir("one-shot");
    run_with_args(&dir, &["-l", "10"]);
    assert!(!dir.join("logs").exists());
}
