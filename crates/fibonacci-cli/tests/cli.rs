//! Integration tests for the `fib` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn fib() -> Command {
    let mut cmd = Command::cargo_bin("fib").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("FIB_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

fn json_output(args: &[&str]) -> serde_json::Value {
    let output = fib().args(args).args(["--format", "json"]).output().unwrap();
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// nth
// ============================================================================

#[test]
fn nth_prints_term() {
    fib()
        .args(["nth", "10"])
        .assert()
        .success()
        .stdout("F(10) =       55\n");
}

#[test]
fn nth_rejects_overflow_by_default() {
    fib()
        .args(["nth", "94"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("F(94) overflows a 64-bit value"));
}

#[test]
fn nth_wrapping_prints_wrapped_value() {
    fib()
        .args(["nth", "94", "--wrapping"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1293530146158671551"))
        .stderr(predicate::str::contains("modulo 2^64"));
}

#[test]
fn nth_wrapping_warning_is_silenced_by_quiet() {
    fib()
        .args(["nth", "94", "--wrapping", "--quiet"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn nth_json() {
    assert_eq!(
        json_output(&["nth", "20"]),
        serde_json::json!({"index": 20, "value": 6765})
    );
}

// ============================================================================
// sequence / table
// ============================================================================

#[test]
fn sequence_prints_count_plus_one_rows() {
    let output = fib().args(["sequence", "10"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "F( 0) =        0");
    assert_eq!(lines[10], "F(10) =       55");
}

#[test]
fn sequence_json_values() {
    let values: Vec<u64> = json_output(&["sequence", "10"])
        .as_array()
        .unwrap()
        .iter()
        .map(|term| term["value"].as_u64().unwrap())
        .collect();
    assert_eq!(values, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
}

#[test]
fn sequence_past_max_index_warns_and_wraps() {
    let output = fib().args(["sequence", "95"]).output().unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("wrap"), "stderr: {stderr}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 96);
    // F(95) mod 2^64
    assert_eq!(lines[95], "F(95) = 13493690561280548289");
}

#[test]
fn sequence_wrap_warning_is_silenced_by_quiet() {
    fib()
        .args(["sequence", "95", "--quiet"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn sequence_count_is_bounded() {
    fib()
        .args(["sequence", "4294967295"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("4294967295"));

    fib()
        .args(["sequence", "10001"])
        .assert()
        .failure();
}

#[test]
fn table_has_twenty_one_rows() {
    let table = json_output(&["table"]);
    let rows = table.as_array().unwrap();
    assert_eq!(rows.len(), 21);
    assert_eq!(rows[20], serde_json::json!({"index": 20, "value": 6765}));
}

#[test]
fn width_flag_controls_alignment() {
    fib()
        .args(["table", "--width", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("F(20) = 6765\n"));
}

#[test]
fn width_out_of_range_is_rejected() {
    fib()
        .args(["table", "--width", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Width must be between 1 and 32"));
}

// ============================================================================
// check / position
// ============================================================================

#[test]
fn check_reports_membership() {
    fib()
        .args(["check", "55", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("55 is ✅ a Fibonacci number (position 10)"))
        .stdout(predicate::str::contains("100 is ❌ a Fibonacci number"))
        .stdout(predicate::str::contains("1 of 2 values are Fibonacci numbers"));
}

#[test]
fn check_defaults_to_demo_list() {
    let results = json_output(&["check"]);
    assert_eq!(results.as_array().unwrap().len(), 15);
    assert_eq!(
        results[0],
        serde_json::json!({"value": 0, "is_fibonacci": true, "position": 0})
    );
}

#[test]
fn position_of_one_is_one() {
    fib()
        .args(["position", "1"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn position_not_found_fails() {
    fib()
        .args(["position", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("100 is not a Fibonacci number"));
}

#[test]
fn position_json_reports_null() {
    fib()
        .args(["position", "100", "--format", "json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"position\": null"));
}

// ============================================================================
// demo
// ============================================================================

#[test]
fn demo_is_the_default() {
    fib()
        .assert()
        .success()
        .stdout(predicate::str::contains("Compile-time F(15) = 610"))
        .stdout(predicate::str::contains("Results match: ✅"))
        .stdout(predicate::str::contains("F(40) = 102334155"));
}

#[test]
fn demo_fixed_size_block_uses_narrow_column() {
    fib()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("\nF(10) =   55\n"))
        .stdout(predicate::str::contains("\nF(10) =       55\n"));
}

#[test]
fn demo_json_comparison() {
    let demo = json_output(&["demo"]);
    assert_eq!(
        demo["comparison"],
        serde_json::json!({"index": 15, "compile_time": 610, "runtime": 610, "matches": true})
    );
}

#[test]
fn format_from_environment() {
    let output = fib()
        .env("FIB_FORMAT", "json")
        .args(["nth", "3"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["value"], 2);
}

#[test]
fn completions_generate() {
    fib()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fib"));
}
