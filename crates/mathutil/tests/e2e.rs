//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn mathutil() -> Command {
    let mut cmd = Command::cargo_bin("mathutil").expect("binary not found");
    cmd.env_remove("MATHUTIL_QUIET")
        .env_remove("MATHUTIL_FORMAT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_flag() {
    mathutil()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci"));
}

#[test]
fn version_flag() {
    mathutil()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mathutil"));
}

#[test]
fn interactive_session_prints_prompts_and_results() {
    mathutil()
        .write_stdin("10\n48\n18\n1\n-3\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Enter the number of terms for the Fibonacci sequence: ",
        ))
        .stdout(predicate::str::contains("Enter coefficient c: "))
        .stdout(predicate::str::contains("0 1 1 2 3 5 8 13 21 34\n"))
        .stdout(predicate::str::contains("The GCD of 48 and 18 is: 6"))
        .stdout(predicate::str::contains("Root 1: 2.0\n"))
        .stdout(predicate::str::contains("Root 2: 1.0\n"));
}

#[test]
fn quiet_session_output_is_exact() {
    mathutil()
        .arg("-q")
        .write_stdin("1 17 5 1 2 1\n")
        .assert()
        .success()
        .stdout(
            "Fibonacci sequence with 1 terms:\n\
             0\n\
             The GCD of 17 and 5 is: 1\n\
             The roots are real and equal:\n\
             Root: -1.0\n",
        );
}

#[test]
fn complex_roots() {
    mathutil()
        .arg("--quiet")
        .write_stdin("0 0 0 1 0 1")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The roots are complex:\nRoot 1: 0.0 + 1.0i\nRoot 2: 0.0 - 1.0i\n",
        ));
}

#[test]
fn not_quadratic() {
    mathutil()
        .arg("-q")
        .write_stdin("2 9 3 0 2 3")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "This is not a quadratic equation (a cannot be 0).",
        ))
        .stdout(predicate::str::contains("Root").not());
}

#[test]
fn negative_terms_emit_nothing() {
    mathutil()
        .arg("-q")
        .write_stdin("-5 4 6 1 -3 2")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Fibonacci sequence with -5 terms:\n\nThe GCD of 4 and 6 is: 2\n",
        ));
}

#[test]
fn malformed_input_fails() {
    mathutil()
        .arg("-q")
        .write_stdin("ten\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid input"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn truncated_input_fails() {
    mathutil()
        .arg("-q")
        .write_stdin("5\n48\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unexpected end of input"))
        .stdout(predicate::str::contains("0 1 1 2 3"));
}

#[test]
fn json_format() {
    let output = mathutil()
        .args(["--format", "json"])
        .write_stdin("3 48 18 1 -3 2")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["fibonacci"]["terms"], serde_json::json!(["0", "1", "1"]));
    assert_eq!(json["gcd"]["gcd"], 6);
    assert_eq!(json["quadratic"]["roots"]["kind"], "real_distinct");
    assert_eq!(json["quadratic"]["roots"]["root1"], 2.0);
}

#[test]
fn env_var_format() {
    mathutil()
        .env("MATHUTIL_FORMAT", "json")
        .write_stdin("0 1 1 0 1 1")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"not_quadratic\""));
}

#[test]
fn invalid_format() {
    mathutil().args(["--format", "yaml"]).assert().failure();
}

#[test]
fn verbose_logs_go_to_stderr() {
    mathutil()
        .args(["-q", "-v"])
        .write_stdin("2 48 18 1 2 1")
        .assert()
        .success()
        .stdout(predicate::str::contains("computed gcd").not())
        .stderr(predicate::str::contains("computed gcd"));
}

#[test]
fn rust_log_overrides_default_level() {
    mathutil()
        .env("RUST_LOG", "debug")
        .arg("-q")
        .write_stdin("2 48 18 1 2 1")
        .assert()
        .success()
        .stderr(predicate::str::contains("computed gcd"));
}

#[test]
fn default_level_hides_debug_events() {
    mathutil()
        .arg("-q")
        .write_stdin("2 48 18 1 2 1")
        .assert()
        .success()
        .stderr(predicate::str::contains("computed gcd").not());
}

#[test]
fn shell_completion_bash() {
    mathutil()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mathutil"));
}

#[test]
fn shell_completion_zsh() {
    mathutil()
        .args(["--completion", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mathutil"));
}
