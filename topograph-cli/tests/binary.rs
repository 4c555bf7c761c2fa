//! Behavioural tests for the `topograph` binary.

use std::process::{Command, Output};

use rstest::rstest;

fn run_topograph(args: &[&str], log_format: Option<&str>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_topograph"));
    command
        .args(args)
        .env_remove("TOPOGRAPH_SEED")
        .env_remove("RUST_LOG");
    match log_format {
        Some(value) => {
            command.env("TOPOGRAPH_LOG_FORMAT", value);
        }
        None => {
            command.env_remove("TOPOGRAPH_LOG_FORMAT");
        }
    }

    match command.output() {
        Ok(output) => output,
        Err(error) => panic!("failed to run topograph: {error}"),
    }
}

fn successful_stdout(output: &Output) -> String {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("expected success, got failure: {stderr}");
    }
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[rstest]
#[case::default_logs(None)]
#[case::human_logs(Some("human"))]
#[case::json_logs(Some("json"))]
fn diameter_command_prints_its_report(#[case] log_format: Option<&str>) {
    let output = run_topograph(&["diameter", "--seed", "3"], log_format);
    let stdout = successful_stdout(&output);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.first(), Some(&"seed: 3"));
    assert!(
        lines.iter().any(|line| line.starts_with("diameter: ")),
        "missing diameter line: {stdout}"
    );
}

#[test]
fn json_output_is_a_single_document() {
    let output = run_topograph(&["--format", "json", "generate", "--seed", "11"], None);
    let stdout = successful_stdout(&output);

    let document: serde_json::Value = match serde_json::from_str(&stdout) {
        Ok(value) => value,
        Err(error) => panic!("stdout is not JSON ({error}): {stdout}"),
    };
    assert_eq!(document["seed"], 11);
    assert!(document["graph"]["nodes"].is_array());
}

#[test]
fn seeded_runs_are_reproducible() {
    let first = successful_stdout(&run_topograph(&["generate", "--seed", "21"], None));
    let second = successful_stdout(&run_topograph(&["generate", "--seed", "21"], None));
    assert_eq!(first, second);
}

#[rstest]
#[case::too_many_nodes(&["generate", "--nodes", "30"], "node count")]
#[case::unknown_endpoint(&["path", "0", "99", "--seed", "4"], "99")]
fn failures_exit_non_zero_and_log_to_stderr(#[case] args: &[&str], #[case] needle: &str) {
    let output = run_topograph(args, None);
    if output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        panic!("expected failure, got success: {stdout}");
    }

    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(needle), "unexpected stderr: {stderr}");
}

#[test]
fn unsupported_log_format_is_rejected() {
    let output = run_topograph(&["diameter", "--seed", "3"], Some("xml"));
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported log format"), "unexpected stderr: {stderr}");
}
