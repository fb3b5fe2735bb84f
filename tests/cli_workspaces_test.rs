use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const REPORT: &str = "Output \"DP-1\"\n   1\n * 2\n   3\nOutput \"HDMI-A-1\"\n   4\n * 5\n";

/// Run barkit from an empty directory so no stray config file is picked up
fn barkit(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("barkit").unwrap();
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .env_remove("BARKIT_OUTPUT_FORMAT");
    cmd
}

#[test]
fn test_workspaces_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    barkit(&dir)
        .args(["workspaces", "--screen", "DP-1"])
        .write_stdin(REPORT)
        .assert()
        .success()
        .stdout("workspaces: 1 2 3\ncurrent: 2\n");
}

#[test]
fn test_workspaces_from_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("report.txt"), REPORT).unwrap();
    barkit(&dir)
        .args(["workspaces", "report.txt", "-s", "HDMI-A-1"])
        .assert()
        .success()
        .stdout("workspaces: 4 5\ncurrent: 5\n");
}

#[test]
fn test_unknown_screen_uses_fallback() {
    let dir = tempfile::tempdir().unwrap();
    barkit(&dir)
        .args(["workspaces", "--screen", "eDP-1"])
        .write_stdin(REPORT)
        .assert()
        .success()
        .stdout("workspaces: 1 2\ncurrent: 1\n");
}

#[test]
fn test_missing_screen_warns_and_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    barkit(&dir)
        .arg("workspaces")
        .write_stdin(REPORT)
        .assert()
        .success()
        .stdout("workspaces: 1 2\ncurrent: 1\n")
        .stderr(predicate::str::contains("No screen name given"));
}

#[test]
fn test_crlf_report_is_normalised() {
    let dir = tempfile::tempdir().unwrap();
    barkit(&dir)
        .args(["workspaces", "--screen", "DP-1"])
        .write_stdin(REPORT.replace('\n', "\r\n"))
        .assert()
        .success()
        .stdout("workspaces: 1 2 3\ncurrent: 2\n");
}

#[test]
fn test_json_output() {
    let dir = tempfile::tempdir().unwrap();
    barkit(&dir)
        .args(["workspaces", "--screen", "DP-1", "--output-format", "json"])
        .write_stdin(REPORT)
        .assert()
        .success()
        .stdout("{\"workspace_list\":[1,2,3],\"current_workspace\":2}\n");
}

#[test]
fn test_output_format_from_env() {
    let dir = tempfile::tempdir().unwrap();
    barkit(&dir)
        .env("BARKIT_OUTPUT_FORMAT", "json")
        .args(["workspaces", "--screen", "DP-1"])
        .write_stdin(REPORT)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\"workspace_list\""));
}

#[test]
fn test_all_lists_every_output() {
    let dir = tempfile::tempdir().unwrap();
    barkit(&dir)
        .args(["workspaces", "--screen", "DP-1", "--all"])
        .write_stdin(REPORT)
        .assert()
        .success()
        .stdout(predicate::str::contains("output DP-1: 1 2 3"))
        .stdout(predicate::str::contains("output HDMI-A-1: 4 5"))
        .stdout(predicate::str::contains("focused: HDMI-A-1 5"));
}

#[test]
fn test_screen_from_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".barkit.toml"),
        "[global]\noutput-format = \"json\"\n\n[workspaces]\nscreen = \"HDMI-A-1\"\n",
    )
    .unwrap();

    barkit(&dir)
        .arg("workspaces")
        .write_stdin(REPORT)
        .assert()
        .success()
        .stdout("{\"workspace_list\":[4,5],\"current_workspace\":5}\n");
}

#[test]
fn test_cli_flags_override_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".barkit.toml"),
        "[global]\noutput-format = \"json\"\n\n[workspaces]\nscreen = \"HDMI-A-1\"\n",
    )
    .unwrap();

    barkit(&dir)
        .args(["workspaces", "--screen", "DP-1", "-o", "text"])
        .write_stdin(REPORT)
        .assert()
        .success()
        .stdout("workspaces: 1 2 3\ncurrent: 2\n");
}

#[test]
fn test_invalid_config_is_a_tool_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".barkit.toml"), "[workspaces]\nmonitor = 1\n").unwrap();

    barkit(&dir)
        .args(["workspaces", "--screen", "DP-1"])
        .write_stdin(REPORT)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn test_missing_input_file_is_a_tool_error() {
    let dir = tempfile::tempdir().unwrap();
    barkit(&dir)
        .args(["workspaces", "missing.txt", "--screen", "DP-1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read missing.txt"));
}
