//! End-to-end tests for the non-interactive `flowgrid` commands.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Path to the flowgrid binary
fn flowgrid_bin() -> &'static str {
    env!("CARGO_BIN_EXE_flowgrid")
}

/// Runs flowgrid with logs and config isolated inside `dir`.
fn run_in(dir: &Path, args: &[&str]) -> Output {
    let config = dir.join("config.toml");
    Command::new(flowgrid_bin())
        .env("XDG_DATA_HOME", dir.join("data"))
        .env("HOME", dir)
        .arg("--config")
        .arg(&config)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_layout_prints_one_frame_per_item() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_in(temp_dir.path(), &["layout", "--width", "80", "--count", "5"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "layout should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = stdout(&output);
    let frame_lines = stdout.lines().filter(|line| line.contains("x=")).count();
    assert_eq!(frame_lines, 5);
    // Default grid: 3 columns, insets 2 + 2, spacing 2 => padding 8, cell width 24.
    assert!(stdout.contains("columns=3 padding=8.00 cell_width=24.00"));
    assert!(stdout.contains("content_height="));
}

#[test]
fn test_layout_respects_columns_override() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_in(
        temp_dir.path(),
        &["--columns", "2", "layout", "--width", "44", "--count", "3"],
    );

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout(&output);
    assert!(stdout.contains("columns=2 padding=6.00 cell_width=19.00"));
    // Third item wraps to the second row at the left inset.
    assert!(stdout.contains("   2  x=2.00"));
}

#[test]
fn test_layout_rejects_huge_count() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_in(
        temp_dir.path(),
        &["layout", "--width", "80", "--count", "18446744073709551615"],
    );

    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Count must be at most"), "stderr: {stderr}");
    assert!(!stderr.contains("panicked"), "stderr: {stderr}");
    assert!(!stdout(&output).contains("columns="));
}

#[test]
fn test_layout_rejects_zero_columns() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_in(
        temp_dir.path(),
        &["--columns", "0", "layout", "--width", "80", "--count", "1"],
    );

    assert_ne!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cell_count"));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_config_path_prints_override() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_in(temp_dir.path(), &["config", "path"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).trim().ends_with("config.toml"));
}

#[test]
fn test_config_init_then_show() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_in(temp_dir.path(), &["config", "init"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(temp_dir.path().join("config.toml").exists());

    let output = run_in(temp_dir.path(), &["config", "show"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout(&output);
    assert!(stdout.contains("[grid]"));
    assert!(stdout.contains("cell_count = 3"));
    assert!(stdout.contains("height_pattern = \"fixed\""));
}

#[test]
fn test_config_init_does_not_overwrite_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[grid]\ncell_count = 4\n").unwrap();

    let output = run_in(temp_dir.path(), &["config", "init"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("already exists"));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "[grid]\ncell_count = 4\n"
    );

    let output = run_in(temp_dir.path(), &["config", "init", "--force"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(std::fs::read_to_string(&path).unwrap().contains("cell_count = 3"));
}
