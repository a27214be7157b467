//! End-to-end tests for the `fit` binary.
//!
//! Tests the full pipeline: sensor package in, formatted summary line out.

use std::process::Command;

fn fit_binary() -> String {
    env!("CARGO_BIN_EXE_fit").to_string()
}

#[test]
fn test_demo_prints_one_line_per_package_in_order() {
    let output = Command::new(fit_binary())
        .arg("demo")
        .output()
        .expect("failed to run fit demo");
    assert!(
        output.status.success(),
        "fit demo should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "one line per sample package");
    assert!(lines[0].starts_with("Тип тренировки: Swimming;"));
    assert!(lines[1].starts_with("Тип тренировки: Running;"));
    assert!(lines[2].starts_with("Тип тренировки: SportsWalking;"));
}

#[test]
fn test_report_single_package() {
    let output = Command::new(fit_binary())
        .args(["report", "RUN", "15000", "1", "75"])
        .output()
        .expect("failed to run fit report");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim_end(),
        "Тип тренировки: Running; Длительность: 1.000 ч.; \
         Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; \
         Потрачено ккал: 797.805."
    );
}

#[test]
fn test_report_unknown_tag_fails() {
    let output = Command::new(fit_binary())
        .args(["report", "BIKE", "1", "2", "3"])
        .output()
        .expect("failed to run fit report");
    assert!(!output.status.success(), "unknown tag should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("unknown workout type: BIKE"),
        "stderr was: {stderr}"
    );
}

#[test]
fn test_report_wrong_arity_fails() {
    let output = Command::new(fit_binary())
        .args(["report", "SWM", "720", "1"])
        .output()
        .expect("failed to run fit report");
    assert!(!output.status.success(), "short payload should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("SWM package expects 5 values, got 2"),
        "stderr was: {stderr}"
    );
}

#[test]
fn test_report_zero_duration_fails() {
    let output = Command::new(fit_binary())
        .args(["report", "RUN", "15000", "0", "75"])
        .output()
        .expect("failed to run fit report");
    assert!(!output.status.success(), "zero duration should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("duration is zero"),
        "stderr was: {stderr}"
    );
}

#[test]
fn test_no_subcommand_prints_help() {
    let output = Command::new(fit_binary())
        .output()
        .expect("failed to run fit");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"), "stdout was: {stdout}");
}
