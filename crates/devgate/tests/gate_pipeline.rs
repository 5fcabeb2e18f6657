//! Integration tests for the gate pipeline's fail-fast sequencing.

use devgate::{GatePipeline, StepConfig};
use std::fs;

fn step(name: &str, command: String) -> StepConfig {
    StepConfig::custom(name.to_string(), command)
}

/// Test: all steps pass, in declared order, each exactly once.
#[tokio::test]
async fn test_all_steps_pass_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("order.log");

    let steps = vec![
        step("one", format!("echo one >> {}", log.display())),
        step("two", format!("echo two >> {}", log.display())),
        step("three", format!("echo three >> {}", log.display())),
    ];

    let report = GatePipeline::run(&steps).await.expect("pipeline failed");

    assert!(report.success, "Gate should pass");
    assert_eq!(report.passed_count(), 3);
    assert_eq!(report.failed_count(), 0);

    let lines: Vec<String> = fs::read_to_string(&log)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    assert_eq!(lines, vec!["one", "two", "three"]);
}

/// Test: the first failing step aborts the sequence; later steps never
/// start and the failing exit code is reported.
#[tokio::test]
async fn test_fail_fast_skips_later_steps() {
    let dir = tempfile::tempdir().unwrap();
    let before = dir.path().join("before");
    let after = dir.path().join("after");

    let steps = vec![
        step("pass", format!("touch {}", before.display())),
        step("fail", "exit 7".to_string()),
        step("never", format!("touch {}", after.display())),
    ];

    let report = GatePipeline::run(&steps).await.expect("pipeline failed");

    assert!(!report.success, "Gate should fail");
    assert_eq!(report.steps.len(), 2, "Third step should never run");
    assert_eq!(report.passed_count(), 1);
    assert_eq!(report.failed_count(), 1);

    let failure = report.first_failure().expect("failure expected");
    assert_eq!(failure.step_name, "fail");
    assert_eq!(failure.exit_code, 7);

    assert!(before.exists(), "Step before the failure ran");
    assert!(!after.exists(), "Step after the failure never started");
}

/// Test: a failure in the very first step means nothing else runs.
#[tokio::test]
async fn test_first_step_failure_runs_nothing_else() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("marker");

    let steps = vec![
        step("fail", "false".to_string()),
        step("never", format!("touch {}", marker.display())),
    ];

    let report = GatePipeline::run(&steps).await.expect("pipeline failed");

    assert!(!report.success);
    assert_eq!(report.steps.len(), 1);
    assert!(!marker.exists());
}

/// Test: a step killed by a signal aborts the gate with 128+signal.
#[cfg(unix)]
#[tokio::test]
async fn test_signal_killed_step_aborts_gate() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("marker");

    let steps = vec![
        step("killed", "kill -TERM $$".to_string()),
        step("never", format!("touch {}", marker.display())),
    ];

    let report = GatePipeline::run(&steps).await.expect("pipeline failed");

    assert!(!report.success);
    assert_eq!(report.first_failure().unwrap().exit_code, 128 + 15);
    assert!(!marker.exists());
}

/// Test: re-running against an unchanged passing set of steps yields
/// the same result.
#[tokio::test]
async fn test_rerun_is_idempotent() {
    let steps = vec![step("ok", "true".to_string())];

    let first = GatePipeline::run(&steps).await.expect("pipeline failed");
    let second = GatePipeline::run(&steps).await.expect("pipeline failed");

    assert!(first.success);
    assert!(second.success);
    assert_eq!(first.steps.len(), second.steps.len());
}

/// Test: a missing executable surfaces as a failed step (shell exit
/// 127), not a runner error.
#[tokio::test]
async fn test_missing_binary_is_a_step_failure() {
    let steps = vec![
        step("missing", "/nonexistent-binary-that-does-not-exist".to_string()),
        step("never", "true".to_string()),
    ];

    let report = GatePipeline::run(&steps).await.expect("pipeline failed");

    assert!(!report.success);
    assert_eq!(report.steps.len(), 1);
    assert_eq!(report.first_failure().unwrap().exit_code, 127);
}
