//! Sequential fail-fast orchestration of gate steps.

use crate::error::Result;
use crate::runner::{GateRunner, StepResult};
use crate::step::StepConfig;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{error, info};

/// Result of a complete gate execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateReport {
    /// Whether every step passed.
    pub success: bool,

    /// Results of the steps that actually ran. On failure this ends
    /// with the failing step; later steps never started.
    pub steps: Vec<StepResult>,

    /// Total wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

impl GateReport {
    /// Number of steps that passed.
    pub fn passed_count(&self) -> usize {
        self.steps.iter().filter(|s| s.passed()).count()
    }

    /// Number of steps that failed.
    pub fn failed_count(&self) -> usize {
        self.steps.iter().filter(|s| !s.passed()).count()
    }

    /// The first (and, under fail-fast, only) failing step.
    pub fn first_failure(&self) -> Option<&StepResult> {
        self.steps.iter().find(|s| !s.passed())
    }
}

/// Gate pipeline orchestrator.
pub struct GatePipeline;

impl GatePipeline {
    /// Execute the steps in declared order, stopping at the first
    /// failure.
    ///
    /// Each step fully completes before the next begins; nothing runs
    /// concurrently and a failing step is never retried. Steps after
    /// the first failure are never started.
    pub async fn run(steps: &[StepConfig]) -> Result<GateReport> {
        let start = Instant::now();

        let mut results = Vec::new();
        let mut success = true;

        for config in steps {
            info!(step = %config.name, command = %config.command, "Running gate step");

            let result = GateRunner::execute_step(config).await?;
            let passed = result.passed();

            if passed {
                info!(
                    step = %result.step_name,
                    duration_ms = result.duration_ms,
                    "Step passed"
                );
            } else {
                error!(
                    step = %result.step_name,
                    exit_code = result.exit_code,
                    "Step failed, aborting remaining steps"
                );
            }

            results.push(result);

            if !passed {
                success = false;
                break;
            }
        }

        let duration_ms = start.elapsed().as_millis() as u64;

        if success {
            info!(
                steps = results.len(),
                duration_ms, "Gate passed, commit may proceed"
            );
        }

        Ok(GateReport {
            success,
            steps: results,
            duration_ms,
        })
    }
}
