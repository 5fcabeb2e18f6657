//! Devgate - pre-commit gate pipeline
//!
//! Runs an ordered list of validation steps (build, test, fmt, clippy)
//! against a checkout and stops at the first failure, so the invoking
//! git hook can reject the commit with the failing step's exit status.

pub mod error;
pub mod git;
pub mod install;
pub mod pipeline;
pub mod runner;
pub mod step;
pub mod telemetry;

// Re-export key types
pub use error::GateError;
pub use pipeline::{GatePipeline, GateReport};
pub use runner::{GateRunner, StepResult};
pub use step::{BuiltinStep, StepConfig};
