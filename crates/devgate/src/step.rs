//! Gate step definitions and configuration.

use serde::{Deserialize, Serialize};

/// Builtin gate steps, in the order the pre-commit hook runs them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinStep {
    /// cargo build --all
    Build,

    /// cargo test --all -- --test-threads=1
    Test,

    /// rustup run nightly cargo fmt --all -- --check
    Fmt,

    /// cargo clippy --all --all-targets -- -W clippy::pedantic
    Clippy,
}

impl BuiltinStep {
    /// All builtin steps in gate order.
    pub fn all() -> [BuiltinStep; 4] {
        [
            BuiltinStep::Build,
            BuiltinStep::Test,
            BuiltinStep::Fmt,
            BuiltinStep::Clippy,
        ]
    }

    /// Get the step name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            BuiltinStep::Build => "build",
            BuiltinStep::Test => "test",
            BuiltinStep::Fmt => "fmt",
            BuiltinStep::Clippy => "clippy",
        }
    }

    /// Get the step's shell command.
    ///
    /// Tests run single-threaded, fmt is check-only on the nightly
    /// channel, and clippy runs with pedantic warnings enabled.
    pub fn command(&self) -> &'static str {
        match self {
            BuiltinStep::Build => "cargo build --all",
            BuiltinStep::Test => "cargo test --all -- --test-threads=1",
            BuiltinStep::Fmt => "rustup run nightly cargo fmt --all -- --check",
            BuiltinStep::Clippy => "cargo clippy --all --all-targets -- -W clippy::pedantic",
        }
    }
}

/// Configuration for a gate step.
///
/// Steps are defined at authoring time and never constructed from
/// external input; the command string is handed to a shell as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepConfig {
    /// Human-readable step name.
    pub name: String,

    /// Shell command to execute.
    pub command: String,
}

impl StepConfig {
    /// Create a step configuration from a builtin step.
    pub fn from_builtin(step: BuiltinStep) -> Self {
        Self {
            name: step.name().to_string(),
            command: step.command().to_string(),
        }
    }

    /// Create a custom step configuration.
    pub fn custom(name: String, command: String) -> Self {
        Self { name, command }
    }
}
