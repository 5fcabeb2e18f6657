//! Error types for gate operations

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GateError {
    #[error("step '{step}' has an empty command")]
    EmptyCommand { step: String },

    #[error("failed to spawn step '{step}': {source}")]
    Spawn {
        step: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed waiting on step '{step}': {source}")]
    Wait {
        step: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git error: {0}")]
    Git(String),

    #[error("pre-commit hook already exists at {0} (pass force to overwrite)")]
    HookExists(PathBuf),

    #[error("hook installation is not supported on this platform")]
    UnsupportedPlatform,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for gate operations
pub type Result<T> = std::result::Result<T, GateError>;
