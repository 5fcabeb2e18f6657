//! Git integration utilities for locating the repository.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{GateError, Result};

/// Resolve the top-level directory of the repository containing `dir`.
///
/// Runs `git rev-parse --show-toplevel`. Returns an error if the
/// directory is not inside a git work tree or if git is not available.
pub fn find_root(dir: &Path) -> Result<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .current_dir(dir)
        .output()
        .map_err(|e| GateError::Git(format!("failed to run git: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GateError::Git(format!(
            "git rev-parse --show-toplevel failed: {stderr}"
        )));
    }

    let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if root.is_empty() {
        return Err(GateError::Git(
            "git rev-parse --show-toplevel returned empty output".to_string(),
        ));
    }

    Ok(PathBuf::from(root))
}

/// Check whether a directory is inside a git work tree.
pub fn is_git_repo(dir: &Path) -> bool {
    Command::new("git")
        .args(["rev-parse", "--is-inside-work-tree"])
        .current_dir(dir)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
