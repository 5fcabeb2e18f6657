//! Pre-commit hook installation.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Shell script written into `.git/hooks/pre-commit`.
///
/// The hook itself stays a thin trampoline so upgrading the installed
/// `devgate` binary upgrades the gate without reinstalling the hook.
#[cfg(not(windows))]
const HOOK_SCRIPT: &str = "#!/bin/sh\nexec devgate run \"$@\"\n";

/// Install the gate as the repository's pre-commit hook.
///
/// Resolves the repository containing `dir`, then writes an executable
/// `.git/hooks/pre-commit` script that runs `devgate run`. An existing
/// hook is left untouched unless `force` is set.
#[cfg(not(windows))]
pub fn install_pre_commit(dir: &Path, force: bool) -> Result<PathBuf> {
    use crate::error::GateError;
    use std::fs;
    use std::io::Write;
    use std::os::unix::fs::PermissionsExt;

    use tracing::debug;

    let root = crate::git::find_root(dir)?;
    let hooks_dir = root.join(".git").join("hooks");
    debug!(hooks_dir = %hooks_dir.display(), "Resolved git hooks directory");
    fs::create_dir_all(&hooks_dir)?;

    let hook = hooks_dir.join("pre-commit");
    if hook.exists() && !force {
        return Err(GateError::HookExists(hook));
    }

    let mut file = fs::File::create(&hook)?;
    file.write_all(HOOK_SCRIPT.as_bytes())?;

    let mut perms = file.metadata()?.permissions();
    perms.set_mode(0o755);
    file.set_permissions(perms)?;
    debug!(hook = %hook.display(), "Wrote executable pre-commit hook");

    Ok(hook)
}

#[cfg(windows)]
pub fn install_pre_commit(_dir: &Path, _force: bool) -> Result<PathBuf> {
    Err(crate::error::GateError::UnsupportedPlatform)
}
