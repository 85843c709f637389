//! Git helpers: repository initialization and author lookup

use camino::Utf8Path;
use puck_core::process::PROBE_TIMEOUT;
use puck_core::{CommandSpec, ProcessRunner};
use tracing::debug;

/// Initialize a git repository in `path`
///
/// Returns an error message on failure; callers treat this step as best-effort.
pub fn init_repository(runner: &dyn ProcessRunner, path: &Utf8Path) -> Result<(), String> {
    if path.join(".git").exists() {
        debug!("Git repository already exists at: {}", path);
        return Ok(());
    }

    let output = runner.run(&CommandSpec::new("git").arg("init").current_dir(path).capture());
    if output.succeeded() {
        Ok(())
    } else if output.is_not_found() {
        Err("git not found. Install it from https://git-scm.com/downloads".to_string())
    } else {
        Err(format!(
            "git init failed: {}",
            output
                .output
                .as_deref()
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .unwrap_or(&output.describe())
        ))
    }
}

/// `git config user.name`, if git is installed and it is set
pub fn user_name(runner: &dyn ProcessRunner) -> Option<String> {
    let output = runner.run(
        &CommandSpec::new("git")
            .args(["config", "user.name"])
            .capture()
            .timeout(Some(PROBE_TIMEOUT)),
    );
    if !output.succeeded() {
        return None;
    }
    output
        .output
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
}
