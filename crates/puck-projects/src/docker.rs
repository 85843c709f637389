//! Docker image build and run for projects carrying a Dockerfile

use std::time::Duration;

use camino::Utf8Path;
use puck_core::{CommandSpec, ProcessRunner};
use tracing::{info, warn};

use crate::lifecycle::BuildOutcome;

/// Name of the file that opts a project into docker runs
pub const DOCKERFILE: &str = "Dockerfile";

/// Deterministic image tag for a project name
///
/// Lower-cased, with anything outside `[a-z0-9_.-]` replaced by `-`.
pub fn image_tag(name: &str) -> String {
    let sanitized: String = name
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("puck-{}", sanitized.trim_matches(|c| c == '.' || c == '-'))
}

/// Build the project's image and run it
///
/// Returns `None` when the image could not be built, so the caller falls
/// back to local execution.
pub fn build_and_run(
    runner: &dyn ProcessRunner,
    project_dir: &Utf8Path,
    name: &str,
    timeout: Option<Duration>,
) -> Option<BuildOutcome> {
    let tag = image_tag(name);
    info!("Building docker image {}", tag);

    let build = CommandSpec::new("docker")
        .args(["build", "-t", tag.as_str(), "."])
        .current_dir(project_dir)
        .capture()
        .timeout(timeout);
    let built = runner.run(&build);
    if !built.succeeded() {
        warn!(
            "docker build failed ({}), falling back to local execution",
            built.describe()
        );
        return None;
    }

    let run = CommandSpec::new("docker")
        .args(["run", "--rm", tag.as_str()])
        .current_dir(project_dir)
        .timeout(timeout);
    let ran = runner.run(&run);
    if ran.succeeded() {
        Some(BuildOutcome::Success)
    } else {
        Some(BuildOutcome::BuildFailed {
            command: run.to_string(),
            reason: ran.describe(),
        })
    }
}
