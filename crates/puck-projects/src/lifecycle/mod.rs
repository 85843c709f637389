//! Project lifecycle operations
//!
//! [`LifecycleDispatcher`] composes the config, the language registry, the
//! detector, and a process runner into the four operations:
//! - [`create`](LifecycleDispatcher::create): scaffold a new project
//! - [`build_or_run`](LifecycleDispatcher::build_or_run): build and execute it
//! - [`syntax_check`](LifecycleDispatcher::syntax_check): run the language's checker
//! - [`delete`](LifecycleDispatcher::delete): remove the project directory
//!
//! Create distinguishes core steps, whose failure aborts with an `Err`, from
//! auxiliary steps, which are always attempted and reported in
//! [`CreateReport::auxiliary`] but never abort.

mod build;
mod check;
mod create;
mod delete;

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use puck_core::{Config, Paths, ProcessRunner, ProjectMetadata, Prompter};
use tracing::debug;

use crate::detector::{detect, Detection};
use crate::error::{Error, Result};

pub use delete::remove_tree;

/// Orchestrates lifecycle operations for one invocation
pub struct LifecycleDispatcher<'a> {
    config: &'a Config,
    paths: &'a Paths,
    runner: &'a dyn ProcessRunner,
    prompter: &'a dyn Prompter,
}

impl<'a> LifecycleDispatcher<'a> {
    pub fn new(
        config: &'a Config,
        paths: &'a Paths,
        runner: &'a dyn ProcessRunner,
        prompter: &'a dyn Prompter,
    ) -> Self {
        Self {
            config,
            paths,
            runner,
            prompter,
        }
    }

    pub fn config(&self) -> &Config {
        self.config
    }

    /// Find the project directory and its language
    ///
    /// Tries the working directory first, then the installation root; the
    /// first root that yields a language wins.
    pub fn resolve(&self, name: &str) -> Result<ResolvedProject> {
        for root in self.paths.candidate_roots(name) {
            if !root.is_dir() {
                continue;
            }
            if let Some(detection) = detect(&root) {
                debug!("Resolved {} to {} ({})", name, root, detection.language);
                return Ok(ResolvedProject {
                    name: name.to_string(),
                    dir: root,
                    detection,
                });
            }
        }
        Err(Error::no_project_descriptor(name))
    }
}

/// A project located on disk with a detected language
#[derive(Debug, Clone)]
pub struct ResolvedProject {
    pub name: String,
    pub dir: Utf8PathBuf,
    pub detection: Detection,
}

impl ResolvedProject {
    pub fn language(&self) -> &str {
        &self.detection.language
    }
}

/// Result of a successful Create
#[derive(Debug, Clone)]
pub struct CreateReport {
    pub project_dir: Utf8PathBuf,
    pub metadata: ProjectMetadata,
    /// Outcome of every best-effort step, in the order attempted
    pub auxiliary: Vec<AuxiliaryReport>,
}

impl CreateReport {
    /// Outcome of one auxiliary step, if it was part of this Create
    pub fn outcome(&self, step: AuxiliaryStep) -> Option<&StepOutcome> {
        self.auxiliary
            .iter()
            .find(|r| r.step == step)
            .map(|r| &r.outcome)
    }
}

/// Best-effort side effects of Create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxiliaryStep {
    VirtualEnv,
    Cheatsheet,
    Dockerfile,
    Git,
}

impl fmt::Display for AuxiliaryStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::VirtualEnv => "virtual environment",
            Self::Cheatsheet => "cheatsheet",
            Self::Dockerfile => "Dockerfile",
            Self::Git => "git repository",
        };
        write!(f, "{}", name)
    }
}

/// What happened to one auxiliary step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Done,
    Skipped(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuxiliaryReport {
    pub step: AuxiliaryStep,
    pub outcome: StepOutcome,
}

/// Result of Build-Run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    Success,
    /// No usable toolchain, even after the remedy was attempted
    ToolMissing { tool: String, hint: String },
    /// A build or run command failed
    BuildFailed { command: String, reason: String },
    /// The detected language has no registered builder
    NoBuilder { language: String },
}

impl BuildOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Result of SyntaxCheck
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Pass,
    Fail { reason: String },
    ToolMissing { tool: String, hint: String },
    /// The detected language has no registered checker
    Unsupported { language: String },
}

impl CheckOutcome {
    /// Pass and Unsupported are not failures
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Fail { .. } | Self::ToolMissing { .. })
    }
}

/// Result of Delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined the confirmation prompt
    Cancelled,
}

/// Whether a relative project path stays inside its parent directory
fn is_plain_name(name: &Utf8Path) -> bool {
    !name.as_str().is_empty()
        && name
            .components()
            .all(|c| matches!(c, camino::Utf8Component::Normal(_)))
}
