//! # puck-core
//!
//! Core library for the puck CLI providing:
//! - Configuration file parsing (`key: value` lines)
//! - Project metadata (`puck.json`) and per-invocation overrides
//! - The process runner every external command goes through
//! - Path resolution for projects, config, and the installation root

pub mod config;
pub mod error;
pub mod paths;
pub mod process;
pub mod prompt;
pub mod types;

pub use config::{Config, ConfigValue};
pub use error::{Error, Result};
pub use paths::Paths;
pub use process::{CommandSpec, ProcessRunner, RunOutput, RunStatus, SystemRunner};
pub use prompt::{Prompter, TerminalPrompter};
pub use types::{InvocationOptions, ProjectMetadata, METADATA_FILE};
