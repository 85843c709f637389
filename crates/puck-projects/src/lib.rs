//! # puck-projects
//!
//! Language strategies and project lifecycle for the puck CLI:
//! - Static registry of supported languages and their command recipes
//! - Language detection from metadata or filesystem signatures
//! - Create, build/run, syntax-check, and delete operations
//!
//! # Example
//!
//! ```no_run
//! use puck_core::{Config, InvocationOptions, Paths, SystemRunner, TerminalPrompter};
//! use puck_projects::LifecycleDispatcher;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load();
//! let paths = Paths::discover()?;
//! let runner = SystemRunner::new();
//! let dispatcher = LifecycleDispatcher::new(&config, &paths, &runner, &TerminalPrompter);
//!
//! let report = dispatcher.create("demo", "python", &InvocationOptions::default())?;
//! println!("created {}", report.project_dir);
//! # Ok(())
//! # }
//! ```

pub mod detector;
pub mod docker;
pub mod error;
pub mod git;
pub mod languages;
pub mod lifecycle;
pub mod render;

pub use detector::{detect, Detection, DetectionSource};
pub use error::{Error, Result};
pub use languages::{Language, LanguageDescriptor};
pub use lifecycle::{
    AuxiliaryReport, AuxiliaryStep, BuildOutcome, CheckOutcome, CreateReport, DeleteOutcome,
    LifecycleDispatcher, StepOutcome,
};
