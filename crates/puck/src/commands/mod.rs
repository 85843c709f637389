//! CLI command implementations

pub mod config;
pub mod create;
pub mod docs;
pub mod project;

use std::process::ExitCode;

use anyhow::Result;
use puck_core::{Config, Paths, SystemRunner, TerminalPrompter};
use puck_projects::LifecycleDispatcher;

use crate::output;

/// Everything a lifecycle command needs, loaded once per invocation
pub struct Session {
    pub config: Config,
    pub paths: Paths,
    runner: SystemRunner,
}

impl Session {
    fn load() -> Result<Self> {
        Ok(Self {
            config: Config::load(),
            paths: Paths::discover()?,
            runner: SystemRunner::new(),
        })
    }

    pub fn dispatcher(&self) -> LifecycleDispatcher<'_> {
        LifecycleDispatcher::new(&self.config, &self.paths, &self.runner, &TerminalPrompter)
    }
}

/// Run a lifecycle command and map its result to an exit code
///
/// Failures are always printed; they only change the exit code when
/// `propagate_exit_code` is enabled.
pub fn lifecycle(command: impl FnOnce(&Session) -> Result<()>) -> ExitCode {
    let session = match Session::load() {
        Ok(session) => session,
        Err(e) => {
            output::error(&format!("{:#}", e));
            return ExitCode::FAILURE;
        }
    };

    match command(&session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            if session.config.propagate_exit_code {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}
