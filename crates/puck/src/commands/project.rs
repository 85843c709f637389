//! Per-project actions: `<name> b|s|r` and bare `<name>`

use anyhow::{anyhow, bail, Result};
use puck_core::METADATA_FILE;
use puck_projects::{BuildOutcome, CheckOutcome, DeleteOutcome};

use super::Session;
use crate::cli::ProjectAction;
use crate::output;

const USAGE: &str = "Usage: puck <name> [b|s|r], or `puck --help`";

pub fn run(words: &[String], session: &Session) -> Result<()> {
    let (name, action) = match words {
        [name] => {
            // A bare name only builds an existing puck project
            let known = session
                .paths
                .candidate_roots(name)
                .iter()
                .any(|root| root.join(METADATA_FILE).is_file());
            if !known {
                bail!("Unknown command or project: {}. {}", name, USAGE);
            }
            (name, ProjectAction::Build)
        }
        [name, letter] => {
            let action = ProjectAction::parse(letter)
                .ok_or_else(|| anyhow!("Unknown action '{}'. {}", letter, USAGE))?;
            (name, action)
        }
        _ => bail!("{}", USAGE),
    };

    match action {
        ProjectAction::Build => build(name, session),
        ProjectAction::Check => check(name, session),
        ProjectAction::Remove => remove(name, session),
    }
}

fn build(name: &str, session: &Session) -> Result<()> {
    match session.dispatcher().build_or_run(name)? {
        BuildOutcome::Success => {
            output::success(&format!("{} finished", name));
            Ok(())
        }
        BuildOutcome::ToolMissing { tool, hint } => bail!("{} not found. {}", tool, hint),
        BuildOutcome::BuildFailed { command, reason } => {
            bail!("`{}` failed: {}", command, reason)
        }
        BuildOutcome::NoBuilder { language } => {
            bail!("No builder configured for language '{}'", language)
        }
    }
}

fn check(name: &str, session: &Session) -> Result<()> {
    let outcome = output::while_running(&format!("Checking {}...", name), || {
        session.dispatcher().syntax_check(name)
    })?;

    match outcome {
        CheckOutcome::Pass => {
            output::success(&format!("{}: no syntax errors", name));
            Ok(())
        }
        CheckOutcome::Fail { reason } => bail!("Syntax errors in {}:\n{}", name, reason),
        CheckOutcome::ToolMissing { tool, hint } => bail!("{} not found. {}", tool, hint),
        CheckOutcome::Unsupported { language } => {
            output::info(&format!("No syntax checker configured for {}", language));
            Ok(())
        }
    }
}

fn remove(name: &str, session: &Session) -> Result<()> {
    match session.dispatcher().delete(name)? {
        DeleteOutcome::Deleted => output::success(&format!("Deleted {}", name)),
        DeleteOutcome::Cancelled => output::info("Deletion cancelled"),
    }
    Ok(())
}
