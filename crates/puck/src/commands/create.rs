//! Create command

use anyhow::Result;
use puck_core::InvocationOptions;
use puck_projects::{AuxiliaryStep, StepOutcome};
use tracing::debug;

use super::Session;
use crate::cli::CreateArgs;
use crate::output;

pub fn run(args: CreateArgs, session: &Session) -> Result<()> {
    let options = InvocationOptions {
        no_cheatsheet: args.no_cheatsheet,
        init_git: args.init_git(),
        init_docker: args.init_docker(),
    };

    let report = output::while_running(&format!("Creating {}...", args.name), || {
        session.dispatcher().create(&args.name, &args.language, &options)
    })?;

    let meta = &report.metadata;
    output::success(&format!("Created project {}", meta.name));
    output::kv("Language", &meta.language);
    output::kv("Author", &meta.author);
    output::kv("Created", &meta.created_at);
    output::kv("Path", report.project_dir.as_str());

    for aux in &report.auxiliary {
        match &aux.outcome {
            StepOutcome::Done => {
                if aux.step != AuxiliaryStep::Cheatsheet {
                    output::info(&format!("Added {}", aux.step));
                }
            }
            StepOutcome::Skipped(reason) => debug!("Skipped {}: {}", aux.step, reason),
            StepOutcome::Failed(reason) => {
                output::warning(&format!("Could not add {}: {}", aux.step, reason))
            }
        }
    }

    Ok(())
}
