//! puck CLI - scaffold, build, check, and delete single-file projects
//!
//! This is the main entry point for the puck command-line interface.

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

fn main() -> ExitCode {
    // No arguments at all is a usage error, unlike `--help`
    if std::env::args_os().len() <= 1 {
        let _ = Cli::command().print_help();
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if let Some(target) = cli.generate {
        return report(commands::docs::generate(target));
    }

    match cli.command {
        Some(Commands::Create(args)) => commands::lifecycle(|s| commands::create::run(args, s)),
        Some(Commands::Config) => report(commands::config::run()),
        Some(Commands::License) => report(commands::docs::license()),
        Some(Commands::Project(words)) => {
            commands::lifecycle(|s| commands::project::run(&words, s))
        }
        None => {
            let _ = Cli::command().print_help();
            ExitCode::SUCCESS
        }
    }
}

/// Print an informational command's error, if any
fn report(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing with appropriate verbosity
///
/// `RUST_LOG` wins over the flags when set.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            // Warnings cover auxiliary-step failures; -v shows lifecycle milestones
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
