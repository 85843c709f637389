//! CLI argument parsing with clap

use clap::{Args, Parser, Subcommand, ValueEnum};

const AFTER_HELP: &str = "\
Project actions:
  puck <name> b    Build and run the project
  puck <name> s    Check the project's syntax
  puck <name> r    Delete the project
  puck <name>      Build and run, when <name>/puck.json exists";

/// puck - scaffold, build, check, and delete small projects in many languages
#[derive(Parser, Debug)]
#[command(name = "puck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write a generated document into the current directory
    #[arg(long = "gen", value_name = "DOC", value_enum)]
    pub generate: Option<GenTarget>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project
    Create(CreateArgs),

    /// Write the commented default config file if none exists
    Config,

    /// Print license and copyright
    #[command(name = "c")]
    License,

    /// `<name> [b|s|r]`
    #[command(external_subcommand)]
    Project(Vec<String>),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Project name (the directory to create)
    pub name: String,

    /// Language (lua, python, c, cpp, rust, js, ts, html, css, go, java, assembly)
    pub language: String,

    /// Do not copy cheatsheets
    #[arg(short = 'n', long)]
    pub no_cheatsheet: bool,

    /// Initialize a git repository
    #[arg(long, overrides_with = "no_git")]
    pub git: bool,

    /// Do not initialize a git repository
    #[arg(long, overrides_with = "git")]
    pub no_git: bool,

    /// Generate a Dockerfile
    #[arg(long, overrides_with = "no_docker")]
    pub docker: bool,

    /// Do not generate a Dockerfile
    #[arg(long, overrides_with = "docker")]
    pub no_docker: bool,
}

impl CreateArgs {
    pub fn init_git(&self) -> Option<bool> {
        tri_state(self.git, self.no_git)
    }

    pub fn init_docker(&self) -> Option<bool> {
        tri_state(self.docker, self.no_docker)
    }
}

/// `--flag` / `--no-flag` pair; `None` defers to the config
fn tri_state(yes: bool, no: bool) -> Option<bool> {
    match (yes, no) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Documents `--gen` can write
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenTarget {
    /// HOWTOUSE.md usage guide
    Howtouse,
}

/// Action letter following a project name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectAction {
    Build,
    Check,
    Remove,
}

impl ProjectAction {
    pub fn parse(letter: &str) -> Option<Self> {
        match letter {
            "b" => Some(Self::Build),
            "s" => Some(Self::Check),
            "r" => Some(Self::Remove),
            _ => None,
        }
    }
}
