//! Configuration file loading and parsing
//!
//! The config file is line oriented: one `key: value` pair per line, with
//! `#` comments and blank lines ignored. `true`/`false` are recognized
//! case-insensitively; anything else is kept as a raw token. Loading never
//! fails: a missing or unreadable file yields the built-in defaults.

use std::collections::BTreeMap;
use std::io::IsTerminal;
use std::time::Duration;

use camino::Utf8Path;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::paths;
use crate::prompt::{Prompter, TerminalPrompter};

/// Commented default config written by `puck config`
pub const DEFAULT_CONFIG: &str = "\
# puck configuration
#
# One `key: value` pair per line. Lines starting with # are ignored.

# Copy language cheatsheets into new projects
copy_cheatsheet: true

# Create a .venv for new python projects
auto_venv: true

# Run assembly programs after assembling and linking them
assembly_build: true

# Delete projects without asking for confirmation
delete_force: false

# Initialize a git repository in new projects
init_git: false

# Generate a Dockerfile for new projects (when the language has one)
init_docker: false

# Build and run through docker when the project has a Dockerfile
use_docker_run: false

# Exit with status 1 when a build, check, or delete fails
propagate_exit_code: false

# Kill external commands after this many seconds (0 disables the limit)
command_timeout: 0

# Author name used in boilerplate and metadata (defaults to git user.name)
# author: Your Name
";

/// A single parsed config value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    /// `true` / `false` in any letter case
    Bool(bool),
    /// Any other token, trimmed
    Raw(String),
}

impl ConfigValue {
    fn parse(token: &str) -> Self {
        if token.eq_ignore_ascii_case("true") {
            Self::Bool(true)
        } else if token.eq_ignore_ascii_case("false") {
            Self::Bool(false)
        } else {
            Self::Raw(token.to_string())
        }
    }
}

/// Parse config text into its raw key/value entries
///
/// Later duplicates of a key replace earlier ones. Lines without a `:` are
/// skipped.
pub fn parse_entries(content: &str) -> BTreeMap<String, ConfigValue> {
    let mut entries = BTreeMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            debug!("Skipping config line without a key: {}", line);
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        entries.insert(key.to_string(), ConfigValue::parse(value.trim()));
    }

    entries
}

/// Immutable process-wide configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub copy_cheatsheet: bool,
    pub auto_venv: bool,
    pub assembly_build: bool,
    pub delete_force: bool,
    pub init_git: bool,
    pub init_docker: bool,
    pub use_docker_run: bool,
    /// Turn lifecycle failures into a non-zero exit status
    pub propagate_exit_code: bool,
    /// Per-call limit for build, run, and check commands
    pub command_timeout: Option<Duration>,
    /// Author override for new projects
    pub author: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            copy_cheatsheet: true,
            auto_venv: true,
            assembly_build: true,
            delete_force: false,
            init_git: false,
            init_docker: false,
            use_docker_run: false,
            propagate_exit_code: false,
            command_timeout: None,
            author: None,
        }
    }
}

impl Config {
    /// Parse config text, applying defaults for absent keys
    pub fn parse(content: &str) -> Self {
        Self::from_entries(&parse_entries(content))
    }

    /// Build a config from parsed entries; unknown keys are ignored
    pub fn from_entries(entries: &BTreeMap<String, ConfigValue>) -> Self {
        let mut config = Self::default();

        for (key, value) in entries {
            let flag = match key.as_str() {
                "copy_cheatsheet" => &mut config.copy_cheatsheet,
                "auto_venv" => &mut config.auto_venv,
                "assembly_build" => &mut config.assembly_build,
                "delete_force" => &mut config.delete_force,
                "init_git" => &mut config.init_git,
                "init_docker" => &mut config.init_docker,
                "use_docker_run" => &mut config.use_docker_run,
                "propagate_exit_code" => &mut config.propagate_exit_code,
                "command_timeout" => {
                    config.command_timeout = parse_timeout(value);
                    continue;
                }
                "author" => {
                    if let ConfigValue::Raw(author) = value {
                        if !author.is_empty() {
                            config.author = Some(author.clone());
                        }
                    }
                    continue;
                }
                _ => {
                    debug!("Ignoring unrecognized config key: {}", key);
                    continue;
                }
            };

            match value {
                ConfigValue::Bool(b) => *flag = *b,
                ConfigValue::Raw(raw) => {
                    warn!("Config key '{}' expects true or false, got '{}'", key, raw);
                }
            }
        }

        config
    }

    /// Load from the default location, offering to write defaults when the
    /// file is missing and the process is attached to a terminal
    pub fn load() -> Self {
        let path = match paths::config_path() {
            Ok(path) => path,
            Err(e) => {
                warn!("Configuration unavailable, using defaults: {}", e);
                return Self::default();
            }
        };

        let interactive = std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
        if interactive {
            Self::load_from(&path, Some(&TerminalPrompter))
        } else {
            Self::load_from(&path, None)
        }
    }

    /// Load from an explicit path
    ///
    /// When the file is absent and a prompter is supplied, the user is asked
    /// whether the commented defaults should be written there.
    pub fn load_from(path: &Utf8Path, prompter: Option<&dyn Prompter>) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                debug!("Loaded configuration from {}", path);
                Self::parse(&content)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if let Some(prompter) = prompter {
                    let question = format!("No config found at {}. Write the defaults?", path);
                    if prompter.confirm(&question) {
                        if let Err(e) = Self::write_default(path) {
                            warn!("Could not write default config: {}", e);
                        }
                    }
                }
                Self::default()
            }
            Err(e) => {
                warn!("Could not read config {}, using defaults: {}", path, e);
                Self::default()
            }
        }
    }

    /// Write the commented default config, refusing to overwrite
    pub fn write_default(path: &Utf8Path) -> Result<()> {
        if path.exists() {
            return Err(Error::config_exists(path.as_str()));
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, DEFAULT_CONFIG)?;
        Ok(())
    }
}

fn parse_timeout(value: &ConfigValue) -> Option<Duration> {
    match value {
        ConfigValue::Raw(raw) => match raw.parse::<u64>() {
            Ok(0) => None,
            Ok(secs) => Some(Duration::from_secs(secs)),
            Err(_) => {
                warn!("Config key 'command_timeout' expects whole seconds, got '{}'", raw);
                None
            }
        },
        ConfigValue::Bool(_) => None,
    }
}
