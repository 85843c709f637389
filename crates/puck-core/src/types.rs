//! Project metadata and per-invocation option types

use camino::Utf8Path;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};

/// Name of the metadata file written into every project directory
pub const METADATA_FILE: &str = "puck.json";

/// Timestamp layout used for `created_at`
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Persisted per-project record, written once at creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Project name (the directory name)
    pub name: String,
    /// Language identifier, normally one of the registered languages
    pub language: String,
    /// Resolved author
    pub author: String,
    /// Creation time, `YYYY-MM-DDTHH:MM:SSZ`
    pub created_at: String,
    /// Declared dependencies, empty at creation
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl ProjectMetadata {
    /// Create metadata stamped with the current UTC time
    pub fn new(
        name: impl Into<String>,
        language: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self::new_at(name, language, author, Utc::now())
    }

    /// Create metadata stamped with an explicit time
    pub fn new_at(
        name: impl Into<String>,
        language: impl Into<String>,
        author: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
            author: author.into(),
            created_at: created_at.format(TIMESTAMP_FORMAT).to_string(),
            dependencies: Vec::new(),
        }
    }

    /// Read `puck.json` from a project directory
    pub fn read(project_dir: &Utf8Path) -> Result<Self> {
        let path = project_dir.join(METADATA_FILE);
        let content = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::metadata_not_found(path.as_str())
            } else {
                Error::Io(e)
            }
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write `puck.json` into a project directory
    pub fn write(&self, project_dir: &Utf8Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(project_dir.join(METADATA_FILE), content + "\n")?;
        Ok(())
    }
}

/// Per-call overrides supplied on the command line; never persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvocationOptions {
    /// Skip the cheatsheet copy regardless of config
    pub no_cheatsheet: bool,
    /// Force git initialization on or off
    pub init_git: Option<bool>,
    /// Force Dockerfile generation on or off
    pub init_docker: Option<bool>,
}

impl InvocationOptions {
    /// Whether cheatsheets should be copied
    pub fn copy_cheatsheet(&self, config: &Config) -> bool {
        !self.no_cheatsheet && config.copy_cheatsheet
    }

    /// Whether a git repository should be initialized
    pub fn init_git(&self, config: &Config) -> bool {
        self.init_git.unwrap_or(config.init_git)
    }

    /// Whether a Dockerfile should be generated
    pub fn init_docker(&self, config: &Config) -> bool {
        self.init_docker.unwrap_or(config.init_docker)
    }
}
