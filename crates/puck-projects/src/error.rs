//! Error types for puck-projects

use thiserror::Error;

/// Result type alias using puck-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Project lifecycle error types
#[derive(Error, Debug)]
pub enum Error {
    /// Project already exists
    #[error("Project already exists at: {path}")]
    ProjectExists { path: String },

    /// Project directory missing
    #[error("No such project: {name}")]
    ProjectNotFound { name: String },

    /// Invalid project name
    #[error("Invalid project name: '{name}'. Use a plain directory name")]
    InvalidProjectName { name: String },

    /// Language not in the registry
    #[error("Unknown language: {language}. Available languages: {available}")]
    UnknownLanguage { language: String, available: String },

    /// Neither metadata nor a signature file identified the project
    #[error("No project descriptor found for '{name}' (no {metadata} and no recognizable source files)")]
    NoProjectDescriptor { name: String, metadata: String },

    /// Refused to delete a dangerous path
    #[error("Refusing to delete '{name}'")]
    UnsafeDeleteTarget { name: String },

    /// Some entries survived deletion
    #[error("Could not delete {failed} path(s) under {path}")]
    DeletionPartialFailure { path: String, failed: usize },

    /// The language's project initializer failed
    #[error("Failed to scaffold {language} project: {message}")]
    ScaffoldFailed { language: String, message: String },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Core library error
    #[error("Core error: {0}")]
    Core(#[from] puck_core::Error),
}

impl Error {
    /// Create a project exists error
    pub fn project_exists(path: impl Into<String>) -> Self {
        Self::ProjectExists { path: path.into() }
    }

    /// Create a project not found error
    pub fn project_not_found(name: impl Into<String>) -> Self {
        Self::ProjectNotFound { name: name.into() }
    }

    /// Create an invalid project name error
    pub fn invalid_project_name(name: impl Into<String>) -> Self {
        Self::InvalidProjectName { name: name.into() }
    }

    /// Create an unknown language error
    pub fn unknown_language(language: impl Into<String>, available: impl Into<String>) -> Self {
        Self::UnknownLanguage {
            language: language.into(),
            available: available.into(),
        }
    }

    /// Create a no project descriptor error
    pub fn no_project_descriptor(name: impl Into<String>) -> Self {
        Self::NoProjectDescriptor {
            name: name.into(),
            metadata: puck_core::METADATA_FILE.to_string(),
        }
    }

    /// Create an unsafe delete target error
    pub fn unsafe_delete_target(name: impl Into<String>) -> Self {
        Self::UnsafeDeleteTarget { name: name.into() }
    }

    /// Create a partial deletion error
    pub fn deletion_partial_failure(path: impl Into<String>, failed: usize) -> Self {
        Self::DeletionPartialFailure {
            path: path.into(),
            failed,
        }
    }

    /// Create a scaffold failed error
    pub fn scaffold_failed(language: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ScaffoldFailed {
            language: language.into(),
            message: message.into(),
        }
    }
}
