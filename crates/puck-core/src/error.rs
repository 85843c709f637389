//! Error types for puck-core

use thiserror::Error;

/// Result type alias using puck-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for puck
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file already present
    #[error("Configuration file already exists: {path}")]
    ConfigExists { path: String },

    /// Metadata file missing from a project directory
    #[error("Project metadata not found: {path}")]
    MetadataNotFound { path: String },

    /// Could not work out a filesystem location
    #[error("Could not determine {what}")]
    PathUnavailable { what: String },

    /// Path is not valid UTF-8
    #[error("Path is not valid UTF-8: {path}")]
    NonUtf8Path { path: String },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config exists error
    pub fn config_exists(path: impl Into<String>) -> Self {
        Self::ConfigExists { path: path.into() }
    }

    /// Create a metadata not found error
    pub fn metadata_not_found(path: impl Into<String>) -> Self {
        Self::MetadataNotFound { path: path.into() }
    }

    /// Create a path unavailable error
    pub fn path_unavailable(what: impl Into<String>) -> Self {
        Self::PathUnavailable { what: what.into() }
    }

    /// Create a non-UTF-8 path error
    pub fn non_utf8_path(path: impl Into<String>) -> Self {
        Self::NonUtf8Path { path: path.into() }
    }
}
