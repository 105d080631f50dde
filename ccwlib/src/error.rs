//! Error types for ccwlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or compiling a workspace config
#[derive(Error, Debug)]
pub enum CcwError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML config could not be parsed or has the wrong shape
    #[error("invalid workspace config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Ignore spec references a category that is not in the built-in catalog
    #[error("unknown ignore category '{name}' (known categories: {known})")]
    UnknownCategory { name: String, known: String },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Description template references a placeholder with no value
    #[error("unresolvable placeholder '{{{placeholder}}}' in description '{template}'")]
    Render {
        placeholder: String,
        template: String,
    },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Explicit path points outside the project root
    #[error("path escapes project root: {0}")]
    OutsideRoot(PathBuf),

    /// Output document could not be serialized
    #[error("failed to serialize workspace document: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
