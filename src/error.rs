//! Error types for project-init.
//!
//! All operations return `Result<T>` which aliases `Result<T, InitError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from project initialization.
#[derive(Debug, Error)]
pub enum InitError {
    /// Package name is not a valid identifier.
    #[error("Invalid package name '{0}': {1}")]
    InvalidName(String, String),

    /// Target package directory is already present.
    #[error("Target package directory already exists: {0}")]
    AlreadyExists(PathBuf),

    /// A file that would be created is already on disk.
    #[error("Refusing to overwrite existing file: {0}")]
    RefuseOverwrite(PathBuf),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Regex compilation failed (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for project-init operations.
pub type Result<T> = std::result::Result<T, InitError>;
