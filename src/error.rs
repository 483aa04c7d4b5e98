//! Error types for runtrail operations.
//!
//! This module defines [`RuntrailError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `RuntrailError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `RuntrailError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for runtrail operations.
#[derive(Debug, Error)]
pub enum RuntrailError {
    /// The file is not a usable registry hive.
    #[error("Invalid registry hive: {message}")]
    InvalidHive { message: String },

    /// A registry key path could not be found in the hive.
    #[error("Registry key not found: {path}")]
    KeyNotFound { path: String },

    /// A prompt was required but the session cannot ask questions.
    #[error("Cannot prompt for {prompt} in non-interactive mode; pass it on the command line")]
    NonInteractivePrompt { prompt: String },

    /// Output file extension does not map to a known report format.
    #[error("Cannot infer report format from '{path}': use a .json, .yaml, or .yml extension, or pass --format")]
    UnrecognizedExtension { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for runtrail operations.
pub type Result<T> = std::result::Result<T, RuntrailError>;
