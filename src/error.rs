//! Error types for stagehand operations.
//!
//! This module defines [`StagehandError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `StagehandError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `StagehandError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for stagehand operations.
#[derive(Debug, Error)]
pub enum StagehandError {
    /// A required host tool is not resolvable on PATH.
    #[error("'{tool}' was not found on PATH. {hint}")]
    ToolMissing { tool: String, hint: String },

    /// The dependency manifest file does not exist.
    #[error("Dependency manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// The application entry file does not exist.
    #[error("App entry file not found: {path}")]
    EntryNotFound { path: PathBuf },

    /// Configuration file could not be parsed.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// An external command exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A template references a variable with no value.
    #[error("Template '{template}' references undefined variable '{variable}'")]
    UndefinedTemplateVariable { template: String, variable: String },

    /// Refusing to overwrite an existing file without --force.
    #[error("Refusing to overwrite existing file: {path} (use --force)")]
    WouldOverwrite { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for stagehand operations.
pub type Result<T> = std::result::Result<T, StagehandError>;
