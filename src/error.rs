//! Error types for fyne-doctor operations.
//!
//! This module defines [`DoctorError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probe failures (`ProbeTimedOut`, `ProbeExecutionFailed`) never abort a run;
//!   the checker folds them into a dependency status
//! - Configuration and I/O errors are the only ones that reach `main`
//! - Use `anyhow::Error` (via `DoctorError::Other`) for unexpected errors

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Core error type for fyne-doctor operations.
#[derive(Debug, Error)]
pub enum DoctorError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A category name that is not part of the catalog.
    #[error("Unknown category '{name}' (expected one of: core, mobile, web, performance, compatibility)")]
    InvalidCategory { name: String },

    /// A probe command did not finish within its time budget.
    #[error("Probe '{command}' timed out after {}s", timeout.as_secs())]
    ProbeTimedOut { command: String, timeout: Duration },

    /// A probe command could not be started or exited unsuccessfully.
    #[error("Probe '{command}' failed: {message}")]
    ProbeExecutionFailed { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for fyne-doctor operations.
pub type Result<T> = std::result::Result<T, DoctorError>;
