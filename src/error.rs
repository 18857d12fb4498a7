//! Error types for depcheck operations.
//!
//! This module defines [`DepcheckError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Per-requirement failures (parse, version query, install) propagate
//!   with `?` and abort the current reconciliation pass
//! - The preflight boundary catches them once and reports a remediation hint
//! - Use `anyhow::Error` (via `DepcheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for depcheck operations.
#[derive(Debug, Error)]
pub enum DepcheckError {
    /// A requirement line could not be parsed.
    #[error("Malformed requirement '{line}': {message}")]
    MalformedRequirement { line: String, message: String },

    /// A version string could not be parsed.
    #[error("Malformed version: '{version}'")]
    MalformedVersion { version: String },

    /// The installed version of a package could not be interpreted.
    #[error("Could not determine installed version of '{package}': {message}")]
    VersionQuery { package: String, message: String },

    /// The package metadata query could not run at all.
    #[error("Package metadata unavailable for '{package}': {message}")]
    PackageMetadataUnavailable { package: String, message: String },

    /// The install primitive reported failure.
    #[error("Install failed with exit code {code:?}: {requirement}")]
    InstallFailed {
        requirement: String,
        code: Option<i32>,
    },

    /// The uninstall primitive reported failure.
    #[error("Uninstall failed with exit code {code:?}: {packages}")]
    UninstallFailed { packages: String, code: Option<i32> },

    /// A process could not be started.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A requirement list file could not be read.
    #[error("Cannot read requirement list {path}: {message}")]
    RequirementListUnreadable { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for depcheck operations.
pub type Result<T> = std::result::Result<T, DepcheckError>;
