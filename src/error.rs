//! Error types for update checks.
//!
//! This module defines [`UpdateError`], the error type returned by every
//! fallible operation in the crate, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - A missing or corrupt cache is not an error; it loads as an empty cache
//! - Fetch, parse and version errors abort a check before the cache is touched
//! - Use `anyhow::Error` (via `UpdateError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for update checks.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// The manifest could not be retrieved (I/O, DNS, timeout, HTTP status).
    #[error("Update source unreachable: {location}: {message}")]
    SourceUnreachable { location: String, message: String },

    /// The manifest was retrieved but is not a usable mapping of records.
    #[error("No valid data in update source {location}: {message}")]
    SourceInvalid { location: String, message: String },

    /// The manifest location uses a scheme we cannot fetch.
    #[error("Unsupported update source: {location}")]
    UnsupportedSource { location: String },

    /// The manifest is valid but has no entry for the application.
    #[error("No entry for '{app}' in update source {location}")]
    AppNotInManifest { app: String, location: String },

    /// A version string is not dotted-numeric.
    #[error("Invalid version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    /// The cache could not be serialized or written.
    #[error("Failed to write cache {path}: {message}")]
    CacheWrite { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for update checks.
pub type Result<T> = std::result::Result<T, UpdateError>;
