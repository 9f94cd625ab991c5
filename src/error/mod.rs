// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commit-guard.
//!
//! Validation itself never fails; a bad message is reported through
//! [`crate::rules::ValidationResult`]. These errors cover the process around
//! it, mostly reading the message.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commit-guard operations.
#[derive(Error, Debug)]
pub enum GuardError {
    // Reading a named message file failed
    #[error("Failed to read commit message from {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Result type alias for commit-guard operations.
pub type Result<T> = std::result::Result<T, GuardError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| GuardError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
