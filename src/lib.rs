// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-guard - Conventional Commit Message Validator
//!
//! Checks commit messages against a fixed conventional-commits rule set,
//! for use in a `commit-msg` hook or CI.
//!
//! # Checks
//!
//! - **Header format**: `type(scope)!: description` with a closed set of types
//! - **Fields**: known scopes, description casing and punctuation
//! - **Body**: blank line after the header, line lengths, footer trailers
//! - **Quality**: vague descriptions, short descriptions, imperative mood
//!
//! # Example
//!
//! ```
//! use commit_guard::rules::Validator;
//!
//! let result = Validator::new().validate_commit_message("feat(cli): add complexity analysis command");
//! assert!(result.is_valid());
//! assert!(result.warnings.is_empty());
//!
//! let (is_valid, errors, _warnings) = Validator::new()
//!     .validate_commit_message("feature: add new functionality")
//!     .into_parts();
//! assert!(!is_valid);
//! assert!(errors[0].starts_with("Invalid header format"));
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod error;
pub mod rules;

// Re-exports for convenience
pub use error::{GuardError, Result};
pub use rules::{ValidationResult, Validator};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commit-guard.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    lazy_static::lazy_static! {
        static ref LONG_VERSION: String = version_string();
    }

    /// Version string including build metadata, for `--version`.
    pub fn long_version() -> &'static str {
        LONG_VERSION.as_str()
    }

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
