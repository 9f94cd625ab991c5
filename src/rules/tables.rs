// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Fixed rule tables.
//!
//! Everything here is compiled in. There is no runtime configuration of the
//! rule set.

use serde::Serialize;

/// Conventional commit types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Build,
    Ci,
    Chore,
    Revert,
    Security,
    Deps,
    Remove,
}

impl CommitType {
    /// Get the string representation of the commit type.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Build => "build",
            CommitType::Ci => "ci",
            CommitType::Chore => "chore",
            CommitType::Revert => "revert",
            CommitType::Security => "security",
            CommitType::Deps => "deps",
            CommitType::Remove => "remove",
        }
    }

    /// Get a short description of the commit type.
    pub fn description(&self) -> &'static str {
        match self {
            CommitType::Feat => "A new feature",
            CommitType::Fix => "A bug fix",
            CommitType::Docs => "Documentation only changes",
            CommitType::Style => "Changes that do not affect the meaning of the code",
            CommitType::Refactor => "A code change that neither fixes a bug nor adds a feature",
            CommitType::Perf => "A code change that improves performance",
            CommitType::Test => "Adding missing tests or correcting existing tests",
            CommitType::Build => "Changes that affect the build system or external dependencies",
            CommitType::Ci => "Changes to our CI configuration files and scripts",
            CommitType::Chore => "Other changes that don't modify src or test files",
            CommitType::Revert => "Reverts a previous commit",
            CommitType::Security => "Security improvements",
            CommitType::Deps => "Dependency updates",
            CommitType::Remove => "Remove features or code",
        }
    }

    /// Get all commit types, in the order they are presented to users.
    pub fn all() -> &'static [CommitType] {
        &[
            CommitType::Feat,
            CommitType::Fix,
            CommitType::Docs,
            CommitType::Style,
            CommitType::Refactor,
            CommitType::Perf,
            CommitType::Test,
            CommitType::Build,
            CommitType::Ci,
            CommitType::Chore,
            CommitType::Revert,
            CommitType::Security,
            CommitType::Deps,
            CommitType::Remove,
        ]
    }

    /// Comma-separated list of every type token.
    pub fn list() -> String {
        Self::all()
            .iter()
            .map(CommitType::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::str::FromStr for CommitType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        CommitType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == lower)
            .ok_or(())
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recognized scopes. Kept sorted so it can be listed and binary searched.
pub const VALID_SCOPES: &[&str] = &[
    "app",
    "benchmarks",
    "cache",
    "ci",
    "cli",
    "colors",
    "complexity",
    "config",
    "coordinator",
    "core",
    "debouncer",
    "deps",
    "display",
    "docs",
    "events",
    "hooks",
    "icons",
    "integration",
    "makefile",
    "metrics",
    "models",
    "performance",
    "processor",
    "quality",
    "recovery",
    "renderer",
    "runner",
    "scripts",
    "security",
    "test",
    "ui",
    "watch",
    "watcher",
];

/// Whether `scope` is one of the recognized scopes.
pub fn is_known_scope(scope: &str) -> bool {
    VALID_SCOPES.binary_search(&scope).is_ok()
}

/// Comma-separated list of every recognized scope.
pub fn scope_list() -> String {
    VALID_SCOPES.join(", ")
}

/// Descriptions that say nothing on their own.
pub const VAGUE_WORDS: &[&str] = &[
    "fix", "update", "change", "modify", "improve", "refactor", "cleanup",
];

/// Verbs accepted as the first word of an imperative description.
pub const IMPERATIVE_VERBS: &[&str] = &[
    "add",
    "fix",
    "remove",
    "update",
    "improve",
    "refactor",
    "implement",
    "create",
    "delete",
    "enhance",
    "optimize",
    "clean",
    "extract",
    "rename",
    "move",
    "split",
    "merge",
    "integrate",
    "configure",
    "resolve",
    "install",
    "setup",
    "build",
    "deploy",
    "release",
];

/// Maximum header length before the message is rejected.
pub const MAX_HEADER_LENGTH: usize = 72;

/// Header length above which a warning is emitted.
pub const RECOMMENDED_HEADER_LENGTH: usize = 50;

/// Maximum recommended body line length.
pub const MAX_BODY_LINE_LENGTH: usize = 72;

/// Minimum recommended description length.
pub const MIN_DESCRIPTION_LENGTH: usize = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_type_from_str() {
        assert_eq!("feat".parse::<CommitType>(), Ok(CommitType::Feat));
        assert_eq!("FIX".parse::<CommitType>(), Ok(CommitType::Fix));
        assert_eq!("Security".parse::<CommitType>(), Ok(CommitType::Security));
        assert!("feature".parse::<CommitType>().is_err());
        assert!("wip".parse::<CommitType>().is_err());
    }

    #[test]
    fn test_commit_type_display() {
        assert_eq!(CommitType::Feat.to_string(), "feat");
        assert_eq!(CommitType::Remove.to_string(), "remove");
    }

    #[test]
    fn test_fourteen_types() {
        assert_eq!(CommitType::all().len(), 14);
        assert!(CommitType::list().starts_with("feat, fix, docs"));
    }

    #[test]
    fn test_scopes_sorted() {
        let mut sorted = VALID_SCOPES.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, VALID_SCOPES);
        assert!(is_known_scope("cli"));
        assert!(is_known_scope("watcher"));
        assert!(!is_known_scope("readme"));
    }
}
