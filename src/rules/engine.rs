// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation pipeline for commit messages.

use crate::commit::CommitMessage;

use super::builtin::{check_body_and_footer, check_content_quality, check_format, check_type_and_scope};
use super::validator::{ValidationIssue, ValidationResult};

/// Validator for commit messages.
///
/// Holds no state between calls, so a single instance can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self
    }

    /// Validate a commit message.
    ///
    /// A header that fails the format check stops the pipeline: only that
    /// stage's diagnostics are reported.
    pub fn validate_commit_message(&self, message: &str) -> ValidationResult {
        let mut result = ValidationResult::new();

        let Some(parsed) = CommitMessage::new(message) else {
            result.error(ValidationIssue::new("message-empty", "Commit message cannot be empty"));
            return result;
        };

        tracing::debug!(header = parsed.header(), lines = parsed.lines().len(), "validating commit message");

        let format_ok = check_format(&parsed, &mut result);
        let type_scope_ok = format_ok && check_type_and_scope(&parsed, &mut result);
        let body_footer_ok = format_ok && check_body_and_footer(&parsed, &mut result);
        let quality_ok = format_ok && check_content_quality(&parsed, &mut result);

        let passed = format_ok && type_scope_ok && body_footer_ok && quality_ok;
        debug_assert_eq!(passed, result.is_valid());

        tracing::debug!(summary = %result.summary(), "validation finished");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(message: &str) -> ValidationResult {
        Validator::new().validate_commit_message(message)
    }

    #[test]
    fn test_valid_commit_messages() {
        let messages = [
            "feat(cli): add complexity analysis command",
            "fix(watch): resolve file debouncing race condition",
            "docs(readme): update installation instructions",
            "style(ui): format display components",
            "refactor(processor): extract JSON parsing logic",
            "perf(cache): optimize result storage performance",
            "test(runner): add parallel execution tests",
            "build(deps): update Go dependencies",
            "ci(github): add automated quality checks",
            "chore(scripts): update development tools",
            "security(auth): fix potential vulnerability",
            "deps(go): update to Go 1.21",
            "revert: revert faulty cache eviction",
            "remove(ui): remove legacy icon set",
            "feat(api)!: remove deprecated endpoints",
            "fix(core)!: change interface signatures",
        ];

        for message in messages {
            let result = validate(message);
            assert!(result.is_valid(), "{message}: {:?}", result.errors);
        }
    }

    #[test]
    fn test_clean_message_has_no_warnings() {
        let result = validate("feat(cli): add complexity analysis command");
        assert!(result.is_valid());
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_invalid_commit_types() {
        let messages = [
            "feature: add new functionality",
            "bugfix: fix issue",
            "documentation: update docs",
            "update: change something",
            "invalid: not a real type",
        ];

        for message in messages {
            let result = validate(message);
            assert!(!result.is_valid(), "{message}");
            assert!(result.has_error_containing("Invalid header format"));
        }
    }

    #[test]
    fn test_invalid_format() {
        let messages = [
            "",
            "just text without format",
            "feat add something",
            "feat(): empty scope",
            "feat",
            "feat:",
            "feat: ",
        ];

        for message in messages {
            assert!(!validate(message).is_valid(), "{message:?}");
        }
    }

    #[test]
    fn test_empty_message() {
        for message in ["", "   ", "\n\n\t"] {
            let (is_valid, errors, warnings) = validate(message).into_parts();
            assert!(!is_valid);
            assert_eq!(errors, vec!["Commit message cannot be empty"]);
            assert!(warnings.is_empty());
        }
    }

    #[test]
    fn test_header_length_limits() {
        let result = validate(&format!("feat(cli): {}", "a".repeat(60)));
        assert!(result.is_valid());

        let result = validate(&format!("feat(cli): {}", "a".repeat(55)));
        assert!(result.is_valid());
        assert!(result.has_warning_containing("long"));

        let result = validate(&format!("feat(cli): {}", "a".repeat(70)));
        assert!(!result.is_valid());
        assert!(result.has_error_containing("too long"));
        assert_eq!(result.errors.len(), 1);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_format_failure_skips_later_stages() {
        let result = validate("Feature: Fix.\nno blank line");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, "header-format");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_scope_validation() {
        for scope in ["cli", "watch", "test", "processor", "ui", "config"] {
            let result = validate(&format!("feat({scope}): add new feature"));
            assert!(result.is_valid());
            assert!(!result.has_warning_containing("unknown scope"));
        }

        let result = validate("feat(unknown): add new feature");
        assert!(result.is_valid());
        assert!(result.has_warning_containing("unknown scope"));
    }

    #[test]
    fn test_description_validation() {
        let result = validate("feat(cli): Add new feature");
        assert!(result.is_valid());
        assert!(result.has_warning_containing("lowercase"));

        let result = validate("feat(cli): add new feature.");
        assert!(result.is_valid());
        assert!(result.has_warning_containing("period"));

        let result = validate("feat(cli): fix");
        assert!(result.is_valid());
        assert!(result.has_warning_containing("at least 10 characters"));
    }

    #[test]
    fn test_vague_descriptions() {
        for word in ["fix", "update", "change", "modify", "improve", "refactor", "cleanup"] {
            let result = validate(&format!("feat(cli): {word}"));
            assert!(result.is_valid());
            assert!(result.has_warning_containing("too vague"), "{word}");
        }
    }

    #[test]
    fn test_vague_and_short_together() {
        let (is_valid, errors, warnings) = validate("feat(cli): fix").into_parts();
        assert!(is_valid);
        assert!(errors.is_empty());
        assert!(warnings.iter().any(|w| w.contains("too vague")));
        assert!(warnings.iter().any(|w| w.contains("at least 10 characters")));
        assert!(!warnings.iter().any(|w| w.contains("imperative")));
    }

    #[test]
    fn test_breaking_change() {
        let result = validate("feat(api)!: remove deprecated endpoints");
        assert!(result.is_valid());
        assert!(result.has_warning_containing("breaking change"));
    }

    #[test]
    fn test_body_validation() {
        let message = "feat(cli): add complexity analysis\n\n\
                       Add support for analyzing code complexity.\n\
                       This helps identify areas that need refactoring.\n\n\
                       Closes #123";
        assert!(validate(message).is_valid());

        let message = "feat(cli): add complexity analysis\nThis should have a blank line above it.";
        let result = validate(message);
        assert!(!result.is_valid());
        assert!(result.has_error_containing("blank line"));
    }

    #[test]
    fn test_long_body_line_is_warning() {
        let message = format!("feat(cli): add complexity analysis\n\n{}", "word ".repeat(20));
        let result = validate(&message);
        assert!(result.is_valid());
        assert!(result.has_warning_containing("Line 3 too long"));
    }

    #[test]
    fn test_footers() {
        let message = "fix(core): resolve memory leak in processor\n\n\
                       The processor was not releasing memory.\n\n\
                       Fixes #456\n\
                       Co-authored-by: Jane Doe <jane@example.com>\n\
                       Signed-off-by: John Doe <john@example.com>";
        let result = validate(message);
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_type_is_case_insensitive() {
        let result = validate("FEAT(cli): add complexity analysis command");
        assert!(result.is_valid());
    }

    #[test]
    fn test_whitespace_description_is_valid_with_warnings() {
        let result = validate("feat:  \n\nbody text");
        assert!(result.is_valid());
        let warnings = result.warning_messages();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("at least 10 characters"));
        assert!(warnings[1].starts_with("Consider using imperative mood"));
    }

    #[test]
    fn test_case_folded_type_is_rejected() {
        let result = validate("\u{17f}ecurity: add thing here");
        assert!(!result.is_valid());
        assert!(result.has_error_containing("Invalid type"));
        assert!(!result.has_error_containing("Invalid header format"));
    }

    #[test]
    fn test_crlf_message() {
        let result = validate("fix(ui): resolve flicker on resize\r\n\r\nDetails here.\r\n");
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validator_is_reusable() {
        let validator = Validator::new();
        assert!(!validator.validate_commit_message("bad").is_valid());
        let result = validator.validate_commit_message("feat(cli): add complexity analysis command");
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_garbage_input_never_panics() {
        for message in ["\u{0}\u{1}\u{fffd}", "::::", "(scope): x", "feat(cli)!:", "🚀🚀🚀"] {
            let _ = validate(message);
        }
    }
}
