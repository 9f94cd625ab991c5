// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation stages.
//!
//! Each stage records its diagnostics into the shared result and returns
//! whether it passed structurally. A stage only fails by recording an error.

use crate::commit::{CommitMessage, Footer};

use super::tables::{
    is_known_scope, scope_list, CommitType, IMPERATIVE_VERBS, MAX_BODY_LINE_LENGTH,
    MAX_HEADER_LENGTH, MIN_DESCRIPTION_LENGTH, RECOMMENDED_HEADER_LENGTH, VAGUE_WORDS,
};
use super::validator::{ValidationIssue, ValidationResult};

/// Check header length and structure.
pub fn check_format(message: &CommitMessage<'_>, result: &mut ValidationResult) -> bool {
    let header = message.header();
    let len = message.header_len();

    if len > MAX_HEADER_LENGTH {
        result.error(
            ValidationIssue::new(
                "header-too-long",
                format!("Header too long: {} chars (max: {})", len, MAX_HEADER_LENGTH),
            )
            .at_line(1),
        );
        return false;
    } else if len > RECOMMENDED_HEADER_LENGTH {
        result.warn(
            ValidationIssue::new(
                "header-long",
                format!(
                    "Header long: {} chars (recommended: ≤{})",
                    len, RECOMMENDED_HEADER_LENGTH
                ),
            )
            .at_line(1),
        );
    }

    if message.parse_header().is_none() {
        result.error(
            ValidationIssue::new(
                "header-format",
                format!(
                    "Invalid header format: '{}'\n\
                     Expected: type(scope): description\n\
                     Valid types: {}\n\
                     Valid scopes: {}",
                    header,
                    CommitType::list(),
                    scope_list()
                ),
            )
            .at_line(1),
        );
        return false;
    }

    true
}

/// Check the type, scope and description fields of the header.
pub fn check_type_and_scope(message: &CommitMessage<'_>, result: &mut ValidationResult) -> bool {
    let Some(parsed) = message.parse_header() else {
        return false;
    };

    if parsed.commit_type.parse::<CommitType>().is_err() {
        result.error(
            ValidationIssue::new(
                "type-invalid",
                format!(
                    "Invalid type '{}'. Valid types: {}",
                    parsed.commit_type,
                    CommitType::list()
                ),
            )
            .at_line(1),
        );
        return false;
    }

    if let Some(scope) = parsed.scope {
        if !is_known_scope(scope) {
            result.warn(
                ValidationIssue::new(
                    "scope-unknown",
                    format!("Unknown scope '{}'. Consider using: {}", scope, scope_list()),
                )
                .at_line(1),
            );
        }
    }

    let description = parsed.description;
    if description.is_empty() {
        result.error(ValidationIssue::new("description-empty", "Description cannot be empty").at_line(1));
        return false;
    }

    if description.chars().next().is_some_and(char::is_uppercase) {
        result.warn(
            ValidationIssue::new(
                "description-case",
                "Description should start with lowercase letter",
            )
            .at_line(1),
        );
    }

    if description.ends_with('.') {
        result.warn(
            ValidationIssue::new(
                "description-trailing-period",
                "Description should not end with a period",
            )
            .at_line(1),
        );
    }

    if parsed.breaking {
        result.warn(
            ValidationIssue::new(
                "breaking-change",
                "Breaking change detected - ensure CHANGELOG.md is updated",
            )
            .at_line(1),
        );
    }

    true
}

/// Check header/body separation and body line lengths.
///
/// Footers are recognized but accepted either way.
pub fn check_body_and_footer(message: &CommitMessage<'_>, result: &mut ValidationResult) -> bool {
    if !message.has_body() {
        return true;
    }

    let lines = message.lines();
    if !lines[1].trim().is_empty() {
        result.error(
            ValidationIssue::new(
                "body-separator",
                "There must be a blank line between header and body",
            )
            .at_line(2),
        );
        return false;
    }

    for (index, line) in lines.iter().enumerate().skip(2) {
        let line_no = index + 1;
        let len = line.chars().count();
        if len > MAX_BODY_LINE_LENGTH {
            result.warn(
                ValidationIssue::new(
                    "body-line-too-long",
                    format!(
                        "Line {} too long: {} chars (recommended: ≤{})",
                        line_no, len, MAX_BODY_LINE_LENGTH
                    ),
                )
                .at_line(line_no),
            );
        }
    }

    for (index, line) in lines.iter().enumerate() {
        if let Some(footer) = Footer::parse(line) {
            tracing::debug!(line = index + 1, ?footer, "recognized footer");
        }
    }

    true
}

/// Heuristics on how informative the description is.
pub fn check_content_quality(message: &CommitMessage<'_>, result: &mut ValidationResult) -> bool {
    let Some(description) = message.raw_description() else {
        return false;
    };

    let lower = description.to_lowercase();
    if VAGUE_WORDS.contains(&lower.as_str()) {
        result.warn(
            ValidationIssue::new(
                "description-vague",
                format!(
                    "Description '{}' is too vague. Be more specific about what was changed.",
                    description
                ),
            )
            .at_line(1),
        );
    }

    if description.chars().count() < MIN_DESCRIPTION_LENGTH {
        result.warn(
            ValidationIssue::new(
                "description-short",
                format!(
                    "Description should be at least {} characters for clarity",
                    MIN_DESCRIPTION_LENGTH
                ),
            )
            .at_line(1),
        );
    }

    let first_word = description
        .split_whitespace()
        .next()
        .map(str::to_lowercase)
        .unwrap_or_default();
    if !IMPERATIVE_VERBS.contains(&first_word.as_str()) {
        result.warn(
            ValidationIssue::new(
                "description-mood",
                format!(
                    "Consider using imperative mood: '{}' → 'add ...', 'fix ...', etc.",
                    description
                ),
            )
            .at_line(1),
        );
    }

    true
}
