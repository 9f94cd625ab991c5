// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use console::style;
use serde::Serialize;

/// A single validation issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Stable code for programmatic handling.
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
    /// 1-based line the issue refers to, if any.
    pub line: Option<usize>,
}

impl ValidationIssue {
    /// Create an issue without a line reference.
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            line: None,
        }
    }

    /// Attach a line number.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of validating a commit message.
///
/// Errors make the message invalid; warnings are advisory only.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationResult {
    /// Validation errors, in the order they were found.
    pub errors: Vec<ValidationIssue>,
    /// Validation warnings, in the order they were found.
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create an empty validation result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record an error.
    pub fn error(&mut self, issue: ValidationIssue) {
        tracing::debug!(code = issue.code, "error: {}", issue.message);
        self.errors.push(issue);
    }

    /// Record a warning.
    pub fn warn(&mut self, issue: ValidationIssue) {
        tracing::debug!(code = issue.code, "warning: {}", issue.message);
        self.warnings.push(issue);
    }

    /// Error messages, in order.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }

    /// Warning messages, in order.
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(|w| w.message.clone()).collect()
    }

    /// Consume the result as `(is_valid, errors, warnings)`.
    pub fn into_parts(self) -> (bool, Vec<String>, Vec<String>) {
        let is_valid = self.is_valid();
        let errors = self.errors.into_iter().map(|e| e.message).collect();
        let warnings = self.warnings.into_iter().map(|w| w.message).collect();
        (is_valid, errors, warnings)
    }

    /// Whether any error message contains `needle`, ignoring case.
    pub fn has_error_containing(&self, needle: &str) -> bool {
        contains_ignore_case(&self.errors, needle)
    }

    /// Whether any warning message contains `needle`, ignoring case.
    pub fn has_warning_containing(&self, needle: &str) -> bool {
        contains_ignore_case(&self.warnings, needle)
    }

    /// Render the human-readable report.
    ///
    /// `strict` turns warnings into a failure for the closing line only;
    /// the validity of the message itself is unchanged.
    pub fn render_text(&self, strict: bool) -> String {
        if self.is_valid() && self.warnings.is_empty() {
            return format!("{} Commit message format is valid\n", style("✅").green());
        }

        let mut out = String::new();
        out.push_str(&format!(
            "{}\n",
            style("📝 Commit Message Validation Results").bold()
        ));
        out.push_str(&"=".repeat(50));
        out.push('\n');

        if !self.errors.is_empty() {
            out.push_str(&format!("\n{}\n", style("❌ ERRORS (must fix):").red().bold()));
            for error in &self.errors {
                out.push_str(&format!("  • {}\n", error));
            }
        }

        if !self.warnings.is_empty() {
            out.push_str(&format!(
                "\n{}\n",
                style("⚠️  WARNINGS (recommended fixes):").yellow().bold()
            ));
            for warning in &self.warnings {
                out.push_str(&format!("  • {}\n", warning));
            }
        }

        if !self.is_valid() {
            out.push_str(&format!(
                "\n{}\n",
                style("❌ Commit message validation failed").red()
            ));
            out.push_str("\nUse --help for format guide\n");
        } else if strict {
            out.push_str(&format!(
                "\n{}\n",
                style("❌ Commit message has warnings (strict mode)").red()
            ));
            out.push_str("\nUse --help for format guide\n");
        } else {
            out.push_str(&format!(
                "\n{}\n",
                style("✅ Commit message is valid (with warnings)").green()
            ));
        }

        out
    }

    /// Render the result as pretty-printed JSON.
    pub fn render_json(&self) -> String {
        let json = serde_json::json!({
            "valid": self.is_valid(),
            "errors": self.errors,
            "warnings": self.warnings,
        });

        serde_json::to_string_pretty(&json).unwrap_or_default()
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            if self.warnings.is_empty() {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", self.warnings.len())
            }
        } else {
            format!(
                "Invalid ({} errors, {} warnings)",
                self.errors.len(),
                self.warnings.len()
            )
        }
    }
}

fn contains_ignore_case(issues: &[ValidationIssue], needle: &str) -> bool {
    let needle = needle.to_lowercase();
    issues
        .iter()
        .any(|issue| issue.message.to_lowercase().contains(&needle))
}
