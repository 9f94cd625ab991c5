// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The commit message format guide shown for `--help`.

use crate::rules::{CommitType, MAX_BODY_LINE_LENGTH};

/// Scopes shown in the guide. The full list is in every scope warning.
const COMMON_SCOPES: &[&str] = &[
    "cli", "watch", "test", "processor", "runner", "cache", "ui", "display", "colors", "config",
    "app", "events", "models", "metrics", "complexity",
];

/// Render the format guide.
pub fn format_guide() -> String {
    let mut out = String::from("\n🔍 Commit Message Format Guide\n\nFormat: type(scope): description\n\nValid Types:\n");

    let width = CommitType::all()
        .iter()
        .map(|t| t.as_str().len())
        .max()
        .unwrap_or(0);
    for commit_type in CommitType::all() {
        out.push_str(&format!(
            "  {:<width$} - {}\n",
            commit_type.as_str(),
            commit_type.description(),
        ));
    }

    out.push_str("\nCommon Scopes:\n");
    for chunk in COMMON_SCOPES.chunks(8) {
        out.push_str(&format!("  {}\n", chunk.join(", ")));
    }

    out.push_str(&format!(
        "
Examples:
  ✅ feat(cli): add complexity analysis command
  ✅ fix(watch): resolve file debouncing race condition
  ✅ docs(readme): update installation instructions
  ✅ test(processor): add integration tests for JSON parsing
  ✅ refactor(ui): extract color formatting to separate package

Breaking Changes:
  feat(api)!: remove deprecated endpoints

Body (optional):
  - Separate from the header with a blank line
  - Use imperative mood
  - Explain why, not what
  - Keep lines ≤{MAX_BODY_LINE_LENGTH} characters

Footer (optional):
  Closes #123
  BREAKING CHANGE: API endpoints changed
"
    ));

    out
}
