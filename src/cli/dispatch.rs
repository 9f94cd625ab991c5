// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command execution.

use crate::error::Result;
use crate::rules::Validator;
use console::style;
use std::io::Write;

use super::args::{Cli, OutputFormat};
use super::guide::format_guide;
use super::input::read_message;

/// How a run ended, mapped to the process exit code by `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The message passed (or help was shown).
    Passed,
    /// The message failed validation, or was missing.
    Failed,
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Passed => 0,
            Outcome::Failed => 1,
        }
    }
}

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<Outcome> {
    let mut stdout = std::io::stdout().lock();

    if cli.wants_help() {
        write!(stdout, "{}", format_guide())?;
        return Ok(Outcome::Passed);
    }

    let (source, message) = read_message(&cli)?;
    tracing::debug!(?source, bytes = message.len(), "commit message loaded");

    let result = Validator::new().validate_commit_message(&message);

    if cli.format == OutputFormat::Json {
        writeln!(stdout, "{}", result.render_json())?;
    } else if message.trim().is_empty() {
        writeln!(
            stdout,
            "{} No commit message provided",
            style("❌ Error:").red().bold()
        )?;
        writeln!(stdout, "\nUse --help for format guide")?;
    } else {
        write!(stdout, "{}", result.render_text(cli.strict))?;
    }

    let failed = !result.is_valid() || (cli.strict && !result.warnings.is_empty());
    tracing::debug!(summary = %result.summary(), strict = cli.strict, "run finished");

    Ok(if failed {
        Outcome::Failed
    } else {
        Outcome::Passed
    })
}
