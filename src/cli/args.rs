// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{ArgAction, Parser};
use std::path::Path;

/// commit-guard - Conventional commit message validator
///
/// Validates a commit message file, piped input, or the given words.
#[derive(Parser, Debug)]
#[command(name = "commit-guard")]
#[command(author = "Eshan Roy")]
#[command(version, long_version = crate::version::long_version())]
#[command(about = "Conventional commit message validator", long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Commit message file, or the message words themselves
    #[arg(value_name = "COMMIT_MSG_FILE", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Show the commit message format guide
    #[arg(short = 'h', long, action = ArgAction::SetTrue)]
    pub help: bool,

    /// Treat warnings as failures
    #[arg(long, env = "COMMIT_GUARD_STRICT")]
    pub strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, value_enum, env = "COMMIT_GUARD_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

impl Cli {
    /// Whether the format guide was requested anywhere on the command line.
    pub fn wants_help(&self) -> bool {
        self.help || self.args.iter().any(|a| a == "--help" || a == "-h")
    }

    /// The first positional argument, if it names an existing file.
    pub fn message_file(&self) -> Option<&Path> {
        self.args
            .first()
            .map(Path::new)
            .filter(|path| path.is_file())
    }

    /// Positional arguments joined as a message.
    pub fn inline_message(&self) -> String {
        self.args.join(" ")
    }
}
