// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Resolving where the commit message comes from.

use crate::error::{GuardError, Result, ResultExt};
use std::fs;
use std::io::{IsTerminal, Read};
use std::path::Path;

use super::args::Cli;

/// Where a message was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    /// A commit message file, as passed by a `commit-msg` hook.
    File(std::path::PathBuf),
    /// Piped standard input.
    Stdin,
    /// The command-line words joined with spaces.
    Arguments,
}

/// Read the commit message for this invocation.
///
/// An existing file argument wins. Without arguments, piped stdin is read.
/// Otherwise the arguments themselves are the message, so a file argument
/// that does not exist is not an error.
pub fn read_message(cli: &Cli) -> Result<(MessageSource, String)> {
    let stdin = std::io::stdin();
    let piped = !stdin.is_terminal();
    read_message_from(cli, piped, stdin.lock())
}

/// Same as [`read_message`], with the stdin handle and its tty state supplied.
pub fn read_message_from<R: Read>(
    cli: &Cli,
    stdin_piped: bool,
    mut stdin: R,
) -> Result<(MessageSource, String)> {
    if let Some(path) = cli.message_file() {
        tracing::debug!(path = %path.display(), "reading commit message file");
        return Ok((MessageSource::File(path.to_path_buf()), read_file(path)?));
    }

    if cli.args.is_empty() && stdin_piped {
        tracing::debug!("reading commit message from stdin");
        let mut bytes = Vec::new();
        stdin
            .read_to_end(&mut bytes)
            .context("Failed to read commit message from stdin")?;
        return Ok((
            MessageSource::Stdin,
            String::from_utf8_lossy(&bytes).into_owned(),
        ));
    }

    tracing::debug!(count = cli.args.len(), "using command-line arguments as message");
    Ok((MessageSource::Arguments, cli.inline_message()))
}

fn read_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| GuardError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
