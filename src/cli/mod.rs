// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for commit-guard.
//!
//! This module handles argument parsing, locating the message and printing
//! the report.

pub mod args;
mod dispatch;
mod guide;
pub mod input;

pub use args::{Cli, OutputFormat};
pub use dispatch::{run, Outcome};
pub use guide::format_guide;
