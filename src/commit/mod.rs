// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message splitting and header parsing.

mod message;

pub use message::{CommitMessage, Footer, ParsedHeader};
