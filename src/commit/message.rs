// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.

use crate::rules::CommitType;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Structural matcher for a conventional commit header.
    ///
    /// The type alternation is generated from [`CommitType::all`], so the
    /// format check and field extraction can never disagree on the type set.
    static ref HEADER_REGEX: Regex = {
        let types = CommitType::all()
            .iter()
            .map(CommitType::as_str)
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(
            r"^(?P<type>(?i:{types}))(?:\((?P<scope>[a-z-]+)\))?(?P<breaking>!)?: (?P<description>.+)"
        ))
        .expect("header regex is valid")
    };

    /// Trailer lines recognized in a commit body.
    static ref FOOTER_REGEX: Regex = Regex::new(
        r"^(?:(?P<issue>Closes|Fixes|Resolves|Refs) #(?P<number>\d+)|(?P<trailer>BREAKING CHANGE|Co-authored-by|Signed-off-by):)"
    )
    .expect("footer regex is valid");
}

/// A commit message split into its header and remaining lines.
///
/// The text is trimmed before splitting, so the header is the first line of
/// meaningful content.
#[derive(Debug, Clone)]
pub struct CommitMessage<'a> {
    lines: Vec<&'a str>,
}

impl<'a> CommitMessage<'a> {
    /// Split a raw message. Returns `None` if nothing but whitespace remains.
    pub fn new(raw: &'a str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        Some(Self {
            lines: trimmed.lines().collect(),
        })
    }

    /// Get the first line (header) of the commit message.
    pub fn header(&self) -> &'a str {
        self.lines[0]
    }

    /// Get the header length in characters.
    pub fn header_len(&self) -> usize {
        self.header().chars().count()
    }

    /// All lines, header included.
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// Lines after the header, separator line included.
    pub fn body_lines(&self) -> &[&'a str] {
        &self.lines[1..]
    }

    /// Whether anything follows the header.
    pub fn has_body(&self) -> bool {
        self.lines.len() > 1
    }

    /// Parse the header with the structural matcher.
    pub fn parse_header(&self) -> Option<ParsedHeader<'a>> {
        ParsedHeader::parse(self.header())
    }

    /// Description text following the first `": "` of the header, trimmed.
    pub fn raw_description(&self) -> Option<&'a str> {
        let header = self.header();
        header.find(": ").map(|pos| header[pos + 2..].trim())
    }
}

/// Fields extracted from a well-formed header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader<'a> {
    /// Type token, lowercased.
    pub commit_type: String,
    /// Optional scope.
    pub scope: Option<&'a str>,
    /// Whether `!` precedes the colon.
    pub breaking: bool,
    /// Everything after `": "`, untrimmed.
    pub description: &'a str,
}

impl<'a> ParsedHeader<'a> {
    /// Match a header line. Returns `None` when it is not structurally valid.
    pub fn parse(header: &'a str) -> Option<Self> {
        let captures = HEADER_REGEX.captures(header)?;

        Some(Self {
            commit_type: captures.name("type")?.as_str().to_lowercase(),
            scope: captures.name("scope").map(|m| m.as_str()),
            breaking: captures.name("breaking").is_some(),
            description: captures.name("description")?.as_str(),
        })
    }
}

/// A recognized footer line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Footer<'a> {
    /// `Closes #N`, `Fixes #N`, `Resolves #N` or `Refs #N`.
    IssueReference { keyword: &'a str, number: u64 },
    /// `BREAKING CHANGE:`, `Co-authored-by:` or `Signed-off-by:`.
    Trailer { token: &'a str },
}

impl<'a> Footer<'a> {
    /// Recognize a footer at the start of `line`.
    pub fn parse(line: &'a str) -> Option<Self> {
        let captures = FOOTER_REGEX.captures(line)?;

        if let Some(keyword) = captures.name("issue") {
            let number = captures.name("number")?.as_str().parse().ok()?;
            return Some(Footer::IssueReference {
                keyword: keyword.as_str(),
                number,
            });
        }

        captures.name("trailer").map(|token| Footer::Trailer {
            token: token.as_str(),
        })
    }
}
