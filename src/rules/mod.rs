// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! The rule set is fixed at build time. [`Validator`] runs the built-in
//! stages in order and collects their errors and warnings.

mod builtin;
mod engine;
mod tables;
mod validator;

pub use builtin::{check_body_and_footer, check_content_quality, check_format, check_type_and_scope};
pub use engine::Validator;
pub use tables::*;
pub use validator::{ValidationIssue, ValidationResult};
