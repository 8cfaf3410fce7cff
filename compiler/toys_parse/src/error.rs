//! Syntax errors.

use std::fmt::Write as _;

use thiserror::Error;

use crate::cursor::line_col;
use crate::outcome::{Expected, Failure};

/// Where parsing stopped, what would have been accepted there, and what was
/// actually in the input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("syntax error at {line}:{column}: expected {}, found {found}", format_expected(.expected))]
pub struct SyntaxError {
    /// Byte offset into the source.
    pub offset: usize,
    /// 1-based line.
    pub line: u32,
    /// 1-based column, in characters.
    pub column: u32,
    pub expected: Vec<Expected>,
    pub found: String,
}

impl SyntaxError {
    #[cold]
    pub(crate) fn from_failure(source: &str, failure: Failure) -> Self {
        let (line, column) = line_col(source, failure.pos);
        SyntaxError {
            offset: failure.pos,
            line,
            column,
            found: describe_found(source, failure.pos),
            expected: failure.expected,
        }
    }
}

/// `a`, `a or b`, `a, b or c`.
fn format_expected(expected: &[Expected]) -> String {
    let mut out = String::new();
    for (i, item) in expected.iter().enumerate() {
        if i > 0 {
            out.push_str(if i + 1 == expected.len() { " or " } else { ", " });
        }
        let _ = write!(out, "{item}");
    }
    out
}

/// The word, number or single character at `offset`.
fn describe_found(source: &str, offset: usize) -> String {
    let rest = source.get(offset..).unwrap_or_default();
    let Some(first) = rest.chars().next() else {
        return "end of input".to_string();
    };
    let len = if first.is_ascii_alphanumeric() || first == '_' {
        rest.find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(rest.len())
    } else {
        first.len_utf8()
    };
    format!("`{}`", &rest[..len])
}
