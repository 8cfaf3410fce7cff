//! Four-way parse outcome for Parsec-style backtracking.
//!
//! | Progress | Result | Variant | Meaning |
//! |----------|--------|---------|---------|
//! | Consumed | Ok | `ConsumedOk` | Committed to parse path, succeeded |
//! | Empty | Ok | `EmptyOk` | Succeeded without consuming input |
//! | Consumed | Err | `ConsumedErr` | Failed after consuming; no alternative is tried |
//! | Empty | Err | `EmptyErr` | Failed without consuming; try the next alternative |
//!
//! The combination of progress and result decides what ordered choice does:
//! `or` only moves on to its alternative after an `EmptyErr`. A rule that
//! must be retried after a partial match is wrapped in `attempt`, which turns
//! its `ConsumedErr` into an `EmptyErr`.

use std::fmt;

use crate::cursor::Cursor;

/// Something the parser would have accepted at a failure position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Expected {
    /// Literal source text, such as a symbol or keyword.
    Token(&'static str),
    /// A named syntactic category, such as "identifier".
    Named(&'static str),
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(text) => write!(f, "`{text}`"),
            Expected::Named(name) => f.write_str(name),
            Expected::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Where parsing failed and what would have been accepted there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    /// Byte offset of the failure.
    pub pos: usize,
    pub expected: Vec<Expected>,
}

impl Failure {
    #[cold]
    pub fn new(pos: usize, expected: Expected) -> Self {
        Failure {
            pos,
            expected: vec![expected],
        }
    }

    /// Combine two failures from competing alternatives.
    ///
    /// The failure that got farther wins; at the same position the expected
    /// sets are unioned, preserving first-seen order.
    #[must_use]
    pub fn merge(self, other: Failure) -> Failure {
        match self.pos.cmp(&other.pos) {
            std::cmp::Ordering::Greater => self,
            std::cmp::Ordering::Less => other,
            std::cmp::Ordering::Equal => {
                let mut expected = self.expected;
                for item in other.expected {
                    if !expected.contains(&item) {
                        expected.push(item);
                    }
                }
                Failure {
                    pos: self.pos,
                    expected,
                }
            }
        }
    }
}

/// Result of running a parser on a cursor.
#[derive(Debug)]
pub enum ParseOutcome<'src, T> {
    /// Consumed input and succeeded.
    ConsumedOk { value: T, rest: Cursor<'src> },
    /// Succeeded without consuming input.
    EmptyOk { value: T, rest: Cursor<'src> },
    /// Consumed input then failed. A hard error.
    ConsumedErr { failure: Failure },
    /// Failed without consuming input. A soft error.
    EmptyErr { failure: Failure },
}

impl<'src, T> ParseOutcome<'src, T> {
    /// Success that consumed input iff `rest` moved past `start`.
    #[inline]
    pub fn ok(value: T, start: Cursor<'src>, rest: Cursor<'src>) -> Self {
        if rest.pos() > start.pos() {
            Self::ConsumedOk { value, rest }
        } else {
            Self::EmptyOk { value, rest }
        }
    }

    #[inline]
    pub fn empty_err(failure: Failure) -> Self {
        Self::EmptyErr { failure }
    }

    #[inline]
    pub fn consumed_err(failure: Failure) -> Self {
        Self::ConsumedErr { failure }
    }

    /// Returns `true` if the parse succeeded (either variant).
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::ConsumedOk { .. } | Self::EmptyOk { .. })
    }

    /// Returns `true` if input was consumed (regardless of success).
    #[inline]
    pub fn made_progress(&self) -> bool {
        matches!(self, Self::ConsumedOk { .. } | Self::ConsumedErr { .. })
    }

    /// Returns `true` if the next alternative may be tried.
    #[inline]
    pub fn failed_without_progress(&self) -> bool {
        matches!(self, Self::EmptyErr { .. })
    }

    /// Map the success value, preserving the variant.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseOutcome<'src, U> {
        match self {
            Self::ConsumedOk { value, rest } => ParseOutcome::ConsumedOk {
                value: f(value),
                rest,
            },
            Self::EmptyOk { value, rest } => ParseOutcome::EmptyOk {
                value: f(value),
                rest,
            },
            Self::ConsumedErr { failure } => ParseOutcome::ConsumedErr { failure },
            Self::EmptyErr { failure } => ParseOutcome::EmptyErr { failure },
        }
    }

    /// Mark the outcome as having consumed input.
    ///
    /// Used when this outcome follows an earlier parser in a sequence that
    /// already consumed: the sequence as a whole has made progress.
    #[must_use]
    pub fn committed(self) -> Self {
        match self {
            Self::EmptyOk { value, rest } => Self::ConsumedOk { value, rest },
            Self::EmptyErr { failure } => Self::ConsumedErr { failure },
            other => other,
        }
    }

    /// Drop the progress information.
    pub fn into_result(self) -> Result<(T, Cursor<'src>), Failure> {
        match self {
            Self::ConsumedOk { value, rest } | Self::EmptyOk { value, rest } => Ok((value, rest)),
            Self::ConsumedErr { failure } | Self::EmptyErr { failure } => Err(failure),
        }
    }
}
