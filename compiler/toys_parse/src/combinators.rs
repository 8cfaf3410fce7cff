//! Parser combinators.
//!
//! A [`Parser<T>`] is a reference-counted function from a [`Cursor`] to a
//! [`ParseOutcome`]. Parsers are pure: running one never mutates shared
//! state, so backtracking is just running another parser on the same cursor.
//!
//! Grammar rules are built once and cloned freely (a clone is an `Rc` bump).
//! Self-referential rules are tied with [`recursive`].

use std::cell::OnceCell;
use std::rc::{Rc, Weak};

use toys_stack::ensure_sufficient_stack;

use crate::cursor::Cursor;
use crate::outcome::{Expected, Failure, ParseOutcome};

type ParseFn<T> = dyn for<'src> Fn(Cursor<'src>) -> ParseOutcome<'src, T>;

/// A composable parser producing `T`.
pub struct Parser<T> {
    run: Rc<ParseFn<T>>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Parser {
            run: Rc::clone(&self.run),
        }
    }
}

impl<T: 'static> Parser<T> {
    /// Wrap a parsing function.
    pub fn new<F>(f: F) -> Self
    where
        F: for<'src> Fn(Cursor<'src>) -> ParseOutcome<'src, T> + 'static,
    {
        Parser { run: Rc::new(f) }
    }

    /// Run the parser.
    #[inline]
    pub fn parse<'src>(&self, input: Cursor<'src>) -> ParseOutcome<'src, T> {
        (self.run)(input)
    }

    /// Transform the result.
    #[must_use]
    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + 'static) -> Parser<U> {
        Parser::new(move |input| self.parse(input).map(&f))
    }

    /// Sequencing: run `self`, then the parser `f` builds from its result.
    #[must_use]
    pub fn bind<U: 'static>(self, f: impl Fn(T) -> Parser<U> + 'static) -> Parser<U> {
        Parser::new(move |input| match self.parse(input) {
            ParseOutcome::ConsumedOk { value, rest } => f(value).parse(rest).committed(),
            ParseOutcome::EmptyOk { value, rest } => f(value).parse(rest),
            ParseOutcome::ConsumedErr { failure } => ParseOutcome::ConsumedErr { failure },
            ParseOutcome::EmptyErr { failure } => ParseOutcome::EmptyErr { failure },
        })
    }

    /// Run `self` then `next`, keeping both results.
    #[must_use]
    pub fn and<U: 'static>(self, next: Parser<U>) -> Parser<(T, U)> {
        Parser::new(move |input| match self.parse(input) {
            ParseOutcome::ConsumedOk { value, rest } => next
                .parse(rest)
                .map(|second| (value, second))
                .committed(),
            ParseOutcome::EmptyOk { value, rest } => next.parse(rest).map(|second| (value, second)),
            ParseOutcome::ConsumedErr { failure } => ParseOutcome::ConsumedErr { failure },
            ParseOutcome::EmptyErr { failure } => ParseOutcome::EmptyErr { failure },
        })
    }

    /// Run `self` then `next`, keeping `next`'s result.
    #[must_use]
    pub fn then<U: 'static>(self, next: Parser<U>) -> Parser<U> {
        self.and(next).map(|(_, second)| second)
    }

    /// Run `self` then `next`, keeping `self`'s result.
    #[must_use]
    pub fn skip<U: 'static>(self, next: Parser<U>) -> Parser<T> {
        self.and(next).map(|(first, _)| first)
    }

    /// Ordered choice.
    ///
    /// `alternative` runs only if `self` failed without consuming input.
    /// Failures from both sides are merged so the reported error names every
    /// alternative that was considered at the farthest position.
    #[must_use]
    pub fn or(self, alternative: Parser<T>) -> Parser<T> {
        Parser::new(move |input| match self.parse(input) {
            ParseOutcome::EmptyErr { failure } => match alternative.parse(input) {
                ParseOutcome::EmptyErr { failure: other } => ParseOutcome::EmptyErr {
                    failure: failure.merge(other),
                },
                ParseOutcome::ConsumedErr { failure: other } => ParseOutcome::ConsumedErr {
                    failure: failure.merge(other),
                },
                success => success,
            },
            outcome => outcome,
        })
    }

    /// Checkpoint: if `self` fails after consuming input, pretend it consumed
    /// nothing so an enclosing `or` can try its alternative from the same
    /// position.
    #[must_use]
    pub fn attempt(self) -> Parser<T> {
        Parser::new(move |input| match self.parse(input) {
            ParseOutcome::ConsumedErr { failure } => ParseOutcome::EmptyErr { failure },
            outcome => outcome,
        })
    }

    /// Zero or more repetitions.
    ///
    /// Stops at the first failure that consumed nothing. A repetition that
    /// succeeds without consuming also stops the loop, since it would match
    /// forever.
    #[must_use]
    pub fn many(self) -> Parser<Vec<T>> {
        Parser::new(move |input| {
            let mut items = Vec::new();
            let mut cursor = input;
            loop {
                match self.parse(cursor) {
                    ParseOutcome::ConsumedOk { value, rest } => {
                        items.push(value);
                        cursor = rest;
                    }
                    ParseOutcome::EmptyOk { .. } | ParseOutcome::EmptyErr { .. } => break,
                    ParseOutcome::ConsumedErr { failure } => {
                        return ParseOutcome::ConsumedErr { failure };
                    }
                }
            }
            ParseOutcome::ok(items, input, cursor)
        })
    }

    /// One or more repetitions.
    #[must_use]
    pub fn many1(self) -> Parser<Vec<T>> {
        self.clone().and(self.many()).map(|(first, mut rest)| {
            rest.insert(0, first);
            rest
        })
    }

    /// One or more occurrences separated by `separator`.
    #[must_use]
    pub fn sep_by1<S: 'static>(self, separator: Parser<S>) -> Parser<Vec<T>> {
        self.clone()
            .and(separator.then(self).many())
            .map(|(first, mut rest)| {
                rest.insert(0, first);
                rest
            })
    }

    /// Zero or more occurrences separated by `separator`.
    #[must_use]
    pub fn sep_by<S: 'static>(self, separator: Parser<S>) -> Parser<Vec<T>> {
        self.sep_by1(separator)
            .optional()
            .map(Option::unwrap_or_default)
    }

    /// `open self close`, keeping `self`'s result.
    #[must_use]
    pub fn between<O: 'static, C: 'static>(self, open: Parser<O>, close: Parser<C>) -> Parser<T> {
        open.then(self).skip(close)
    }

    /// Zero or one occurrence.
    #[must_use]
    pub fn optional(self) -> Parser<Option<T>> {
        Parser::new(move |input| match self.parse(input) {
            ParseOutcome::EmptyErr { .. } => ParseOutcome::EmptyOk {
                value: None,
                rest: input,
            },
            outcome => outcome.map(Some),
        })
    }

    /// Name what this parser expects, replacing the expectations of its parts
    /// when it fails at its own starting position.
    #[must_use]
    pub fn label(self, name: &'static str) -> Parser<T> {
        Parser::new(move |input| match self.parse(input) {
            ParseOutcome::EmptyErr { failure } if failure.pos == input.pos() => {
                ParseOutcome::EmptyErr {
                    failure: Failure::new(input.pos(), Expected::Named(name)),
                }
            }
            outcome => outcome,
        })
    }

    /// One or more `self` separated by `op`, folded left-associatively:
    /// `a op b op c` becomes `op(op(a, b), c)`.
    #[must_use]
    pub fn chainl1(self, op: Parser<fn(T, T) -> T>) -> Parser<T> {
        let rest = op.and(self.clone()).many();
        self.and(rest).map(|(first, rest)| {
            rest.into_iter()
                .fold(first, |lhs, (combine, rhs)| combine(lhs, rhs))
        })
    }
}

/// Succeeds only at end of input.
pub fn eof() -> Parser<()> {
    Parser::new(|input| {
        if input.is_eof() {
            ParseOutcome::EmptyOk {
                value: (),
                rest: input,
            }
        } else {
            ParseOutcome::empty_err(Failure::new(input.pos(), Expected::EndOfInput))
        }
    })
}

/// Tie a self-referential rule.
///
/// `build` receives a handle that parses with the finished rule, so the rule
/// can mention itself (`expression` inside parentheses inside `expression`).
/// The handle holds a weak reference; the returned parser owns the rule.
/// Every entry through the handle runs under `ensure_sufficient_stack`, so
/// deeply nested input grows the stack instead of overflowing it.
pub fn recursive<T: 'static>(
    name: &'static str,
    build: impl FnOnce(Parser<T>) -> Parser<T>,
) -> Parser<T> {
    let cell: Rc<OnceCell<Parser<T>>> = Rc::new(OnceCell::new());
    let weak: Weak<OnceCell<Parser<T>>> = Rc::downgrade(&cell);

    let handle = Parser::new(move |input| {
        match weak.upgrade().as_deref().and_then(OnceCell::get) {
            Some(rule) => ensure_sufficient_stack(|| rule.parse(input)),
            None => ParseOutcome::empty_err(Failure::new(input.pos(), Expected::Named(name))),
        }
    });
    let rule = build(handle);
    let _ = cell.set(rule);

    Parser::new(move |input| match cell.get() {
        Some(rule) => rule.parse(input),
        None => ParseOutcome::empty_err(Failure::new(input.pos(), Expected::Named(name))),
    })
}
