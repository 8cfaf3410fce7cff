//! Toys parser.
//!
//! Parsec-style combinators over an immutable character cursor, and the Toys
//! grammar built from them. There is no separate lexer: lexical units are
//! combinators that skip trailing whitespace and comments themselves.
//!
//! # Entry points
//!
//! - [`parse_program`]: a whole source file of `global` and `define` items
//! - [`parse_expression`]: a single expression, for tests and embedders

pub mod combinators;
pub mod cursor;
mod error;
mod grammar;
pub mod lexical;
pub mod outcome;

pub use error::SyntaxError;

use toys_ir::{Expr, Program};

use crate::cursor::Cursor;
use crate::grammar::{standalone_expression, Grammar};

/// Parse a complete program.
pub fn parse_program(source: &str) -> Result<Program, SyntaxError> {
    tracing::trace!(len = source.len(), "parsing program");
    let grammar = Grammar::new();
    grammar
        .program
        .parse(Cursor::new(source))
        .into_result()
        .map(|(program, _)| program)
        .map_err(|failure| SyntaxError::from_failure(source, failure))
}

/// Parse a single expression spanning the whole input.
pub fn parse_expression(source: &str) -> Result<Expr, SyntaxError> {
    tracing::trace!(len = source.len(), "parsing expression");
    let grammar = Grammar::new();
    standalone_expression(&grammar.expression)
        .parse(Cursor::new(source))
        .into_result()
        .map(|(expr, _)| expr)
        .map_err(|failure| SyntaxError::from_failure(source, failure))
}
