//! Lexical units.
//!
//! Each unit is atomic: it either matches completely or fails without
//! consuming anything. After a successful match it skips trailing whitespace
//! and `//` line comments, so the next unit starts on significant input.
//! Leading trivia is skipped once, by the entry point.

use crate::combinators::Parser;
use crate::cursor::Cursor;
use crate::outcome::{Expected, Failure, ParseOutcome};

/// Reserved words; never accepted as identifiers.
pub const KEYWORDS: &[&str] = &["define", "else", "false", "global", "if", "true", "while"];

/// Skip whitespace and line comments.
pub fn skip_trivia(mut cursor: Cursor<'_>) -> Cursor<'_> {
    loop {
        let after_space = cursor.advance_while(char::is_whitespace);
        if after_space.starts_with("//") {
            cursor = after_space.advance_while(|c| c != '\n');
        } else {
            return after_space;
        }
    }
}

/// Intertoken skip as a parser. Never fails.
pub fn spacing() -> Parser<()> {
    Parser::new(|input| ParseOutcome::ok((), input, skip_trivia(input)))
}

/// Build an atomic unit from a raw scanner.
///
/// `scan` returns the value and the cursor just past the matched text, or
/// `None` if the text at the cursor does not match.
fn lexeme<T: 'static>(
    expected: Expected,
    scan: impl for<'src> Fn(Cursor<'src>) -> Option<(T, Cursor<'src>)> + 'static,
) -> Parser<T> {
    Parser::new(move |input| match scan(input) {
        Some((value, after)) => ParseOutcome::ConsumedOk {
            value,
            rest: skip_trivia(after),
        },
        None => ParseOutcome::empty_err(Failure::new(input.pos(), expected)),
    })
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Punctuation or operator text.
///
/// `=`, `<`, `>` and `!` do not match when directly followed by `=`, so
/// `symbol("=")` leaves `==` for the comparison operator.
pub fn symbol(text: &'static str) -> Parser<()> {
    let extends_with_eq = matches!(text, "=" | "<" | ">" | "!");
    lexeme(Expected::Token(text), move |input| {
        if !input.starts_with(text) {
            return None;
        }
        let after = input.advance_str(text);
        if extends_with_eq && after.current() == Some('=') {
            return None;
        }
        Some(((), after))
    })
}

/// A reserved word, not followed by an identifier character.
pub fn keyword(word: &'static str) -> Parser<()> {
    lexeme(Expected::Token(word), move |input| {
        if !input.starts_with(word) {
            return None;
        }
        let after = input.advance_str(word);
        match after.current() {
            Some(c) if is_ident_continue(c) => None,
            _ => Some(((), after)),
        }
    })
}

/// `[a-zA-Z_][a-zA-Z0-9_]*`, excluding keywords.
pub fn identifier() -> Parser<String> {
    lexeme(Expected::Named("identifier"), |input| {
        if !input.current().is_some_and(is_ident_start) {
            return None;
        }
        let after = input.advance_while(is_ident_continue);
        let name = input.slice_to(after);
        if KEYWORDS.iter().any(|&reserved| reserved == name) {
            return None;
        }
        Some((name.to_string(), after))
    })
}

/// `-?[0-9]+`, which must fit in an `i64`.
pub fn integer() -> Parser<i64> {
    Parser::new(|input| {
        let digits_start = if input.current() == Some('-') {
            input.advance()
        } else {
            input
        };
        if !digits_start.current().is_some_and(|c| c.is_ascii_digit()) {
            return ParseOutcome::empty_err(Failure::new(
                input.pos(),
                Expected::Named("integer literal"),
            ));
        }
        let after = digits_start.advance_while(|c| c.is_ascii_digit());
        match input.slice_to(after).parse::<i64>() {
            Ok(value) => ParseOutcome::ConsumedOk {
                value,
                rest: skip_trivia(after),
            },
            Err(_) => ParseOutcome::consumed_err(Failure::new(
                input.pos(),
                Expected::Named("integer literal within the 64-bit range"),
            )),
        }
    })
}
