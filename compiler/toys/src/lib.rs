//! Toys: a small imperative language.
//!
//! This crate ties the parser and the evaluator together:
//!
//! ```ignore
//! let value = toys::run_source("define main() { 2 + 3 * 4; }")?;
//! assert_eq!(value, toys::Value::Int(14));
//! ```

use std::sync::Once;

use thiserror::Error;

pub use toys_eval::{
    EvalError, EvalErrorKind, Environment, Interpreter, InterpreterBuilder, Scoping, Value,
};
pub use toys_ir::{Expr, Program};
pub use toys_parse::SyntaxError;

/// Anything that can go wrong between source text and a value.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Parse a program without running it.
pub fn parse(source: &str) -> Result<Program, SyntaxError> {
    toys_parse::parse_program(source)
}

/// Parse `source` and run its `main` with a default interpreter.
pub fn run_source(source: &str) -> Result<Value, Error> {
    run_source_with(source, InterpreterBuilder::new())
}

/// Parse `source` and run its `main` on an interpreter built from `builder`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn run_source_with(source: &str, builder: InterpreterBuilder) -> Result<Value, Error> {
    let program = parse(source)?;
    let value = builder.build().run(&program)?;
    tracing::debug!(%value, "program finished");
    Ok(value)
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset or a global subscriber is already
/// installed. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
