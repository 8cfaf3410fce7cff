//! Toys evaluator.
//!
//! Walks the syntax tree from `toys_ir` directly. A program runs in three
//! steps: build the function table, evaluate globals into the root scope,
//! call `main`.
//!
//! # Modules
//!
//! - [`value`]: runtime values
//! - [`environment`]: the arena-backed scope chain
//! - [`function_table`]: name to definition lookup
//! - [`interpreter`]: expression evaluation and calls
//! - [`errors`]: `EvalError` and its constructors

pub mod diagnostics;
pub mod environment;
pub mod errors;
pub mod function_table;
pub mod interpreter;
mod operators;
pub mod value;

pub use diagnostics::{CallStack, DEFAULT_MAX_CALL_DEPTH};
pub use environment::{Environment, Frame, ScopeId};
pub use errors::{ArithmeticError, EvalError, EvalErrorKind};
pub use function_table::FunctionTable;
pub use interpreter::{run, Interpreter, InterpreterBuilder, Scoping};
pub use operators::evaluate_binary;
pub use value::Value;
