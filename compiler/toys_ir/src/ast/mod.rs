//! AST node definitions.

mod expr;
mod items;
mod operators;

pub use expr::{Expr, LabelledArg};
pub use items::{FunctionDefinition, GlobalVariableDefinition, Program, TopLevel};
pub use operators::Operator;
