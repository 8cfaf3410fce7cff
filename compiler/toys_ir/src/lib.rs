//! Toys IR - syntax tree types shared by the parser and the evaluator.
//!
//! - [`Expr`]: the sealed set of expression nodes
//! - [`Operator`]: the closed set of binary operators
//! - [`TopLevel`] / [`Program`]: function and global variable definitions
//!
//! Trees are owned top-down: every node owns its children through `Box` or
//! `Vec`, so no node is shared between two parents.

pub mod ast;

pub use ast::{
    Expr, FunctionDefinition, GlobalVariableDefinition, LabelledArg, Operator, Program, TopLevel,
};
