//! Tree-walking interpreter.
//!
//! An [`Interpreter`] owns the environment chain and the call stack. The
//! function table is built per [`run`](Interpreter::run) and passed by
//! reference into every evaluation.

mod builder;
mod call;

pub use builder::InterpreterBuilder;

use toys_ir::{Expr, Program};
use toys_stack::ensure_sufficient_stack;

use crate::diagnostics::CallStack;
use crate::environment::{Environment, ScopeId};
use crate::errors::{missing_entry_point, unbound_identifier, EvalError};
use crate::function_table::FunctionTable;
use crate::operators::evaluate_binary;
use crate::value::Value;

/// How a called function's scope is chained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scoping {
    /// The callee's scope is chained to the caller's current scope, so the
    /// callee sees (and can assign) the caller's bindings.
    #[default]
    Dynamic,
    /// The callee's scope is chained to the root, so only globals are
    /// visible besides the parameters.
    Lexical,
}

impl Scoping {
    fn parent_for_call(self, env: &Environment) -> ScopeId {
        match self {
            Scoping::Dynamic => env.current(),
            Scoping::Lexical => ScopeId::ROOT,
        }
    }
}

pub struct Interpreter {
    env: Environment,
    /// Bindings every run starts from.
    seed: Environment,
    call_stack: CallStack,
    scoping: Scoping,
}

impl Interpreter {
    /// An interpreter with default configuration.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Start configuring an interpreter.
    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Bindings left by the last run or evaluation.
    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// How called functions are chained to their callers.
    #[inline]
    pub fn scoping(&self) -> Scoping {
        self.scoping
    }

    /// Load `program` and call its `main`.
    ///
    /// Each run starts from the builder's environment with an empty call
    /// stack; nothing from an earlier run, successful or not, stays visible.
    /// The function table is complete before any global initializer runs,
    /// so initializers may call any function. Globals are then evaluated in
    /// source order in the root scope.
    #[tracing::instrument(level = "debug", skip_all, fields(definitions = program.definitions.len()))]
    pub fn run(&mut self, program: &Program) -> Result<Value, EvalError> {
        self.env.clone_from(&self.seed);
        self.call_stack.clear();
        let functions = FunctionTable::from_program(program)?;

        for global in program.globals() {
            let value = self.evaluate(&global.initializer, &functions)?;
            tracing::debug!(name = %global.name, %value, "global defined");
            self.env.define_global(global.name.clone(), value);
        }

        let main = functions.get("main").ok_or_else(missing_entry_point)?;
        self.call_function(main, Vec::new(), &functions)
    }

    /// Evaluate one expression in the current scope.
    pub fn evaluate(
        &mut self,
        expr: &Expr,
        functions: &FunctionTable<'_>,
    ) -> Result<Value, EvalError> {
        ensure_sufficient_stack(|| self.evaluate_inner(expr, functions))
    }

    fn evaluate_inner(
        &mut self,
        expr: &Expr,
        functions: &FunctionTable<'_>,
    ) -> Result<Value, EvalError> {
        match expr {
            Expr::Binary { op, lhs, rhs } => {
                let lhs = self.evaluate(lhs, functions)?;
                let rhs = self.evaluate(rhs, functions)?;
                evaluate_binary(*op, &lhs, &rhs)
            }
            Expr::Integer(n) => Ok(Value::Int(*n)),
            Expr::Bool(b) => Ok(Value::Bool(*b)),
            Expr::Identifier(name) => self
                .env
                .lookup(name)
                .cloned()
                .ok_or_else(|| unbound_identifier(name)),
            Expr::Assignment { name, value } => {
                let value = self.evaluate(value, functions)?;
                self.env.assign(name, value.clone());
                Ok(value)
            }
            Expr::Block(elements) => {
                let mut last = Value::Unit;
                for element in elements {
                    last = self.evaluate(element, functions)?;
                }
                Ok(last)
            }
            Expr::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition, functions)?.as_bool()? {
                    self.evaluate(then_branch, functions)
                } else if let Some(else_branch) = else_branch {
                    self.evaluate(else_branch, functions)
                } else {
                    Ok(Value::Unit)
                }
            }
            Expr::While { condition, body } => {
                while self.evaluate(condition, functions)?.as_bool()? {
                    self.evaluate(body, functions)?;
                }
                Ok(Value::Bool(true))
            }
            Expr::Call { name, args } => self.eval_call(name, args, functions),
            Expr::LabelledCall { name, args } => self.eval_labelled_call(name, args, functions),
            Expr::Array(items) => items
                .iter()
                .map(|item| self.evaluate(item, functions))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Run `program` on a fresh interpreter with default configuration.
pub fn run(program: &Program) -> Result<Value, EvalError> {
    Interpreter::new().run(program)
}

#[cfg(test)]
mod tests;
