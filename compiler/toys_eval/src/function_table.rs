//! Name to definition lookup for the functions of one program.

use rustc_hash::FxHashMap;
use toys_ir::{FunctionDefinition, Program};

use crate::errors::{duplicate_function, EvalError};

/// Every function of a program, keyed by name.
///
/// Built once before evaluation starts and read-only afterwards. Borrows
/// the definitions from the program it was built from.
#[derive(Debug, Default)]
pub struct FunctionTable<'p> {
    functions: FxHashMap<&'p str, &'p FunctionDefinition>,
}

impl<'p> FunctionTable<'p> {
    /// An empty table, for evaluating expressions outside any program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every function of `program`.
    pub fn from_program(program: &'p Program) -> Result<Self, EvalError> {
        let mut table = Self::new();
        for function in program.functions() {
            table.register(function)?;
        }
        tracing::debug!(functions = table.len(), "function table built");
        Ok(table)
    }

    /// Add one definition. A name can be registered only once.
    pub fn register(&mut self, function: &'p FunctionDefinition) -> Result<(), EvalError> {
        if self.functions.contains_key(function.name.as_str()) {
            return Err(duplicate_function(&function.name));
        }
        tracing::debug!(name = %function.name, params = function.params.len(), "function registered");
        self.functions.insert(function.name.as_str(), function);
        Ok(())
    }

    /// The definition registered under `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&'p FunctionDefinition> {
        self.functions.get(name).copied()
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

#[cfg(test)]
mod tests;
