//! `InterpreterBuilder` for creating interpreters with non-default settings.

use super::{Interpreter, Scoping};
use crate::diagnostics::{CallStack, DEFAULT_MAX_CALL_DEPTH};
use crate::environment::Environment;

/// Builder for [`Interpreter`].
///
/// ```ignore
/// let interpreter = Interpreter::builder()
///     .scoping(Scoping::Lexical)
///     .max_call_depth(Some(500))
///     .build();
/// ```
#[derive(Debug)]
pub struct InterpreterBuilder {
    env: Option<Environment>,
    scoping: Scoping,
    max_call_depth: Option<usize>,
}

impl InterpreterBuilder {
    /// Default settings: dynamic scoping, an empty environment and a call
    /// depth limit of [`DEFAULT_MAX_CALL_DEPTH`].
    pub fn new() -> Self {
        InterpreterBuilder {
            env: None,
            scoping: Scoping::default(),
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }

    /// How called functions see the bindings of their callers.
    #[must_use]
    pub fn scoping(mut self, scoping: Scoping) -> Self {
        self.scoping = scoping;
        self
    }

    /// Limit on nested calls. `None` removes the limit.
    #[must_use]
    pub fn max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Start from a pre-populated environment instead of an empty one.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Finish configuration.
    ///
    /// The environment given to [`env`](Self::env) becomes the starting
    /// point of every [`Interpreter::run`].
    pub fn build(self) -> Interpreter {
        let seed = self.env.unwrap_or_default();
        Interpreter {
            env: seed.clone(),
            seed,
            call_stack: CallStack::new(self.max_call_depth),
            scoping: self.scoping,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
