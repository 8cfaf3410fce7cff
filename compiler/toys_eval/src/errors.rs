//! Evaluation errors and their constructors.
//!
//! Every error is built through one of the `#[cold]` factory functions here,
//! so call sites read as `Err(undefined_function(name))`.

use thiserror::Error;

use crate::value::Value;

/// A failed evaluation.
///
/// `backtrace` lists the names of the functions that were active when the
/// error was raised, innermost first. It is empty for errors raised outside
/// any call, such as in a global initializer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub backtrace: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    #[error("unbound identifier `{name}`")]
    UnboundIdentifier { name: String },
    #[error("undefined function `{name}`")]
    UndefinedFunction { name: String },
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("`{function}` takes {expected} argument(s) but {found} were supplied")]
    ArityMismatch {
        function: String,
        expected: usize,
        found: usize,
    },
    #[error("invalid label `{label}` in call to `{function}`")]
    InvalidLabel { function: String, label: String },
    #[error("function `{name}` is defined more than once")]
    DuplicateFunction { name: String },
    #[error("no `main` function defined")]
    MissingEntryPoint,
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    #[error("call depth exceeded the limit of {depth}")]
    StackExhausted { depth: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    Overflow { operation: &'static str },
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            backtrace: Vec::new(),
        }
    }

    /// Attach a backtrace unless one was already captured deeper in the call
    /// chain.
    #[must_use]
    pub fn with_backtrace(mut self, backtrace: impl FnOnce() -> Vec<String>) -> Self {
        if self.backtrace.is_empty() {
            self.backtrace = backtrace();
        }
        self
    }
}

impl From<ArithmeticError> for EvalError {
    fn from(err: ArithmeticError) -> Self {
        EvalError::from_kind(EvalErrorKind::Arithmetic(err))
    }
}

#[cold]
pub fn unbound_identifier(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundIdentifier {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    })
}

#[cold]
pub fn type_mismatch(expected: &'static str, found: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected,
        found: found.type_name(),
    })
}

#[cold]
pub fn arity_mismatch(function: &str, expected: usize, found: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        function: function.to_string(),
        expected,
        found,
    })
}

#[cold]
pub fn invalid_label(function: &str, label: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidLabel {
        function: function.to_string(),
        label: label.to_string(),
    })
}

#[cold]
pub fn duplicate_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateFunction {
        name: name.to_string(),
    })
}

#[cold]
pub fn missing_entry_point() -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingEntryPoint)
}

#[cold]
pub fn division_by_zero() -> EvalError {
    ArithmeticError::DivisionByZero.into()
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    ArithmeticError::Overflow { operation }.into()
}

#[cold]
pub fn stack_exhausted(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackExhausted { depth })
}
