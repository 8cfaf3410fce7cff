//! Runtime values.

use std::collections::BTreeMap;
use std::fmt;

use crate::errors::{type_mismatch, EvalError};

/// A runtime value. Values are immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Array(Vec<Value>),
    Dictionary(BTreeMap<Value, Value>),
    /// The absent value: an empty block, or an `if` without `else` whose
    /// condition was false.
    Unit,
}

impl Value {
    /// Name of the variant, as used in type errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Bool(_) => "bool",
            Value::Array(_) => "array",
            Value::Dictionary(_) => "dictionary",
            Value::Unit => "unit",
        }
    }

    /// Narrow to an integer.
    #[inline]
    pub fn as_int(&self) -> Result<i64, EvalError> {
        match self {
            Value::Int(n) => Ok(*n),
            other => Err(type_mismatch("int", other)),
        }
    }

    /// Narrow to a boolean, as `if` and `while` conditions require.
    #[inline]
    pub fn as_bool(&self) -> Result<bool, EvalError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(type_mismatch("bool", other)),
        }
    }

    /// Narrow to the items of an array.
    pub fn as_array(&self) -> Result<&[Value], EvalError> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(type_mismatch("array", other)),
        }
    }

    /// Narrow to the entries of a dictionary.
    pub fn as_dictionary(&self) -> Result<&BTreeMap<Value, Value>, EvalError> {
        match self {
            Value::Dictionary(entries) => Ok(entries),
            other => Err(type_mismatch("dictionary", other)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Dictionary(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Value::Unit => f.write_str("()"),
        }
    }
}
