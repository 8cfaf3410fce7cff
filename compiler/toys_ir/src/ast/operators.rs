//! Binary operators.

use std::fmt;

/// Binary operators.
///
/// Arithmetic operators take two integers and produce an integer;
/// comparison operators take two integers and produce a boolean.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operator {
    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,

    // Comparison
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
    EqualEqual,
    NotEqual,
}

impl Operator {
    /// Returns the source-level symbol for this operator.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::LessThan => "<",
            Self::LessOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterOrEqual => ">=",
            Self::EqualEqual => "==",
            Self::NotEqual => "!=",
        }
    }

    /// Returns `true` for operators that yield a boolean.
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::LessThan
                | Self::LessOrEqual
                | Self::GreaterThan
                | Self::GreaterOrEqual
                | Self::EqualEqual
                | Self::NotEqual
        )
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
