//! Binary operators.
//!
//! Both operands must be `Int`. Arithmetic is checked: overflow and division
//! by zero are errors, never wrapped or saturated.

use toys_ir::Operator;

use crate::errors::{division_by_zero, integer_overflow, EvalError};
use crate::value::Value;

#[inline]
fn checked(result: Option<i64>, operation: &'static str) -> Result<Value, EvalError> {
    result
        .map(Value::Int)
        .ok_or_else(|| integer_overflow(operation))
}

/// Apply `op` to two evaluated operands.
pub fn evaluate_binary(op: Operator, lhs: &Value, rhs: &Value) -> Result<Value, EvalError> {
    let l = lhs.as_int()?;
    let r = rhs.as_int()?;
    if op.is_comparison() {
        Ok(Value::Bool(compare(op, l, r)))
    } else {
        arithmetic(op, l, r)
    }
}

fn arithmetic(op: Operator, l: i64, r: i64) -> Result<Value, EvalError> {
    match op {
        Operator::Add => checked(l.checked_add(r), "addition"),
        Operator::Subtract => checked(l.checked_sub(r), "subtraction"),
        Operator::Multiply => checked(l.checked_mul(r), "multiplication"),
        Operator::Divide => {
            if r == 0 {
                Err(division_by_zero())
            } else {
                checked(l.checked_div(r), "division")
            }
        }
        comparison => unreachable!("`{comparison}` is not arithmetic"),
    }
}

fn compare(op: Operator, l: i64, r: i64) -> bool {
    match op {
        Operator::LessThan => l < r,
        Operator::LessOrEqual => l <= r,
        Operator::GreaterThan => l > r,
        Operator::GreaterOrEqual => l >= r,
        Operator::EqualEqual => l == r,
        Operator::NotEqual => l != r,
        arithmetic => unreachable!("`{arithmetic}` is not a comparison"),
    }
}
