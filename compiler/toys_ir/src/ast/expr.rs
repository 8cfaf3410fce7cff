//! Expression nodes.
//!
//! Constructors mirror the surface syntax so hand-built trees in tests read
//! like the program they stand for:
//!
//! ```
//! use toys_ir::Expr;
//!
//! // 2 + 3 * 4
//! let expr = Expr::add(Expr::integer(2), Expr::multiply(Expr::integer(3), Expr::integer(4)));
//! assert!(matches!(expr, Expr::Binary { .. }));
//! ```

use super::operators::Operator;

/// Expression node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    /// `lhs op rhs`
    Binary {
        op: Operator,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// `42`, `-7`
    Integer(i64),
    /// `true`, `false`
    Bool(bool),
    /// Variable reference.
    Identifier(String),
    /// `name = value;`
    Assignment { name: String, value: Box<Expr> },
    /// `{ line* }`; the value is the last element's value.
    Block(Vec<Expr>),
    /// `if (condition) then_branch else else_branch`
    If {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Option<Box<Expr>>,
    },
    /// `while (condition) body`
    While { condition: Box<Expr>, body: Box<Expr> },
    /// `name(arg, ...)`
    Call { name: String, args: Vec<Expr> },
    /// `name[label = arg, ...]`
    LabelledCall { name: String, args: Vec<LabelledArg> },
    /// `[item, ...]`
    Array(Vec<Expr>),
}

/// One `label = value` argument of a labelled call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LabelledArg {
    pub label: String,
    pub value: Expr,
}

impl LabelledArg {
    pub fn new(label: impl Into<String>, value: Expr) -> Self {
        LabelledArg {
            label: label.into(),
            value,
        }
    }
}

impl Expr {
    pub fn binary(op: Operator, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn add(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(Operator::Add, lhs, rhs)
    }

    pub fn subtract(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(Operator::Subtract, lhs, rhs)
    }

    pub fn multiply(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(Operator::Multiply, lhs, rhs)
    }

    pub fn divide(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(Operator::Divide, lhs, rhs)
    }

    pub fn less_than(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(Operator::LessThan, lhs, rhs)
    }

    pub fn integer(value: i64) -> Self {
        Expr::Integer(value)
    }

    pub fn boolean(value: bool) -> Self {
        Expr::Bool(value)
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expr::Identifier(name.into())
    }

    pub fn assign(name: impl Into<String>, value: Expr) -> Self {
        Expr::Assignment {
            name: name.into(),
            value: Box::new(value),
        }
    }

    pub fn block(elements: Vec<Expr>) -> Self {
        Expr::Block(elements)
    }

    pub fn if_then(condition: Expr, then_branch: Expr) -> Self {
        Expr::If {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: None,
        }
    }

    pub fn if_else(condition: Expr, then_branch: Expr, else_branch: Expr) -> Self {
        Expr::If {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Some(Box::new(else_branch)),
        }
    }

    pub fn while_loop(condition: Expr, body: Expr) -> Self {
        Expr::While {
            condition: Box::new(condition),
            body: Box::new(body),
        }
    }

    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            name: name.into(),
            args,
        }
    }

    pub fn labelled_call(name: impl Into<String>, args: Vec<LabelledArg>) -> Self {
        Expr::LabelledCall {
            name: name.into(),
            args,
        }
    }

    pub fn array(items: Vec<Expr>) -> Self {
        Expr::Array(items)
    }
}
