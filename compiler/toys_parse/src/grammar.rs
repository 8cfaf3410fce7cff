//! The Toys grammar.
//!
//! ```text
//! program     := topLevel* EOF
//! topLevel    := "global" IDENT "=" expression ";"
//!              | "define" IDENT "(" IDENT,* ")" block
//! block       := "{" line* "}"
//! line        := while | if | assignment | block | expression ";"
//! expression  := additive (("<=" | ">=" | "==" | "!=" | "<" | ">") additive)*
//! additive    := multitive (("+" | "-") multitive)*
//! multitive   := primary (("*" | "/") primary)*
//! primary     := "(" expression ")" | INTEGER | call | labelledCall
//!              | array | "true" | "false" | IDENT
//! ```
//!
//! Precedence lives in the rule structure: each level folds the level below
//! it left-associatively with `chainl1`.

use toys_ir::{
    Expr, FunctionDefinition, GlobalVariableDefinition, LabelledArg, Operator, Program, TopLevel,
};

use crate::combinators::{eof, recursive, Parser};
use crate::lexical::{identifier, integer, keyword, spacing, symbol};

type Combine = fn(Expr, Expr) -> Expr;

/// Grammar rules, built once per parse and shared by reference.
pub(crate) struct Grammar {
    pub expression: Parser<Expr>,
    pub program: Parser<Program>,
}

impl Grammar {
    pub fn new() -> Self {
        let expression = expression();
        let line = line(&expression);
        let program = program(&expression, &line);
        Grammar {
            expression,
            program,
        }
    }
}

fn comma() -> Parser<()> {
    symbol(",")
}

fn operator(text: &'static str, combine: Combine) -> Parser<Combine> {
    symbol(text).map(move |()| combine)
}

fn comparative_op() -> Parser<Combine> {
    operator("<=", |l, r| Expr::binary(Operator::LessOrEqual, l, r))
        .or(operator(">=", |l, r| {
            Expr::binary(Operator::GreaterOrEqual, l, r)
        }))
        .or(operator("==", |l, r| {
            Expr::binary(Operator::EqualEqual, l, r)
        }))
        .or(operator("!=", |l, r| {
            Expr::binary(Operator::NotEqual, l, r)
        }))
        .or(operator("<", Expr::less_than))
        .or(operator(">", |l, r| {
            Expr::binary(Operator::GreaterThan, l, r)
        }))
}

fn additive_op() -> Parser<Combine> {
    operator("+", Expr::add).or(operator("-", Expr::subtract))
}

fn multitive_op() -> Parser<Combine> {
    operator("*", Expr::multiply).or(operator("/", Expr::divide))
}

fn expression() -> Parser<Expr> {
    recursive("expression", |expression| {
        let multitive = primary(&expression).chainl1(multitive_op());
        let additive = multitive.chainl1(additive_op());
        additive.chainl1(comparative_op())
    })
    .label("expression")
}

/// Alternatives that start with an identifier are wrapped in `attempt`, so a
/// bare `foo` that is not followed by `(` or `[` falls through to the
/// identifier rule instead of failing.
fn primary(expression: &Parser<Expr>) -> Parser<Expr> {
    let parenthesized = expression.clone().between(symbol("("), symbol(")"));
    parenthesized
        .or(integer().map(Expr::Integer))
        .or(function_call(expression).attempt())
        .or(labelled_call(expression).attempt())
        .or(array_literal(expression))
        .or(bool_literal())
        .or(identifier().map(Expr::Identifier))
}

/// `name(arg, ...)`
fn function_call(expression: &Parser<Expr>) -> Parser<Expr> {
    let args = expression
        .clone()
        .sep_by(comma())
        .between(symbol("("), symbol(")"));
    identifier()
        .and(args)
        .map(|(name, args)| Expr::Call { name, args })
}

/// `name[label = arg, ...]`
fn labelled_call(expression: &Parser<Expr>) -> Parser<Expr> {
    let arg = identifier()
        .skip(symbol("="))
        .and(expression.clone())
        .map(|(label, value)| LabelledArg::new(label, value));
    let args = arg.sep_by(comma()).between(symbol("["), symbol("]"));
    identifier()
        .and(args)
        .map(|(name, args)| Expr::LabelledCall { name, args })
}

/// `[item, ...]`
fn array_literal(expression: &Parser<Expr>) -> Parser<Expr> {
    expression
        .clone()
        .sep_by(comma())
        .between(symbol("["), symbol("]"))
        .map(Expr::Array)
}

fn bool_literal() -> Parser<Expr> {
    keyword("true")
        .map(|()| Expr::Bool(true))
        .or(keyword("false").map(|()| Expr::Bool(false)))
}

fn parenthesized_condition(expression: &Parser<Expr>) -> Parser<Expr> {
    expression.clone().between(symbol("("), symbol(")"))
}

fn block(line: &Parser<Expr>) -> Parser<Expr> {
    line.clone()
        .many()
        .between(symbol("{"), symbol("}"))
        .map(Expr::Block)
}

fn line(expression: &Parser<Expr>) -> Parser<Expr> {
    let expression = expression.clone();
    recursive("statement", move |line| {
        let while_line = keyword("while")
            .then(parenthesized_condition(&expression))
            .and(line.clone())
            .map(|(condition, body)| Expr::while_loop(condition, body));

        let if_line = keyword("if")
            .then(parenthesized_condition(&expression))
            .and(line.clone())
            .and(keyword("else").then(line.clone()).optional())
            .map(|((condition, then_branch), else_branch)| Expr::If {
                condition: Box::new(condition),
                then_branch: Box::new(then_branch),
                else_branch: else_branch.map(Box::new),
            });

        // `x = 1;` and `x == 1;` share the identifier prefix.
        let assignment = identifier()
            .skip(symbol("="))
            .and(expression.clone())
            .skip(symbol(";"))
            .map(|(name, value)| Expr::assign(name, value))
            .attempt();

        let expression_line = expression.clone().skip(symbol(";"));

        while_line
            .or(if_line)
            .or(assignment)
            .or(block(&line))
            .or(expression_line)
    })
}

fn global_definition(expression: &Parser<Expr>) -> Parser<TopLevel> {
    keyword("global")
        .then(identifier())
        .skip(symbol("="))
        .and(expression.clone())
        .skip(symbol(";"))
        .map(|(name, initializer)| GlobalVariableDefinition::new(name, initializer).into())
}

fn function_definition(line: &Parser<Expr>) -> Parser<TopLevel> {
    let params = identifier()
        .sep_by(comma())
        .between(symbol("("), symbol(")"));
    keyword("define")
        .then(identifier())
        .and(params)
        .and(block(line))
        .map(|((name, params), body)| FunctionDefinition::new(name, params, body).into())
}

fn program(expression: &Parser<Expr>, line: &Parser<Expr>) -> Parser<Program> {
    let top_level = global_definition(expression).or(function_definition(line));
    spacing()
        .then(top_level.many())
        .skip(eof())
        .map(Program::new)
}

/// `expression` as a complete input, leading trivia included.
pub(crate) fn standalone_expression(expression: &Parser<Expr>) -> Parser<Expr> {
    spacing().then(expression.clone()).skip(eof())
}
