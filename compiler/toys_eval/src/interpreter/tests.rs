use pretty_assertions::assert_eq;
use proptest::prelude::*;
use toys_ir::{Expr, FunctionDefinition, Program};
use toys_parse::{parse_expression, parse_program};

use super::*;
use crate::errors::{ArithmeticError, EvalErrorKind};

fn run_source(source: &str) -> Result<Value, EvalError> {
    run(&parse_program(source).unwrap())
}

fn run_with(source: &str, interpreter: &mut Interpreter) -> Result<Value, EvalError> {
    interpreter.run(&parse_program(source).unwrap())
}

fn eval_expr(source: &str) -> Result<Value, EvalError> {
    let expr = parse_expression(source).unwrap();
    Interpreter::new().evaluate(&expr, &FunctionTable::new())
}

const FACT: &str = "
define main() {
  fact(5);
}
define fact(n) {
  if (n < 2) {
    1;
  } else {
    n * fact(n - 1);
  }
}
";

#[test]
fn factorial() {
    assert_eq!(run_source(FACT).unwrap(), Value::Int(120));
    let zero = FACT.replace("fact(5)", "fact(0)");
    assert_eq!(run_source(&zero).unwrap(), Value::Int(1));
}

#[test]
fn precedence_evaluates() {
    assert_eq!(eval_expr("2 + 3 * 4").unwrap(), Value::Int(14));
    assert_eq!(eval_expr("10 + 20").unwrap(), Value::Int(30));
    assert_eq!(eval_expr("(2 + 3) * 4").unwrap(), Value::Int(20));
}

#[test]
fn divide_by_zero() {
    let err = eval_expr("1 / 0").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::Arithmetic(ArithmeticError::DivisionByZero)
    );
    assert!(err.backtrace.is_empty());
}

#[test]
fn operands_evaluate_left_to_right() {
    let source = "
define set(v) { x = v; }
define main() {
  x = 1;
  set(10) + set(x * 2);
  x;
}
";
    assert_eq!(run_source(source).unwrap(), Value::Int(20));
}

#[test]
fn unbound_identifier() {
    let err = eval_expr("foo").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundIdentifier {
            name: "foo".to_string()
        }
    );
}

#[test]
fn undefined_function() {
    let err = run_source("define main() { bar(); }").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedFunction {
            name: "bar".to_string()
        }
    );
    assert_eq!(err.backtrace, vec!["main".to_string()]);
}

#[test]
fn missing_main() {
    let err = run_source("define helper() { 1; }").unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::MissingEntryPoint);
}

#[test]
fn main_with_parameters() {
    let err = run_source("define main(argv) { 1; }").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::ArityMismatch {
            function: "main".to_string(),
            expected: 1,
            found: 0,
        }
    );
}

#[test]
fn duplicate_function() {
    let err = run_source("define main() { 1; } define main() { 2; }").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::DuplicateFunction {
            name: "main".to_string()
        }
    );
}

#[test]
fn wrong_argument_count() {
    let err = run_source("define f(a, b) { a; } define main() { f(1); }").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::ArityMismatch {
            function: "f".to_string(),
            expected: 2,
            found: 1,
        }
    );
}

#[test]
fn assignment_returns_value_and_is_idempotent() {
    let mut interpreter = Interpreter::new();
    let functions = FunctionTable::new();
    let assign = Expr::assign("x", Expr::integer(5));

    assert_eq!(
        interpreter.evaluate(&assign, &functions).unwrap(),
        Value::Int(5)
    );
    let depth = interpreter.env().depth();
    assert_eq!(
        interpreter.evaluate(&assign, &functions).unwrap(),
        Value::Int(5)
    );
    assert_eq!(interpreter.env().depth(), depth);
    assert_eq!(interpreter.env().lookup("x"), Some(&Value::Int(5)));
}

#[test]
fn parameters_are_invisible_after_return() {
    let source = "
define f(p) { p; }
define main() {
  f(1);
  p;
}
";
    let err = run_source(source).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundIdentifier {
            name: "p".to_string()
        }
    );
}

#[test]
fn scope_is_restored_after_failing_call() {
    let mut interpreter = Interpreter::new();
    let err = run_with(
        "define boom(x) { x / 0; } define main() { boom(1); }",
        &mut interpreter,
    )
    .unwrap_err();
    assert_eq!(err.backtrace, vec!["boom".to_string(), "main".to_string()]);
    assert_eq!(interpreter.env().depth(), 1);
    assert_eq!(interpreter.call_stack.depth(), 0);
}

#[test]
fn failed_run_leaves_nothing_for_the_next() {
    let mut interpreter = Interpreter::new();
    let err = run_with(
        "global leaked = 1; global boom = 1 / 0; define main() { 0; }",
        &mut interpreter,
    )
    .unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::Arithmetic(ArithmeticError::DivisionByZero)
    );

    let err = run_with("define main() { leaked; }", &mut interpreter).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundIdentifier {
            name: "leaked".to_string()
        }
    );
}

#[test]
fn each_run_starts_from_the_seed() {
    let mut env = Environment::new();
    env.define_global("base", Value::Int(10));
    let mut interpreter = Interpreter::builder().env(env).build();

    let first = "global extra = 5; define main() { base = base + extra; base; }";
    assert_eq!(run_with(first, &mut interpreter).unwrap(), Value::Int(15));
    assert_eq!(interpreter.env().lookup("extra"), Some(&Value::Int(5)));

    let second = "define main() { base; }";
    assert_eq!(run_with(second, &mut interpreter).unwrap(), Value::Int(10));
    assert_eq!(interpreter.env().lookup("extra"), None);
}

#[test]
fn call_depth_is_reset_between_runs() {
    let mut interpreter = Interpreter::builder().max_call_depth(Some(50)).build();
    let runaway = "define main() { main(); }";
    assert!(run_with(runaway, &mut interpreter).is_err());
    assert_eq!(interpreter.call_stack.depth(), 0);

    let bounded = "
define down(n) { if (n == 0) 0; else down(n - 1); }
define main() { down(40); }
";
    assert_eq!(run_with(bounded, &mut interpreter).unwrap(), Value::Int(0));
}

#[test]
fn globals_are_initialized_in_order() {
    let source = "
global a = 2;
global b = a * 10;
global c = twice(b);
define twice(n) { n + n; }
define main() { a + b + c; }
";
    assert_eq!(run_source(source).unwrap(), Value::Int(62));
}

#[test]
fn global_assignment_from_function() {
    let source = "
global counter = 0;
define bump() { counter = counter + 1; }
define main() {
  bump();
  bump();
  counter;
}
";
    assert_eq!(run_source(source).unwrap(), Value::Int(2));
}

#[test]
fn while_loop_sums() {
    let source = "
define main() {
  i = 0;
  sum = 0;
  while (i <= 10) {
    sum = sum + i;
    i = i + 1;
  }
  sum;
}
";
    assert_eq!(run_source(source).unwrap(), Value::Int(55));
}

#[test]
fn while_yields_true() {
    assert_eq!(
        run_source("define main() { while (false) 1; }").unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn if_without_else_yields_unit() {
    assert_eq!(
        run_source("define main() { if (1 > 2) 1; }").unwrap(),
        Value::Unit
    );
    assert_eq!(run_source("define main() { }").unwrap(), Value::Unit);
}

#[test]
fn condition_must_be_bool() {
    let err = run_source("define main() { if (1) 2; }").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeMismatch {
            expected: "bool",
            found: "int",
        }
    );
    assert!(run_source("define main() { while (0) 1; }").is_err());
}

#[test]
fn blocks_share_the_enclosing_scope() {
    let source = "define main() { { inner = 3; } inner; }";
    assert_eq!(run_source(source).unwrap(), Value::Int(3));
}

#[test]
fn array_literal_evaluates_items() {
    assert_eq!(
        eval_expr("[1 + 1, true, []]").unwrap(),
        Value::Array(vec![Value::Int(2), Value::Bool(true), Value::Array(vec![])])
    );
}

#[test]
fn labelled_call_binds_by_name() {
    let source = "
define sub(a, b) { a - b; }
define main() { sub[b = 1, a = 10]; }
";
    assert_eq!(run_source(source).unwrap(), Value::Int(9));
}

#[test]
fn labelled_call_rejects_bad_labels() {
    let unknown = run_source("define f(a) { a; } define main() { f[z = 1]; }").unwrap_err();
    assert_eq!(
        unknown.kind,
        EvalErrorKind::InvalidLabel {
            function: "f".to_string(),
            label: "z".to_string(),
        }
    );

    let repeated =
        run_source("define f(a, b) { a; } define main() { f[a = 1, a = 2]; }").unwrap_err();
    assert!(matches!(repeated.kind, EvalErrorKind::InvalidLabel { .. }));

    let missing = run_source("define f(a, b) { a; } define main() { f[a = 1]; }").unwrap_err();
    assert_eq!(
        missing.kind,
        EvalErrorKind::ArityMismatch {
            function: "f".to_string(),
            expected: 2,
            found: 1,
        }
    );
}

const CALLER_LOCAL: &str = "
define peek() { secret; }
define main() {
  secret = 7;
  peek();
}
";

#[test]
fn dynamic_scoping_sees_caller_locals() {
    assert_eq!(run_source(CALLER_LOCAL).unwrap(), Value::Int(7));
}

#[test]
fn dynamic_scoping_assigns_caller_locals() {
    let source = "
define reset() { total = 0; }
define main() {
  total = 5;
  reset();
  total;
}
";
    assert_eq!(run_source(source).unwrap(), Value::Int(0));
}

#[test]
fn lexical_scoping_hides_caller_locals() {
    let mut interpreter = Interpreter::builder().scoping(Scoping::Lexical).build();
    assert_eq!(interpreter.scoping(), Scoping::Lexical);
    let err = run_with(CALLER_LOCAL, &mut interpreter).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundIdentifier {
            name: "secret".to_string()
        }
    );

    let globals = "global g = 4; define get() { g; } define main() { get(); }";
    let mut interpreter = Interpreter::builder().scoping(Scoping::Lexical).build();
    assert_eq!(run_with(globals, &mut interpreter).unwrap(), Value::Int(4));
}

#[test]
fn seeded_environment() {
    let mut env = Environment::new();
    env.define_global("limit", Value::Int(3));
    let mut interpreter = Interpreter::builder().env(env).build();
    assert_eq!(
        run_with("define main() { limit * 2; }", &mut interpreter).unwrap(),
        Value::Int(6)
    );
}

#[test]
fn deep_recursion_within_limit() {
    let source = "
define count(n) {
  if (n == 0) 0; else 1 + count(n - 1);
}
define main() { count(5000); }
";
    assert_eq!(run_source(source).unwrap(), Value::Int(5000));
}

#[test]
fn runaway_recursion_is_reported() {
    let source = "define forever(n) { forever(n + 1); } define main() { forever(0); }";
    let mut interpreter = Interpreter::builder().max_call_depth(Some(200)).build();
    let err = run_with(source, &mut interpreter).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::StackExhausted { depth: 200 });
    assert_eq!(err.backtrace.len(), 200);
    assert_eq!(err.backtrace.last().map(String::as_str), Some("main"));
}

#[test]
fn default_limit_stops_runaway_recursion() {
    let err = run_source("define main() { main(); }").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::StackExhausted {
            depth: crate::DEFAULT_MAX_CALL_DEPTH
        }
    );
}

#[test]
fn hand_built_program() {
    let program = Program::new(vec![FunctionDefinition::new(
        "main",
        vec![],
        Expr::block(vec![Expr::add(Expr::integer(40), Expr::integer(2))]),
    )
    .into()]);
    assert_eq!(run(&program).unwrap(), Value::Int(42));
}

proptest! {
    #[test]
    fn evaluation_matches_host_arithmetic(a in -1000i64..1000, b in -1000i64..1000, c in 1i64..1000) {
        let source = format!("({a} + {b}) * {c} - {a} / {c}");
        let expected = (a + b) * c - a / c;
        prop_assert_eq!(eval_expr(&source).unwrap(), Value::Int(expected));
    }
}
