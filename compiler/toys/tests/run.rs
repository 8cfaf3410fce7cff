#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;
use toys::{
    init_tracing, parse, run_source, run_source_with, Environment, Error, EvalErrorKind,
    InterpreterBuilder, Scoping, Value,
};

#[test]
fn factorial_program() {
    init_tracing();
    assert_eq!(
        run_source(include_str!("programs/fact.toys")).unwrap(),
        Value::Int(120)
    );
}

#[test]
fn fibonacci_program() {
    assert_eq!(
        run_source(include_str!("programs/fib.toys")).unwrap(),
        Value::Int(6765)
    );
}

#[test]
fn labelled_arguments_program() {
    assert_eq!(
        run_source(include_str!("programs/power.toys")).unwrap(),
        Value::Int(1024)
    );
}

#[test]
fn parse_only() {
    let program = parse(include_str!("programs/fact.toys")).unwrap();
    let names: Vec<_> = program.functions().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["main", "fact"]);
}

#[test]
fn syntax_errors_surface() {
    let err = run_source("define main() { 1 + ; }").unwrap_err();
    match err {
        Error::Syntax(syntax) => {
            assert_eq!(syntax.line, 1);
            assert_eq!(syntax.column, 21);
        }
        Error::Eval(other) => panic!("expected a syntax error, got {other}"),
    }
}

#[test]
fn evaluation_errors_surface() {
    let err = run_source("define main() { 1 / 0; }").unwrap_err();
    assert!(matches!(err, Error::Eval(ref eval) if matches!(eval.kind, EvalErrorKind::Arithmetic(_))));
    assert_eq!(err.to_string(), "division by zero");
}

#[test]
fn missing_entry_point() {
    let err = run_source("global x = 1;").unwrap_err();
    assert!(matches!(err, Error::Eval(ref eval) if eval.kind == EvalErrorKind::MissingEntryPoint));
}

#[test]
fn builder_configuration_is_forwarded() {
    let source = "define f() { local; } define main() { local = 1; f(); }";
    assert_eq!(run_source(source).unwrap(), Value::Int(1));

    let lexical = InterpreterBuilder::new().scoping(Scoping::Lexical);
    assert!(run_source_with(source, lexical).is_err());

    let mut env = Environment::new();
    env.define_global("seed", Value::Int(41));
    let seeded = InterpreterBuilder::new().env(env);
    assert_eq!(
        run_source_with("define main() { seed + 1; }", seeded).unwrap(),
        Value::Int(42)
    );

    let shallow = InterpreterBuilder::new().max_call_depth(Some(3));
    let err = run_source_with(include_str!("programs/fact.toys"), shallow).unwrap_err();
    assert!(matches!(err, Error::Eval(ref eval) if eval.kind == EvalErrorKind::StackExhausted { depth: 3 }));
}
