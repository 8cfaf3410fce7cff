use toys_ir::{Expr, FunctionDefinition, GlobalVariableDefinition, Program};

use super::*;
use crate::errors::EvalErrorKind;

fn function(name: &str) -> FunctionDefinition {
    FunctionDefinition::new(name, vec![], Expr::block(vec![]))
}

#[test]
fn registers_functions_but_not_globals() {
    let program = Program::new(vec![
        function("main").into(),
        GlobalVariableDefinition::new("g", Expr::integer(1)).into(),
        function("helper").into(),
    ]);
    let table = FunctionTable::from_program(&program).unwrap();
    assert_eq!(table.len(), 2);
    assert!(table.get("main").is_some());
    assert!(table.get("helper").is_some());
    assert!(table.get("g").is_none());
}

#[test]
fn duplicate_name_is_rejected() {
    let program = Program::new(vec![function("f").into(), function("f").into()]);
    let err = FunctionTable::from_program(&program).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::DuplicateFunction {
            name: "f".to_string()
        }
    );
}

#[test]
fn empty_table() {
    let table = FunctionTable::new();
    assert!(table.is_empty());
    assert!(table.get("main").is_none());
}
