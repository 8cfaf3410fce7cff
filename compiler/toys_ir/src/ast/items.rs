//! Top-level definitions.

use super::expr::Expr;

/// `define name(params) { body }`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionDefinition {
    pub name: String,
    pub params: Vec<String>,
    pub body: Expr,
}

impl FunctionDefinition {
    pub fn new(name: impl Into<String>, params: Vec<String>, body: Expr) -> Self {
        FunctionDefinition {
            name: name.into(),
            params,
            body,
        }
    }
}

/// `global name = initializer;`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GlobalVariableDefinition {
    pub name: String,
    pub initializer: Expr,
}

impl GlobalVariableDefinition {
    pub fn new(name: impl Into<String>, initializer: Expr) -> Self {
        GlobalVariableDefinition {
            name: name.into(),
            initializer,
        }
    }
}

/// A top-level definition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TopLevel {
    Function(FunctionDefinition),
    Global(GlobalVariableDefinition),
}

impl From<FunctionDefinition> for TopLevel {
    fn from(def: FunctionDefinition) -> Self {
        TopLevel::Function(def)
    }
}

impl From<GlobalVariableDefinition> for TopLevel {
    fn from(def: GlobalVariableDefinition) -> Self {
        TopLevel::Global(def)
    }
}

/// A parsed program: top-level definitions in source order.
///
/// Source order matters only for global initialisation; every function is
/// visible to every other regardless of where it is defined.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Program {
    pub definitions: Vec<TopLevel>,
}

impl Program {
    pub fn new(definitions: Vec<TopLevel>) -> Self {
        Program { definitions }
    }

    /// Function definitions, in source order.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            TopLevel::Function(function) => Some(function),
            TopLevel::Global(_) => None,
        })
    }

    /// Global variable definitions, in source order.
    pub fn globals(&self) -> impl Iterator<Item = &GlobalVariableDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            TopLevel::Global(global) => Some(global),
            TopLevel::Function(_) => None,
        })
    }
}
