//! Function call evaluation.

use toys_ir::{Expr, FunctionDefinition, LabelledArg};

use super::Interpreter;
use crate::errors::{arity_mismatch, invalid_label, undefined_function, EvalError};
use crate::function_table::FunctionTable;
use crate::value::Value;

impl Interpreter {
    /// `name(args...)`: arguments are evaluated left to right in the
    /// caller's scope, then bound to parameters by position.
    pub(super) fn eval_call(
        &mut self,
        name: &str,
        args: &[Expr],
        functions: &FunctionTable<'_>,
    ) -> Result<Value, EvalError> {
        let function = functions.get(name).ok_or_else(|| undefined_function(name))?;
        let values = args
            .iter()
            .map(|arg| self.evaluate(arg, functions))
            .collect::<Result<Vec<_>, _>>()?;
        self.call_function(function, values, functions)
    }

    /// `name[label = arg, ...]`: arguments are evaluated in source order,
    /// then bound to the parameters their labels name.
    pub(super) fn eval_labelled_call(
        &mut self,
        name: &str,
        args: &[LabelledArg],
        functions: &FunctionTable<'_>,
    ) -> Result<Value, EvalError> {
        let function = functions.get(name).ok_or_else(|| undefined_function(name))?;

        let mut slots: Vec<Option<Value>> = vec![None; function.params.len()];
        for arg in args {
            let value = self.evaluate(&arg.value, functions)?;
            let index = function
                .params
                .iter()
                .position(|param| *param == arg.label)
                .ok_or_else(|| invalid_label(name, &arg.label))?;
            if slots[index].replace(value).is_some() {
                return Err(invalid_label(name, &arg.label));
            }
        }

        let values = slots
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| arity_mismatch(name, function.params.len(), args.len()))?;
        self.call_function(function, values, functions)
    }

    /// Bind `args` to the parameters of `function` in a new scope and
    /// evaluate its body.
    ///
    /// The caller's scope is restored whether or not the body succeeds.
    /// An error escaping the body carries a backtrace of the calls that
    /// were active when it was raised.
    #[tracing::instrument(level = "debug", skip_all, fields(function = %function.name, depth = self.call_stack.depth()))]
    pub(crate) fn call_function(
        &mut self,
        function: &FunctionDefinition,
        args: Vec<Value>,
        functions: &FunctionTable<'_>,
    ) -> Result<Value, EvalError> {
        if args.len() != function.params.len() {
            return Err(arity_mismatch(
                &function.name,
                function.params.len(),
                args.len(),
            ));
        }
        self.call_stack.push(&function.name)?;

        let parent = self.scoping.parent_for_call(&self.env);
        let frame = self.env.enter(parent);
        for (param, value) in function.params.iter().zip(args) {
            self.env.define(param.as_str(), value);
        }

        let result = match self.evaluate(&function.body, functions) {
            Ok(value) => Ok(value),
            Err(err) => Err(self.call_stack.attach_backtrace(err)),
        };

        self.env.leave(frame);
        self.call_stack.pop();
        result
    }
}
