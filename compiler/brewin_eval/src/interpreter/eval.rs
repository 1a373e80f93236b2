//! Expression evaluation and the function call protocol.

use brewin_ir::{CallExpr, Expr, FunctionDef, Name};

use super::{Completion, Interpreter};
use crate::environment::DeclareError;
use crate::errors::{
    arity_mismatch, duplicate_definition, undefined_function, undefined_variable, EvalResult,
};
use crate::function_table::LookupError;
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::Value;

impl Interpreter<'_> {
    pub(crate) fn eval(&mut self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Int(n) => Ok(Value::Int(*n)),
            Expr::Str(s) => Ok(Value::Str(s.clone())),
            Expr::Bool(b) => Ok(Value::Bool(*b)),
            Expr::Nil => Ok(Value::Nil),
            Expr::Var(name) => self
                .env
                .lookup(*name)
                .cloned()
                .ok_or_else(|| undefined_variable(self.name_str(*name))),
            Expr::Call(call) => self.eval_call(call),
            // Both operands, left first, no short-circuit for && and ||.
            Expr::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                evaluate_binary(&left, &right, *op)
            }
            Expr::Unary { op, operand } => {
                let value = self.eval(operand)?;
                evaluate_unary(&value, *op)
            }
        }
    }

    /// Resolve and perform a call. Built-ins win over user functions.
    pub(crate) fn eval_call(&mut self, call: &CallExpr) -> EvalResult {
        match call.name {
            Name::PRINT => return self.builtin_print(&call.args),
            Name::INPUTI | Name::INPUTS => return self.builtin_input(call),
            _ => {}
        }

        let def = match self.functions.resolve(call.name, call.arity()) {
            Ok(def) => def,
            Err(LookupError::UnknownName) => {
                return Err(undefined_function(self.name_str(call.name)))
            }
            Err(LookupError::NoMatchingArity) => {
                return Err(arity_mismatch(self.name_str(call.name), call.arity()))
            }
        };

        // Arguments are evaluated before the callee's frame opens.
        let args = call
            .args
            .iter()
            .map(|arg| self.eval(arg))
            .collect::<EvalResult<Vec<_>>>()?;
        self.invoke(def, args)
    }

    /// Bind parameters in a fresh frame and run the body.
    ///
    /// Yields the returned value, or `nil` when the body falls off the end.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(function = self.name_str(def.name), arity = def.arity())
    )]
    pub(crate) fn invoke(&mut self, def: &FunctionDef, args: Vec<Value>) -> EvalResult {
        self.with_frame(|callee| {
            for (&param, value) in def.params.iter().zip(args) {
                callee.env.declare(param, value).map_err(
                    |DeclareError::AlreadyDeclared| duplicate_definition(callee.name_str(param)),
                )?;
            }
            match callee.exec_block(&def.body)? {
                Completion::Return(value) => Ok(value),
                Completion::Normal => Ok(Value::Nil),
            }
        })
    }
}
