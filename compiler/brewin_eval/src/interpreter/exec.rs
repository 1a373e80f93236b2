//! Statement execution.
//!
//! Each statement completes normally or signals a `return`. The signal is
//! an ordinary value threaded back through every enclosing block, so the
//! frame guards on the way out pop their frames as the stack unwinds.

use tracing::trace;

use brewin_ir::{Expr, Name, Stmt};

use super::Interpreter;
use crate::environment::{AssignError, DeclareError};
use crate::errors::{
    duplicate_definition, for_clause_not_assignment, non_bool_condition, undeclared_assignment,
    EvalResult,
};
use crate::Value;

/// How a statement or block finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Ran to the end; execution continues with the next statement.
    Normal,
    /// A `return` executed; skip everything up to the enclosing call.
    Return(Value),
}

/// Result of executing a statement or block.
pub type ExecResult = EvalResult<Completion>;

impl Interpreter<'_> {
    /// Execute statements in order, stopping at the first `return`.
    ///
    /// Runs in the current frame; callers open one first when needed.
    pub(crate) fn exec_block(&mut self, statements: &[Stmt]) -> ExecResult {
        for stmt in statements {
            if let Completion::Return(value) = self.exec_stmt(stmt)? {
                return Ok(Completion::Return(value));
            }
        }
        Ok(Completion::Normal)
    }

    pub(crate) fn exec_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        trace!(stmt = stmt.elem_type(), depth = self.env.depth(), "exec");
        match stmt {
            Stmt::Call(call) => {
                self.eval_call(call)?;
                Ok(Completion::Normal)
            }
            Stmt::Assign { name, expr } => {
                self.exec_assign(*name, expr)?;
                Ok(Completion::Normal)
            }
            Stmt::VarDef { name } => {
                self.exec_var_def(*name)?;
                Ok(Completion::Normal)
            }
            Stmt::If {
                condition,
                statements,
                else_statements,
            } => self.exec_if(condition, statements, else_statements.as_deref()),
            Stmt::For {
                init,
                condition,
                update,
                statements,
            } => self.exec_for(init, condition, update, statements),
            Stmt::Return { expr } => {
                let value = match expr {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Nil,
                };
                Ok(Completion::Return(value))
            }
        }
    }

    /// `name = expr;`: evaluate fully, then overwrite the visible binding.
    fn exec_assign(&mut self, name: Name, expr: &Expr) -> EvalResult<()> {
        let value = self.eval(expr)?;
        self.env
            .assign(name, value)
            .map_err(|AssignError::Undefined| undeclared_assignment(self.name_str(name)))
    }

    /// `var name;`: bind `0` in the innermost frame.
    fn exec_var_def(&mut self, name: Name) -> EvalResult<()> {
        self.env
            .declare(name, Value::Int(0))
            .map_err(|DeclareError::AlreadyDeclared| duplicate_definition(self.name_str(name)))
    }

    /// The condition and whichever branch runs share one frame.
    fn exec_if(
        &mut self,
        condition: &Expr,
        statements: &[Stmt],
        else_statements: Option<&[Stmt]>,
    ) -> ExecResult {
        self.with_frame(|frame| {
            if frame.eval_condition(condition, "if")? {
                frame.exec_block(statements)
            } else if let Some(else_statements) = else_statements {
                frame.exec_block(else_statements)
            } else {
                Ok(Completion::Normal)
            }
        })
    }

    /// One frame for the whole loop, not one per iteration. Both clauses are
    /// checked before the initializer runs.
    fn exec_for(
        &mut self,
        init: &Stmt,
        condition: &Expr,
        update: &Stmt,
        statements: &[Stmt],
    ) -> ExecResult {
        let (init_name, init_expr) = for_clause(init, "initializer")?;
        let (update_name, update_expr) = for_clause(update, "update")?;
        self.with_frame(|frame| {
            frame.exec_assign(init_name, init_expr)?;
            while frame.eval_condition(condition, "for")? {
                if let Completion::Return(value) = frame.exec_block(statements)? {
                    return Ok(Completion::Return(value));
                }
                frame.exec_assign(update_name, update_expr)?;
            }
            Ok(Completion::Normal)
        })
    }

    /// Evaluate an `if`/`for` condition, which must produce a bool.
    fn eval_condition(&mut self, condition: &Expr, construct: &'static str) -> EvalResult<bool> {
        match self.eval(condition)? {
            Value::Bool(b) => Ok(b),
            other => Err(non_bool_condition(construct, other.value_type())),
        }
    }
}

/// Split a `for` initializer or update into its assignment parts.
fn for_clause<'s>(stmt: &'s Stmt, clause: &'static str) -> EvalResult<(Name, &'s Expr)> {
    match stmt {
        Stmt::Assign { name, expr } => Ok((*name, expr)),
        other => Err(for_clause_not_assignment(clause, other.elem_type())),
    }
}
