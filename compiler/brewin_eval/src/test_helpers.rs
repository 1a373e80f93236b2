//! Shorthand for building ASTs in tests.

use std::cell::RefCell;

use brewin_ir::{BinaryOp, Expr, FunctionDef, Name, Program, Stmt, StringInterner, UnaryOp};

use crate::{buffer_handler, buffer_input, EvalResult, InterpreterBuilder};

/// Owns the interner that every name in a test program is interned into.
pub(crate) struct Ast {
    interner: RefCell<StringInterner>,
}

/// Outcome of running a test program: the run result and everything printed.
pub(crate) struct RunOutput {
    pub(crate) result: EvalResult<()>,
    pub(crate) output: String,
}

impl RunOutput {
    pub(crate) fn lines(&self) -> Vec<&str> {
        self.output.lines().collect()
    }
}

impl Ast {
    pub(crate) fn new() -> Self {
        Ast {
            interner: RefCell::new(StringInterner::new()),
        }
    }

    pub(crate) fn name(&self, s: &str) -> Name {
        self.interner.borrow_mut().intern(s)
    }

    pub(crate) fn var(&self, s: &str) -> Expr {
        Expr::Var(self.name(s))
    }

    pub(crate) fn call(&self, name: &str, args: Vec<Expr>) -> Expr {
        Expr::call(self.name(name), args)
    }

    pub(crate) fn call_stmt(&self, name: &str, args: Vec<Expr>) -> Stmt {
        Stmt::call(self.name(name), args)
    }

    pub(crate) fn print(&self, args: Vec<Expr>) -> Stmt {
        self.call_stmt("print", args)
    }

    pub(crate) fn var_def(&self, name: &str) -> Stmt {
        Stmt::VarDef {
            name: self.name(name),
        }
    }

    pub(crate) fn assign(&self, name: &str, expr: Expr) -> Stmt {
        Stmt::assign(self.name(name), expr)
    }

    /// `var name; name = expr;`
    pub(crate) fn define(&self, name: &str, expr: Expr) -> [Stmt; 2] {
        [self.var_def(name), self.assign(name, expr)]
    }

    pub(crate) fn func(&self, name: &str, params: &[&str], body: Vec<Stmt>) -> FunctionDef {
        FunctionDef::new(
            self.name(name),
            params.iter().map(|p| self.name(p)).collect(),
            body,
        )
    }

    pub(crate) fn main(&self, body: Vec<Stmt>) -> FunctionDef {
        self.func("main", &[], body)
    }

    pub(crate) fn run(&self, functions: Vec<FunctionDef>) -> RunOutput {
        self.run_with_input(functions, &[])
    }

    pub(crate) fn run_with_input(&self, functions: Vec<FunctionDef>, input: &[&str]) -> RunOutput {
        let program = Program::new(functions);
        let interner = self.interner.borrow();
        let printer = buffer_handler();
        let mut interpreter = InterpreterBuilder::new(&interner, &program)
            .print_handler(printer.clone())
            .input_handler(buffer_input(input.iter().copied()))
            .build();
        let result = interpreter.run();
        RunOutput {
            result,
            output: printer.get_output(),
        }
    }
}

pub(crate) fn int(n: i64) -> Expr {
    Expr::Int(n)
}

pub(crate) fn string(s: &str) -> Expr {
    Expr::Str(s.to_string())
}

pub(crate) fn boolean(b: bool) -> Expr {
    Expr::Bool(b)
}

pub(crate) fn bin(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::binary(op, left, right)
}

pub(crate) fn unary(op: UnaryOp, operand: Expr) -> Expr {
    Expr::unary(op, operand)
}

pub(crate) fn ret(expr: Expr) -> Stmt {
    Stmt::Return { expr: Some(expr) }
}

pub(crate) fn if_stmt(condition: Expr, statements: Vec<Stmt>, else_statements: Option<Vec<Stmt>>) -> Stmt {
    Stmt::If {
        condition,
        statements,
        else_statements,
    }
}

pub(crate) fn for_stmt(init: Stmt, condition: Expr, update: Stmt, statements: Vec<Stmt>) -> Stmt {
    Stmt::For {
        init: Box::new(init),
        condition,
        update: Box::new(update),
        statements,
    }
}
