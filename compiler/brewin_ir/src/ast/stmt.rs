//! Statement nodes.

use crate::Name;

use super::{CallExpr, Expr};

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Stmt {
    /// Call whose result is discarded.
    Call(CallExpr),
    /// `name = expr;`. The target must already be declared.
    Assign { name: Name, expr: Expr },
    /// `var name;`. Declares in the innermost block.
    VarDef { name: Name },
    /// `if (condition) { statements } else { else_statements }`.
    If {
        condition: Expr,
        statements: Vec<Stmt>,
        else_statements: Option<Vec<Stmt>>,
    },
    /// `for (init; condition; update) { statements }`.
    ///
    /// `init` and `update` are whatever the parser produced; the evaluator
    /// rejects anything but an assignment.
    For {
        init: Box<Stmt>,
        condition: Expr,
        update: Box<Stmt>,
        statements: Vec<Stmt>,
    },
    /// `return;` or `return expr;`.
    Return { expr: Option<Expr> },
}

impl Stmt {
    pub fn call(name: Name, args: Vec<Expr>) -> Self {
        Stmt::Call(CallExpr::new(name, args))
    }

    pub fn assign(name: Name, expr: Expr) -> Self {
        Stmt::Assign { name, expr }
    }

    /// The parser's discriminant for this node.
    pub fn elem_type(&self) -> &'static str {
        match self {
            Stmt::Call(_) => "fcall",
            Stmt::Assign { .. } => "=",
            Stmt::VarDef { .. } => "vardef",
            Stmt::If { .. } => "if",
            Stmt::For { .. } => "for",
            Stmt::Return { .. } => "return",
        }
    }
}
