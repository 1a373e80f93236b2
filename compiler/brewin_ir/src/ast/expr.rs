//! Expression nodes.

use crate::Name;

use super::{BinaryOp, UnaryOp};

/// A call by name: `name(args...)`.
///
/// Shared by the call statement and the call expression. Resolution happens
/// at run time against the built-ins first, then the function table keyed by
/// `(name, args.len())`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CallExpr {
    pub name: Name,
    pub args: Vec<Expr>,
}

impl CallExpr {
    pub fn new(name: Name, args: Vec<Expr>) -> Self {
        CallExpr { name, args }
    }

    /// Number of arguments at the call site.
    #[inline]
    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expr {
    /// Integer literal.
    Int(i64),
    /// String literal.
    Str(String),
    /// Boolean literal.
    Bool(bool),
    /// `nil` literal.
    Nil,
    /// Variable reference.
    Var(Name),
    /// Function call used as a value.
    Call(CallExpr),
    /// `left op right`, both sides always evaluated, left first.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `op operand`.
    Unary { op: UnaryOp, operand: Box<Expr> },
}

impl Expr {
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn call(name: Name, args: Vec<Expr>) -> Self {
        Expr::Call(CallExpr::new(name, args))
    }

    /// The parser's discriminant for this node.
    pub fn elem_type(&self) -> &'static str {
        match self {
            Expr::Int(_) => "int",
            Expr::Str(_) => "string",
            Expr::Bool(_) => "bool",
            Expr::Nil => "nil",
            Expr::Var(_) => "var",
            Expr::Call(_) => "fcall",
            Expr::Binary { op, .. } => op.as_symbol(),
            Expr::Unary { op, .. } => op.as_symbol(),
        }
    }
}
