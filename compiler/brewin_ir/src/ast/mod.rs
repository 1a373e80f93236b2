//! AST node types.
//!
//! The external parser produces these nodes; the evaluator only reads them.
//! Each node kind reports the discriminant the parser used for it via
//! `elem_type()`, which diagnostics and tracing print verbatim.

mod expr;
mod items;
mod operators;
mod stmt;

pub use expr::{CallExpr, Expr};
pub use items::{FunctionDef, Program};
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::Stmt;

#[cfg(test)]
mod tests;
