//! Brewin IR - program representation consumed by the evaluator.
//!
//! This crate contains the data structures shared between the host that loads
//! a parsed program and the interpreter core:
//! - Names for interned identifiers
//! - An owning string interner
//! - AST nodes (`Program`, `FunctionDef`, `Stmt`, `Expr`)
//! - Binary and unary operators
//!
//! The AST is produced once by the loader and is read-only afterwards. The
//! evaluator never constructs or mutates nodes.

pub mod ast;
mod interner;
mod name;

pub use ast::{BinaryOp, CallExpr, Expr, FunctionDef, Program, Stmt, UnaryOp};
pub use interner::{InternError, StringInterner, StringLookup};
pub use name::Name;
