//! Top-level items.

use crate::Name;

use super::Stmt;

/// A function definition.
///
/// `(name, arity)` identifies a definition; several definitions may share a
/// name as long as their parameter counts differ.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionDef {
    pub name: Name,
    pub params: Vec<Name>,
    pub body: Vec<Stmt>,
}

impl FunctionDef {
    pub fn new(name: Name, params: Vec<Name>, body: Vec<Stmt>) -> Self {
        FunctionDef { name, params, body }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// A whole program: its function definitions in source order.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Program {
    pub functions: Vec<FunctionDef>,
}

impl Program {
    pub fn new(functions: Vec<FunctionDef>) -> Self {
        Program { functions }
    }
}
