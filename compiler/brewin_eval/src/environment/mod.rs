//! Environment for variable scoping in the interpreter.
//!
//! A single stack of frames, innermost last. Blocks and function calls push
//! a frame on entry and pop it on exit. Lookup and assignment search every
//! frame from the innermost outwards, so a callee sees the variables of the
//! functions that called it.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use brewin_ir::Name;

use crate::Value;

/// Error returned by [`Environment::assign`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// Variable not found in any frame.
    Undefined,
}

/// Error returned by [`Environment::declare`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclareError {
    /// The innermost frame already binds this name.
    AlreadyDeclared,
}

/// One block's bindings.
type Frame = FxHashMap<Name, Value>;

/// Variable storage for one interpreter run.
pub struct Environment {
    /// All frames, innermost last. Never empty.
    frames: Vec<Frame>,
}

impl Environment {
    /// Create an environment with a single root frame.
    pub fn new() -> Self {
        Environment {
            frames: vec![Frame::default()],
        }
    }

    /// Number of frames, root included.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Push a new empty frame.
    #[inline]
    pub fn push_scope(&mut self) {
        self.frames.push(Frame::default());
    }

    /// Pop the innermost frame. The root frame is never popped.
    #[inline]
    pub fn pop_scope(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Pop frames until at most `depth` remain.
    pub fn unwind_to(&mut self, depth: usize) {
        while self.depth() > depth.max(1) {
            self.pop_scope();
        }
    }

    /// Look up a variable, innermost frame first.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<&Value> {
        self.frames.iter().rev().find_map(|frame| frame.get(&name))
    }

    /// Overwrite the innermost binding of `name`.
    #[inline]
    pub fn assign(&mut self, name: Name, value: Value) -> Result<(), AssignError> {
        let slot = self
            .frames
            .iter_mut()
            .rev()
            .find_map(|frame| frame.get_mut(&name))
            .ok_or(AssignError::Undefined)?;
        *slot = value;
        Ok(())
    }

    /// Bind `name` in the innermost frame.
    ///
    /// Shadowing an outer frame's binding is allowed; redeclaring within the
    /// same frame is not.
    pub fn declare(&mut self, name: Name, value: Value) -> Result<(), DeclareError> {
        let innermost = self.frames.len().saturating_sub(1);
        match self.frames[innermost].entry(name) {
            Entry::Occupied(_) => Err(DeclareError::AlreadyDeclared),
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(())
            }
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
