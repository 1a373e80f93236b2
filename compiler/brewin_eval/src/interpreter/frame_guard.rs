//! Frame ownership for the interpreter.
//!
//! `if`, `for` and function calls each open exactly one frame, and that
//! frame belongs to a [`FrameGuard`]. The guard remembers how deep the stack
//! was when it opened and unwinds back to that depth on drop. A `return`, an
//! error propagated with `?` and a panic all leave the stack as they found it,
//! along with any frames a nested construct failed to release.
//!
//! ```text
//! interpreter.with_frame(|frame| frame.exec_block(statements))
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;

/// An interpreter with one extra frame open. Closes it on drop.
pub struct FrameGuard<'guard, 'interp> {
    interpreter: &'guard mut Interpreter<'interp>,
    /// Stack depth before the frame was pushed.
    floor: usize,
}

impl Drop for FrameGuard<'_, '_> {
    fn drop(&mut self) {
        self.interpreter.env.unwind_to(self.floor);
    }
}

impl<'interp> Deref for FrameGuard<'_, 'interp> {
    type Target = Interpreter<'interp>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for FrameGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Push a frame owned by the returned guard.
    pub fn open_frame(&mut self) -> FrameGuard<'_, 'a> {
        let floor = self.env.depth();
        self.env.push_scope();
        FrameGuard {
            interpreter: self,
            floor,
        }
    }

    /// Run `f` with one extra frame open.
    pub fn with_frame<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut FrameGuard<'_, 'a>) -> T,
    {
        let mut frame = self.open_frame();
        f(&mut frame)
    }
}
