//! Tree-walking interpreter for Brewin.
//!
//! # Architecture
//!
//! - `exec` runs statements and threads [`Completion`] back up so that an
//!   early `return` unwinds through every enclosing block.
//! - `eval` evaluates expressions and implements the call protocol.
//! - `builtins` implements `print`, `inputi` and `inputs`.
//! - `frame_guard` owns every frame push. `if`, `for` and calls each open
//!   one frame through a guard that closes it when dropped.

mod builder;
mod builtins;
mod eval;
mod exec;
mod frame_guard;

pub use builder::InterpreterBuilder;
pub use exec::{Completion, ExecResult};
pub use frame_guard::FrameGuard;

use brewin_ir::{Name, StringInterner};

use crate::errors::{missing_main, EvalResult};
use crate::function_table::FunctionTable;
use crate::input_handler::SharedInputHandler;
use crate::print_handler::SharedPrintHandler;
use crate::Environment;

/// Interpreter for one program run.
///
/// Owns the scope stack; borrows the program and interner for its lifetime.
pub struct Interpreter<'a> {
    pub(crate) interner: &'a StringInterner,
    pub(crate) functions: FunctionTable<'a>,
    pub(crate) env: Environment,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) input_handler: SharedInputHandler,
}

impl<'a> Interpreter<'a> {
    /// Run the program: invoke `main()` and discard its result.
    pub fn run(&mut self) -> EvalResult<()> {
        let main = self
            .functions
            .resolve(Name::MAIN, 0)
            .map_err(|_| missing_main())?;
        self.invoke(main, Vec::new())?;
        Ok(())
    }

    /// Resolve an interned name for diagnostics.
    #[inline]
    pub(crate) fn name_str(&self, name: Name) -> &'a str {
        self.interner.lookup(name)
    }
}
