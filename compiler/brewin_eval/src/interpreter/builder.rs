//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use brewin_ir::{Program, StringInterner};

use super::Interpreter;
use crate::function_table::FunctionTable;
use crate::input_handler::{stdin_handler, SharedInputHandler};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::Environment;

/// Builder for creating Interpreter instances.
///
/// Defaults to stdout for output and stdin for input. Tests swap in buffer
/// handlers.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    program: &'a Program,
    print_handler: Option<SharedPrintHandler>,
    input_handler: Option<SharedInputHandler>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner, program: &'a Program) -> Self {
        Self {
            interner,
            program,
            print_handler: None,
            input_handler: None,
        }
    }

    /// Set the destination for `print` output and input prompts.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set the source of lines for `inputi` / `inputs`.
    #[must_use]
    pub fn input_handler(mut self, handler: SharedInputHandler) -> Self {
        self.input_handler = Some(handler);
        self
    }

    /// Build the interpreter, indexing the program's functions.
    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            functions: FunctionTable::from_program(self.program, self.interner),
            env: Environment::new(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            input_handler: self.input_handler.unwrap_or_else(stdin_handler),
        }
    }
}
