#![deny(clippy::arithmetic_side_effects)]
//! Brewin Eval - tree-walking interpreter for Brewin programs.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Value`: the four runtime value kinds (int, bool, string, nil)
//! - `Environment`: variable scoping with a single frame stack
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator dispatch
//! - `FunctionTable`: user definitions keyed by `(name, arity)`
//! - `Interpreter`: statement executor and expression evaluator
//!
//! Output and input go through [`SharedPrintHandler`] and
//! [`SharedInputHandler`] so hosts and tests choose where they lead.

mod environment;
pub mod errors;
mod function_table;
mod input_handler;
pub mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests;

pub use environment::{AssignError, DeclareError, Environment};
pub use errors::{ErrorType, EvalError, EvalErrorKind, EvalResult};
pub use function_table::{FunctionTable, LookupError};
pub use input_handler::{
    buffer_input, stdin_handler, InputHandlerImpl, SharedInputHandler,
};
pub use interpreter::{Completion, ExecResult, FrameGuard, Interpreter, InterpreterBuilder};
pub use operators::{checked_floor_div, evaluate_binary};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::{Type, Value};
