//! Built-in functions: `print`, `inputi`, `inputs`.

use std::fmt::Write;

use tracing::debug;

use brewin_ir::{CallExpr, Expr, Name};

use super::Interpreter;
use crate::errors::{invalid_int_input, too_many_input_args, EvalResult};
use crate::Value;

impl Interpreter<'_> {
    /// `print(a, b, ...)`: one line, arguments concatenated without separators.
    pub(super) fn builtin_print(&mut self, args: &[Expr]) -> EvalResult {
        let mut line = String::new();
        for arg in args {
            let value = self.eval(arg)?;
            write!(line, "{value}").ok();
        }
        self.print_handler.println(&line);
        Ok(Value::Nil)
    }

    /// `inputi([prompt])` / `inputs([prompt])`.
    ///
    /// The prompt, if any, is printed as its own line before reading.
    pub(super) fn builtin_input(&mut self, call: &CallExpr) -> EvalResult {
        match call.args.as_slice() {
            [] => {}
            [prompt] => {
                let prompt = self.eval(prompt)?;
                self.print_handler.println(&prompt.to_string());
            }
            _ => {
                return Err(too_many_input_args(
                    self.name_str(call.name),
                    call.arity(),
                ))
            }
        }

        let line = self.input_handler.read_line();
        debug!(builtin = self.name_str(call.name), len = line.len(), "read input");
        if call.name == Name::INPUTI {
            let trimmed = line.trim();
            trimmed
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| invalid_int_input(trimmed))
        } else {
            Ok(Value::Str(line))
        }
    }
}
