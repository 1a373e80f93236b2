//! Input handler for `inputi` / `inputs`.
//!
//! Mirrors the print handler: stdin for the CLI, a queue of scripted lines
//! for tests. End of input reads as an empty line.

use std::collections::VecDeque;
use std::io::BufRead;
use std::sync::Arc;

use parking_lot::Mutex;

/// Input handler implementation using enum dispatch.
pub enum InputHandlerImpl {
    /// Reads lines from stdin.
    Stdin,
    /// Pops pre-loaded lines in order.
    Buffer(Mutex<VecDeque<String>>),
}

impl InputHandlerImpl {
    /// Read one line without its trailing line terminator.
    ///
    /// Returns an empty string at end of input or on a read failure.
    pub fn read_line(&self) -> String {
        match self {
            Self::Stdin => {
                let mut line = String::new();
                if std::io::stdin().lock().read_line(&mut line).is_err() {
                    line.clear();
                }
                let trimmed = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed);
                line
            }
            Self::Buffer(lines) => lines.lock().pop_front().unwrap_or_default(),
        }
    }
}

/// Shared input handler that can be passed around.
pub type SharedInputHandler = Arc<InputHandlerImpl>;

/// Create an input handler reading from stdin.
pub fn stdin_handler() -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Stdin)
}

/// Create an input handler that serves `lines` in order.
pub fn buffer_input<I, S>(lines: I) -> SharedInputHandler
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Arc::new(InputHandlerImpl::Buffer(Mutex::new(
        lines.into_iter().map(Into::into).collect(),
    )))
}
