//! The `run` command: load a program document and execute it.

use brewin_eval::{stdin_handler, stdout_handler};

use super::read_file;
use crate::run_source;

/// Run a program, wiring it to stdout and stdin.
///
/// The first error ends the run: it is reported on stderr as
/// `error[<CATEGORY>]: <message>` and the process exits with status 1.
pub fn run_file(path: &str) {
    let source = read_file(path);
    if let Err(e) = run_source(&source, stdout_handler(), stdin_handler()) {
        tracing::debug!(path, "run failed");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
