//! Brewin driver.
//!
//! Loads a program document produced by the parser, lowers it into
//! `brewin_ir`, and runs it on the `brewin_eval` interpreter.
//!
//! ```text
//! program.json ──► load_program() ──► Program
//!                                        │
//!                                        ▼
//!                              Interpreter::run() ──► output / EvalError
//! ```

pub mod commands;
pub mod loader;

use std::sync::Once;

use brewin_eval::{
    EvalError, FunctionTable, InterpreterBuilder, SharedInputHandler, SharedPrintHandler,
};
use brewin_ir::{Name, StringInterner};

pub use loader::{load_program, LoadError};

/// Everything that can stop a run, rendered the way the CLI reports it.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("error: {0}")]
    Load(#[from] LoadError),
    #[error("error[{}]: {}", .0.error_type(), .0)]
    Eval(#[from] EvalError),
}

/// Load and run a program document.
pub fn run_source(
    source: &str,
    print_handler: SharedPrintHandler,
    input_handler: SharedInputHandler,
) -> Result<(), RunError> {
    let mut interner = StringInterner::new();
    let program = load_program(source, &mut interner)?;
    let mut interpreter = InterpreterBuilder::new(&interner, &program)
        .print_handler(print_handler)
        .input_handler(input_handler)
        .build();
    interpreter.run()?;
    Ok(())
}

/// Functions a program defines, in order of first definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckReport {
    /// `(name, arities)` with arities ascending.
    pub functions: Vec<(String, Vec<usize>)>,
    /// Whether a zero-argument `main` exists.
    pub has_main: bool,
}

/// Load a program document and index its functions without running it.
pub fn check_source(source: &str) -> Result<CheckReport, LoadError> {
    let mut interner = StringInterner::new();
    let program = load_program(source, &mut interner)?;
    let table = FunctionTable::from_program(&program, &interner);

    let mut functions: Vec<(String, Vec<usize>)> = Vec::new();
    for def in &program.functions {
        let name = interner.lookup(def.name);
        if functions.iter().all(|(seen, _)| seen != name) {
            functions.push((name.to_string(), table.overloads(def.name)));
        }
    }
    let has_main = table.resolve(Name::MAIN, 0).is_ok();

    Ok(CheckReport {
        functions,
        has_main,
    })
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call this once at startup. Safe to call multiple times. Honors
/// `RUST_LOG` when set; otherwise `trace` enables per-statement tracing of
/// the interpreter. Logs go to stderr so program output stays clean.
pub fn init_tracing(trace: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if trace {
            EnvFilter::new("brewin_eval=trace")
        } else {
            return;
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
