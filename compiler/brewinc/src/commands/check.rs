//! The `check` command: load a program document and list its functions.

use super::read_file;
use crate::check_source;

/// Load a program without running it and print each function's overloads.
///
/// Exits with status 1 when the document does not load or has no
/// zero-argument `main`.
pub fn check_file(path: &str) {
    let source = read_file(path);
    let report = match check_source(&source) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    for (name, arities) in &report.functions {
        let arities: Vec<String> = arities.iter().map(ToString::to_string).collect();
        println!("{name}/{}", arities.join(","));
    }

    if !report.has_main {
        eprintln!("error[NAME_ERROR]: no `main` function taking zero arguments");
        std::process::exit(1);
    }
    println!("ok: {} function(s)", report.functions.len());
}
