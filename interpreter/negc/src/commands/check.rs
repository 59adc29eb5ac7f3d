//! The `check` command: validate a program without emitting its output.

use neg_eval::silent_sink;

use super::{interpret_path, report_error};

/// Interpret a file with the silent sink.
///
/// The whole program executes, including declarations and lookups, so every
/// error the `run` command would hit is reported, but nothing is printed.
pub fn check_file(path: &str) {
    tracing::debug!(path, "check");
    if let Err(err) = interpret_path(path, silent_sink()) {
        report_error(&err);
        std::process::exit(1);
    }
    println!("{path}: ok");
}
