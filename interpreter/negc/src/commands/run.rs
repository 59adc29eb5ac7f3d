//! The `run` command: interpret a Negation source file.

use neg_eval::stdout_sink;

use super::{interpret_path, report_error};

/// Interpret a file, emitting its output to stdout.
///
/// The first error aborts the run; output emitted before the error has
/// already been written and stays written.
pub fn run_file(path: &str) {
    tracing::debug!(path, "run");
    if let Err(err) = interpret_path(path, stdout_sink()) {
        report_error(&err);
        std::process::exit(1);
    }
}
