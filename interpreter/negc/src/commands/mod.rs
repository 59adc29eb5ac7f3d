//! CLI commands.

mod check;
mod run;

pub use check::check_file;
pub use run::run_file;

use std::fs::File;

use neg_diagnostic::NegError;
use neg_eval::{Interpreter, SharedSink};
use neg_stream::ReaderSource;

/// Open a program file, exiting with a readable message on failure.
fn open_file(path: &str) -> File {
    match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("error: cannot open '{path}': {e}");
            std::process::exit(1);
        }
    }
}

/// Interpret `path` end to end with the given sink.
///
/// The file is streamed through [`ReaderSource`], so the interpreter pulls
/// one character at a time and never needs the whole program in memory.
fn interpret_path(path: &str, sink: SharedSink) -> Result<(), NegError> {
    let file = open_file(path);
    let mut interpreter = Interpreter::new(sink);
    interpreter.run(ReaderSource::new(file))
}

/// Print an interpreter error the way the rest of the toolchain expects:
/// `error[E000N]: message`.
fn report_error(err: &NegError) {
    eprintln!("error[{}]: {err}", err.code());
    // Chained source (I/O) errors carry detail worth surfacing.
    if let NegError::Source { source, .. } = err {
        eprintln!("  caused by: {source}");
    }
}
