//! Neg Eval - single-pass interpreter for the Negation language.
//!
//! A Negation program is a flat sequence of declare/print statements over
//! a fixed global namespace, framed by a two-byte opening and closing
//! signature. The interpreter is a hand-rolled lexer/parser/evaluator
//! fused into one pass: it consumes the character stream one codepoint at
//! a time and recognizes statement boundaries purely from sigil and
//! terminator characters.
//!
//! # Architecture
//!
//! Control flow is strictly top-down:
//! - [`Interpreter`]: validates the framing signatures and drives the
//!   statement loop (dispatcher), routing each sigil to a reader or the
//!   print evaluator
//! - [`read`]: the boolean/number/string value readers
//! - [`Scanner`]: the scan cursor and shared name scanner
//! - [`Bindings`]: the three per-type symbol tables
//! - [`SinkImpl`]: the append-only output sink
//!
//! No arithmetic, no control flow, no procedures, no nested scopes.

mod bindings;
mod interpreter;
mod print;
pub mod read;
mod scanner;
mod sink;
mod statement;

#[cfg(test)]
mod tests;

pub use bindings::Bindings;
pub use interpreter::Interpreter;
pub use print::evaluate_print;
pub use scanner::{Scanner, Terminator};
pub use sink::{buffer_sink, silent_sink, stdout_sink, BufferSink, SharedSink, SinkImpl, StdoutSink};
pub use statement::{PrintKind, Sigil};

// Re-export the error types alongside the evaluator, as callers almost
// always need both.
pub use neg_diagnostic::{ErrorCode, NegError, RunResult, VarKind};

use neg_stream::StrSource;

/// Interpret a complete program held in memory, returning its output.
///
/// Convenience for tests and embedders; the tables are discarded with the
/// run. Use [`Interpreter`] directly to keep tables across runs or to
/// stream from a reader.
pub fn interpret_str(program: &str) -> RunResult<String> {
    let sink = buffer_sink();
    let mut interpreter = Interpreter::new(sink.clone());
    interpreter.run(StrSource::new(program))?;
    Ok(sink.captured())
}
