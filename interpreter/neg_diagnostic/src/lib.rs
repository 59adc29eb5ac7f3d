//! Diagnostic types for the Negation interpreter.
//!
//! Every failure the interpreter can produce falls into one of four kinds:
//! - `Signature`: the program does not open with the required framing bytes
//! - `UnexpectedEndOfInput`: the stream ran out mid-statement or before
//!   the closing signature
//! - `Format`: a sigil, toggle run, or literal character violates the grammar
//! - `Lookup`: a print statement references an undeclared name
//!
//! plus `Source` for I/O failures of the underlying character source.
//!
//! Errors are fatal to the run — there is no recovery, rollback, or retry.
//! Each error carries the statement line counter and, where applicable, the
//! offending character, so a script author can find the bad statement.

mod error;
mod error_code;

pub use error::{
    bad_number_char, bad_number_literal, bad_print_kind, bad_signature, bad_toggle_char,
    empty_name, redundant_toggle, source_failure, undefined_variable, unexpected_eof,
    unrecognized_sigil, NegError, RunResult, VarKind,
};
pub use error_code::ErrorCode;
