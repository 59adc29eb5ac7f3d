//! Neg Stream - character sources for the Negation interpreter.
//!
//! This crate is standalone (no neg_* dependencies) so external tools can
//! feed programs to the interpreter without pulling in the evaluator.
//!
//! The interpreter's input contract is minimal: anything that yields one
//! codepoint at a time and signals "no more characters" is a valid program
//! source. [`CharSource`] captures exactly that, with two implementations:
//!
//! - [`StrSource`]: in-memory source over a `&str` (infallible)
//! - [`ReaderSource`]: incremental UTF-8 decoder over any [`std::io::Read`]

mod reader;
mod source;

pub use reader::ReaderSource;
pub use source::{CharSource, StrSource};
