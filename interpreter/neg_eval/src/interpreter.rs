//! The statement dispatcher and program driver.
//!
//! One [`Interpreter`] instance owns the three symbol tables and the
//! output sink for exactly one interpretation run at a time. Execution is
//! fully synchronous and single-threaded: one statement is parsed and
//! applied before the next is read, so later statements always observe the
//! effects of earlier ones. The first error aborts the run; output already
//! emitted stays emitted.

use neg_diagnostic::{
    bad_print_kind, bad_signature, unexpected_eof, unrecognized_sigil, RunResult,
};
use neg_stream::CharSource;

use crate::bindings::Bindings;
use crate::print::evaluate_print;
use crate::read::{read_boolean, read_number, read_string};
use crate::scanner::Scanner;
use crate::sink::SharedSink;
use crate::statement::{PrintKind, Sigil, BOOLEAN_SIGIL, OPENING_SIGNATURE};

/// What a dispatched statement tells the driver loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Flow {
    /// The statement completed; keep reading.
    Continue,
    /// The closing signature was seen; the run is done.
    Terminal,
}

/// The interpreter: symbol tables plus an output sink.
///
/// Tables persist across [`run`](Interpreter::run) calls on the same
/// instance and are destroyed only when the instance is dropped.
pub struct Interpreter {
    bindings: Bindings,
    sink: SharedSink,
}

impl Interpreter {
    /// Create an interpreter emitting to `sink`.
    pub fn new(sink: SharedSink) -> Self {
        Interpreter {
            bindings: Bindings::new(),
            sink,
        }
    }

    /// The symbol tables, for inspection after a run.
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Interpret one whole program from `source`.
    ///
    /// Validates the opening signature, then dispatches statements until
    /// the closing signature or the first error. No partial recovery.
    pub fn run<S: CharSource>(&mut self, source: S) -> RunResult<()> {
        let mut scanner = Scanner::new(source);

        check_signature(&mut scanner)?;
        tracing::debug!("opening signature accepted");

        loop {
            match self.dispatch(&mut scanner)? {
                Flow::Terminal => {
                    tracing::debug!(lines = scanner.line(), "closing signature reached");
                    return Ok(());
                }
                Flow::Continue => scanner.bump_statement(),
            }
        }
    }

    /// Read one sigil and route to the matching reader or evaluator.
    fn dispatch<S: CharSource>(&mut self, scanner: &mut Scanner<S>) -> RunResult<Flow> {
        let Some(c) = scanner.next_char()? else {
            return Err(unexpected_eof(scanner.line(), "expected closing signature"));
        };
        let Some(sigil) = Sigil::from_char(c) else {
            return Err(unrecognized_sigil(scanner.line(), c));
        };

        match sigil {
            // A line break at statement position is an empty statement:
            // every statement form consumes its own trailing line break,
            // but the opening signature line and blank lines do not.
            Sigil::LineBreak => {}
            Sigil::Boolean => {
                let value = read_boolean(scanner, &mut self.bindings)?;
                tracing::trace!(line = scanner.line(), value, "boolean declaration");
            }
            Sigil::Number => {
                let value = read_number(scanner, &mut self.bindings)?;
                tracing::trace!(line = scanner.line(), value, "number declaration");
            }
            Sigil::String => {
                let value = read_string(scanner, &mut self.bindings)?;
                tracing::trace!(line = scanner.line(), value = %value, "string declaration");
            }
            Sigil::Print => {
                let Some(kind_char) = scanner.next_char()? else {
                    return Err(unexpected_eof(scanner.line(), "expected print kind after `#`"));
                };
                let Some(kind) = PrintKind::from_char(kind_char) else {
                    return Err(bad_print_kind(scanner.line(), kind_char));
                };
                evaluate_print(scanner, &self.bindings, &self.sink, kind)?;
                tracing::trace!(line = scanner.line(), kind = ?kind, "print statement");
            }
            Sigil::ClosingLead => {
                // `-` followed by the boolean marker is the closing
                // signature; anything else (or end of input) is a program
                // that never closes properly.
                if scanner.next_char()? == Some(BOOLEAN_SIGIL) {
                    return Ok(Flow::Terminal);
                }
                return Err(unexpected_eof(scanner.line(), "expected closing signature"));
            }
        }

        Ok(Flow::Continue)
    }
}

/// Consume exactly two characters and require the opening signature.
///
/// Runs before any statement is processed: a program whose first bytes are
/// wrong fails without executing anything.
fn check_signature<S: CharSource>(scanner: &mut Scanner<S>) -> RunResult<()> {
    for expected in OPENING_SIGNATURE.chars() {
        match scanner.next_char()? {
            Some(c) if c == expected => {}
            found => return Err(bad_signature(found)),
        }
    }
    Ok(())
}
