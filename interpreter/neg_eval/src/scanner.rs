//! Scan cursor over a character source.
//!
//! [`Scanner`] threads the statement line counter through every scan
//! operation, so readers never touch ambient mutable state: an error
//! raised anywhere carries the counter at the point of failure. It also
//! hosts the name scanner shared by every statement form.
//!
//! # Invariant
//!
//! The line counter is 1-based and bumps once per completed statement,
//! never mid-statement. A statement that fails reports the line it
//! started on.

use neg_diagnostic::{source_failure, unexpected_eof, RunResult};
use neg_stream::CharSource;

use crate::statement::{is_line_break, ASSIGN};

/// The character that ended a name token.
///
/// An assignment marker means a value region follows on the same logical
/// statement; a line break means the statement is empty-valued.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Terminator {
    /// The name was ended by `?`.
    Assign,
    /// The name was ended by a line break.
    LineBreak,
}

/// Scan cursor: a character source plus the statement line counter.
pub struct Scanner<S> {
    source: S,
    line: u32,
}

impl<S: CharSource> Scanner<S> {
    /// Create a scanner at line 1, positioned at the start of `source`.
    pub fn new(source: S) -> Self {
        Self { source, line: 1 }
    }

    /// The current statement line, for diagnostics.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Record a completed statement.
    #[inline]
    pub fn bump_statement(&mut self) {
        self.line += 1;
    }

    /// Yield the next character, or `None` at end of input.
    ///
    /// Source failures are wrapped with the current line so the caller
    /// knows how far interpretation got.
    pub fn next_char(&mut self) -> RunResult<Option<char>> {
        self.source
            .next_char()
            .map_err(|e| source_failure(self.line, e))
    }

    /// Scan a name token: accumulate characters until a line break or the
    /// assignment marker, excluding the terminator itself.
    ///
    /// The returned token may be empty — declaration readers reject empty
    /// names, while the print evaluator accepts an empty literal. End of
    /// input before any terminator is an error: a name is only complete
    /// once its statement is.
    pub fn scan_name(&mut self) -> RunResult<(String, Terminator)> {
        let mut name = String::new();
        loop {
            match self.next_char()? {
                None => {
                    return Err(unexpected_eof(self.line, "name token never terminated"));
                }
                Some(ASSIGN) => return Ok((name, Terminator::Assign)),
                Some(c) if is_line_break(c) => return Ok((name, Terminator::LineBreak)),
                Some(c) => name.push(c),
            }
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use neg_diagnostic::{ErrorCode, NegError};
    use neg_stream::StrSource;
    use pretty_assertions::assert_eq;

    fn scanner(text: &str) -> Scanner<StrSource<'_>> {
        Scanner::new(StrSource::new(text))
    }

    #[test]
    fn scan_name_stops_at_assignment_marker() {
        let mut s = scanner("flag?rest");
        let (name, term) = s.scan_name().unwrap();
        assert_eq!(name, "flag");
        assert_eq!(term, Terminator::Assign);
        // The terminator is consumed, the value region is not.
        assert_eq!(s.next_char().unwrap(), Some('r'));
    }

    #[test]
    fn scan_name_stops_at_line_feed() {
        let mut s = scanner("flag\nnext");
        let (name, term) = s.scan_name().unwrap();
        assert_eq!(name, "flag");
        assert_eq!(term, Terminator::LineBreak);
    }

    #[test]
    fn scan_name_stops_at_carriage_return() {
        let mut s = scanner("flag\rnext");
        let (_, term) = s.scan_name().unwrap();
        assert_eq!(term, Terminator::LineBreak);
    }

    #[test]
    fn scan_name_may_be_empty() {
        let mut s = scanner("?value");
        let (name, term) = s.scan_name().unwrap();
        assert_eq!(name, "");
        assert_eq!(term, Terminator::Assign);
    }

    #[test]
    fn scan_name_preserves_interior_spaces() {
        // Space elision is a value-region policy; name tokens are verbatim.
        let mut s = scanner("hi there\n");
        let (name, _) = s.scan_name().unwrap();
        assert_eq!(name, "hi there");
    }

    #[test]
    fn scan_name_fails_at_end_of_input() {
        let mut s = scanner("unterminated");
        let err = s.scan_name().map(|_| ()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::E0002);
        assert!(matches!(
            err,
            NegError::UnexpectedEndOfInput { line: 1, .. }
        ));
    }

    #[test]
    fn line_counter_is_threaded_into_errors() {
        let mut s = scanner("x");
        s.bump_statement();
        s.bump_statement();
        let err = s.scan_name().map(|_| ()).unwrap_err();
        assert_eq!(err.line(), Some(3));
    }
}
