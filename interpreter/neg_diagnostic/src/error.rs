//! The interpreter error type and its constructors.
//!
//! Parse failures are values, not unwinds: every scan operation returns
//! `RunResult` and the dispatcher propagates the first error straight up to
//! the program driver. Constructors live here so every message is phrased
//! in one place.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::error_code::ErrorCode;

/// Result alias used by every scan/evaluate operation.
pub type RunResult<T> = Result<T, NegError>;

/// Which of the three per-type symbol tables a name belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VarKind {
    /// The boolean table (`!` declarations).
    Boolean,
    /// The number table (`$` declarations).
    Number,
    /// The string table (`_` declarations).
    String,
}

impl fmt::Display for VarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarKind::Boolean => f.write_str("boolean"),
            VarKind::Number => f.write_str("number"),
            VarKind::String => f.write_str("string"),
        }
    }
}

/// Render the character a scan operation stopped on, or end of input.
fn describe_found(found: Option<char>) -> String {
    match found {
        Some(c) => format!("`{}`", c.escape_debug()),
        None => "end of input".to_string(),
    }
}

/// A fatal interpretation failure.
///
/// The `line` fields carry the statement counter (1-based, incremented once
/// per completed statement) at the point of failure.
#[derive(Debug, Error)]
pub enum NegError {
    /// The program does not open with the required framing bytes.
    #[error("program must open with the `!-` signature, found {}", describe_found(*.found))]
    Signature {
        /// The first mismatching character, or `None` at end of input.
        found: Option<char>,
    },

    /// The stream ran out mid-statement or before the closing signature.
    #[error("unexpected end of input at line {line}: {context}")]
    UnexpectedEndOfInput { line: u32, context: &'static str },

    /// A sigil, toggle run, or literal character violates the grammar.
    #[error("format error at line {line}: {context}")]
    Format { line: u32, context: String },

    /// A print statement references a name absent from its table.
    #[error("undefined {kind} variable `{name}` at line {line}")]
    Lookup {
        line: u32,
        kind: VarKind,
        name: String,
    },

    /// The underlying character source failed.
    #[error("source read failure at line {line}")]
    Source {
        line: u32,
        #[source]
        source: io::Error,
    },
}

impl NegError {
    /// The stable code for this error kind.
    pub fn code(&self) -> ErrorCode {
        match self {
            NegError::Signature { .. } => ErrorCode::E0001,
            NegError::UnexpectedEndOfInput { .. } => ErrorCode::E0002,
            NegError::Format { .. } => ErrorCode::E0003,
            NegError::Lookup { .. } => ErrorCode::E0004,
            NegError::Source { .. } => ErrorCode::E0005,
        }
    }

    /// The statement line the error was raised on, if one applies.
    ///
    /// `None` only for signature mismatches, which occur before any
    /// statement is processed.
    pub fn line(&self) -> Option<u32> {
        match self {
            NegError::Signature { .. } => None,
            NegError::UnexpectedEndOfInput { line, .. }
            | NegError::Format { line, .. }
            | NegError::Lookup { line, .. }
            | NegError::Source { line, .. } => Some(*line),
        }
    }
}

// Constructors. Message phrasing is centralized here so readers and the
// dispatcher never format diagnostic text themselves.

/// Opening signature mismatch.
pub fn bad_signature(found: Option<char>) -> NegError {
    NegError::Signature { found }
}

/// Stream exhausted while `context` was still incomplete.
pub fn unexpected_eof(line: u32, context: &'static str) -> NegError {
    NegError::UnexpectedEndOfInput { line, context }
}

/// A character at statement start that names no statement kind.
pub fn unrecognized_sigil(line: u32, found: char) -> NegError {
    NegError::Format {
        line,
        context: format!("unrecognized statement sigil {}", describe_found(Some(found))),
    }
}

/// The character after `#` selects no print kind.
pub fn bad_print_kind(line: u32, found: char) -> NegError {
    NegError::Format {
        line,
        context: format!("unknown print kind {}", describe_found(Some(found))),
    }
}

/// A declared name turned out to be empty.
pub fn empty_name(line: u32) -> NegError {
    NegError::Format {
        line,
        context: "empty variable name".to_string(),
    }
}

/// A non-toggle character inside a boolean value region.
pub fn bad_toggle_char(line: u32, found: char) -> NegError {
    NegError::Format {
        line,
        context: format!("character {} is not a toggle marker", describe_found(Some(found))),
    }
}

/// A toggle chain that leaves an already-initialized boolean unchanged.
pub fn redundant_toggle(line: u32, name: &str) -> NegError {
    NegError::Format {
        line,
        context: format!("toggle chain leaves boolean `{name}` unchanged"),
    }
}

/// A character outside the accepted ranges of a number literal.
pub fn bad_number_char(line: u32, found: char) -> NegError {
    NegError::Format {
        line,
        context: format!("unable to parse character {} in number literal", describe_found(Some(found))),
    }
}

/// A literal that passed character validation but is not base-10.
pub fn bad_number_literal(line: u32, literal: &str) -> NegError {
    NegError::Format {
        line,
        context: format!("number literal `{literal}` is not a valid base-10 integer"),
    }
}

/// A print statement referenced an undeclared name.
pub fn undefined_variable(line: u32, kind: VarKind, name: &str) -> NegError {
    NegError::Lookup {
        line,
        kind,
        name: name.to_string(),
    }
}

/// The character source failed with an I/O error.
pub fn source_failure(line: u32, source: io::Error) -> NegError {
    NegError::Source { line, source }
}
