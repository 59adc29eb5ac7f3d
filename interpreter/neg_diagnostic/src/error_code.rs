use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// One code per error kind. Codes are stable: scripts and tooling may match
/// on them, so variants are never renumbered.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Opening framing bytes do not match the required signature
    E0001,
    /// Stream exhausted while a statement, name, or value was incomplete
    E0002,
    /// A sigil, toggle run, or literal character violates the grammar
    E0003,
    /// A print statement references a name absent from its table
    E0004,
    /// The underlying character source failed
    E0005,
}

impl ErrorCode {
    /// The code as it appears in rendered diagnostics, e.g. `"E0003"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
        }
    }

    /// One-line description of the error class.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "malformed program signature",
            ErrorCode::E0002 => "unexpected end of input",
            ErrorCode::E0003 => "format error",
            ErrorCode::E0004 => "undefined variable",
            ErrorCode::E0005 => "source read failure",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
