//! Statement grammar: sigil characters and the closed statement-kind enums.
//!
//! Every statement is identified purely by its leading sigil character;
//! the dispatcher matches a [`Sigil`] exactly once per statement instead
//! of nesting character comparisons.

use neg_diagnostic::VarKind;

/// Line feed — terminates any value region.
pub const LF: char = '\n';
/// Carriage return — terminates any value region.
pub const CR: char = '\r';
/// Plain space. Skipped in number literals, elided from string values.
pub const SPACE: char = ' ';
/// Boolean declaration sigil, and the toggle marker inside boolean values.
pub const BOOLEAN_SIGIL: char = '!';
/// Number declaration sigil.
pub const NUMBER_SIGIL: char = '$';
/// String declaration sigil.
pub const STRING_SIGIL: char = '_';
/// Print statement sigil.
pub const PRINT_SIGIL: char = '#';
/// First character of the closing signature.
pub const CLOSING_LEAD: char = '-';
/// Assignment marker separating a name from its value region.
pub const ASSIGN: char = '?';
/// The two bytes every program must open with.
pub const OPENING_SIGNATURE: &str = "!-";
/// String-print token that emits a single line break instead of a lookup.
pub const LINE_BREAK_ESCAPE: &str = "/n";

/// Returns `true` for the two line break characters.
#[inline]
pub fn is_line_break(c: char) -> bool {
    c == LF || c == CR
}

/// Statement kind, resolved from the leading sigil character.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sigil {
    /// `!` — declare a boolean.
    Boolean,
    /// `$` — declare a number.
    Number,
    /// `_` — declare a string.
    String,
    /// `#` — print; a second character selects the kind.
    Print,
    /// `-` — lead character of the closing signature.
    ClosingLead,
    /// A line break at statement position: empty statement.
    LineBreak,
}

impl Sigil {
    /// Resolve a character at statement position, or `None` if it names
    /// no statement kind.
    pub fn from_char(c: char) -> Option<Sigil> {
        match c {
            BOOLEAN_SIGIL => Some(Sigil::Boolean),
            NUMBER_SIGIL => Some(Sigil::Number),
            STRING_SIGIL => Some(Sigil::String),
            PRINT_SIGIL => Some(Sigil::Print),
            CLOSING_LEAD => Some(Sigil::ClosingLead),
            LF | CR => Some(Sigil::LineBreak),
            _ => None,
        }
    }
}

/// Which table a print statement reads from, selected by the character
/// after `#`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PrintKind {
    /// `#!` — print a boolean as `1`/`0`.
    Boolean,
    /// `#$` — print a number as decimal text.
    Number,
    /// `#_` — print a string variable, the `/n` escape, or a raw literal.
    String,
}

impl PrintKind {
    /// Resolve the kind character after `#`, or `None` for anything else.
    pub fn from_char(c: char) -> Option<PrintKind> {
        match c {
            BOOLEAN_SIGIL => Some(PrintKind::Boolean),
            NUMBER_SIGIL => Some(PrintKind::Number),
            STRING_SIGIL => Some(PrintKind::String),
            _ => None,
        }
    }

    /// The symbol table this print kind resolves names against.
    pub fn var_kind(self) -> VarKind {
        match self {
            PrintKind::Boolean => VarKind::Boolean,
            PrintKind::Number => VarKind::Number,
            PrintKind::String => VarKind::String,
        }
    }
}
