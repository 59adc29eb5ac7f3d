//! The number reader: validated literal accumulation, strict base-10 parse.
//!
//! Character validation and parsing are deliberately separate stages with
//! different alphabets. Validation accepts `0-9` and `a-z`; the parse is
//! strict base-10. A literal containing an accepted letter therefore still
//! fails — at parse time, not validation time. The legacy grammar this
//! interpreter targets behaves exactly so, and scripts must not start
//! silently parsing as base-36 here.

use neg_diagnostic::{bad_number_char, bad_number_literal, unexpected_eof, RunResult};
use neg_stream::CharSource;

use crate::bindings::Bindings;
use crate::read::require_name;
use crate::scanner::{Scanner, Terminator};
use crate::statement::{is_line_break, SPACE};

/// Returns `true` for characters the value region accepts before parsing.
#[inline]
fn is_literal_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_lowercase()
}

/// Read one number declaration and store it.
///
/// Grammar: `$<name>?<literal>` where the literal runs to the line break.
/// Plain spaces inside the literal are skipped — they neither join the
/// literal nor terminate it. Any other character outside the accepted
/// ranges fails immediately, citing the character and line.
pub fn read_number<S: CharSource>(
    scanner: &mut Scanner<S>,
    bindings: &mut Bindings,
) -> RunResult<i64> {
    let (name, terminator) = scanner.scan_name()?;
    require_name(&name, scanner.line())?;

    let mut literal = String::new();
    if terminator == Terminator::Assign {
        loop {
            match scanner.next_char()? {
                None => {
                    return Err(unexpected_eof(
                        scanner.line(),
                        "number value region never terminated",
                    ));
                }
                Some(c) if is_line_break(c) => break,
                Some(SPACE) => {}
                Some(c) if is_literal_char(c) => literal.push(c),
                Some(other) => return Err(bad_number_char(scanner.line(), other)),
            }
        }
    }

    let value: i64 = literal
        .parse()
        .map_err(|_| bad_number_literal(scanner.line(), &literal))?;
    bindings.define_number(name, value);
    Ok(value)
}
