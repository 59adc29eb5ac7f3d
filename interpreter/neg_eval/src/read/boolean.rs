//! The boolean reader: toggle-chain decoding.
//!
//! A boolean value region encodes its value as a run of toggle markers.
//! The running value starts at `true` and flips once per `!`; the final
//! value is therefore `true` iff the toggle count is even.

use neg_diagnostic::{bad_toggle_char, redundant_toggle, unexpected_eof, RunResult};
use neg_stream::CharSource;

use crate::bindings::Bindings;
use crate::read::require_name;
use crate::scanner::{Scanner, Terminator};
use crate::statement::{is_line_break, BOOLEAN_SIGIL};

/// Read one boolean declaration and store it.
///
/// Grammar: `!<name>?<toggles>` or the empty-valued `!<name>` (zero
/// toggles, stores `true`). Any non-toggle character in the value region
/// is a format error.
///
/// A declaration whose final value equals the value already stored under
/// the same name is rejected: successive re-declarations of a boolean must
/// alternate its direction. First declarations are never rejected.
pub fn read_boolean<S: CharSource>(
    scanner: &mut Scanner<S>,
    bindings: &mut Bindings,
) -> RunResult<bool> {
    let (name, terminator) = scanner.scan_name()?;
    require_name(&name, scanner.line())?;

    let mut value = true;
    if terminator == Terminator::Assign {
        loop {
            match scanner.next_char()? {
                None => {
                    return Err(unexpected_eof(
                        scanner.line(),
                        "boolean value region never terminated",
                    ));
                }
                Some(c) if is_line_break(c) => break,
                Some(BOOLEAN_SIGIL) => value = !value,
                Some(other) => return Err(bad_toggle_char(scanner.line(), other)),
            }
        }
    }

    if bindings.lookup_boolean(&name) == Some(value) {
        return Err(redundant_toggle(scanner.line(), &name));
    }

    bindings.define_boolean(name, value);
    Ok(value)
}
