//! The string reader: verbatim accumulation with space elision.
//!
//! Plain spaces in the value region are elided — they are not part of the
//! stored content and do not terminate it. Every other character up to the
//! line break is copied verbatim; there is no escape processing in the
//! declaration position (the `/n` escape belongs to the print evaluator).

use neg_diagnostic::{unexpected_eof, RunResult};
use neg_stream::CharSource;

use crate::bindings::Bindings;
use crate::read::require_name;
use crate::scanner::{Scanner, Terminator};
use crate::statement::{is_line_break, SPACE};

/// Read one string declaration and store it.
///
/// Grammar: `_<name>?<content>` or the empty-valued `_<name>` (stores the
/// empty string).
pub fn read_string<S: CharSource>(
    scanner: &mut Scanner<S>,
    bindings: &mut Bindings,
) -> RunResult<String> {
    let (name, terminator) = scanner.scan_name()?;
    require_name(&name, scanner.line())?;

    let mut value = String::new();
    if terminator == Terminator::Assign {
        loop {
            match scanner.next_char()? {
                None => {
                    return Err(unexpected_eof(
                        scanner.line(),
                        "string value region never terminated",
                    ));
                }
                Some(c) if is_line_break(c) => break,
                Some(SPACE) => {}
                Some(c) => value.push(c),
            }
        }
    }

    bindings.define_string(name, value.clone());
    Ok(value)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use neg_diagnostic::ErrorCode;
    use neg_stream::StrSource;
    use pretty_assertions::assert_eq;

    fn read(text: &str, bindings: &mut Bindings) -> RunResult<String> {
        let mut scanner = Scanner::new(StrSource::new(text));
        read_string(&mut scanner, bindings)
    }

    #[test]
    fn stores_content_verbatim() {
        let mut bindings = Bindings::new();
        assert_eq!(read("greet?hi\n", &mut bindings).unwrap(), "hi");
        assert_eq!(bindings.lookup_string("greet"), Some("hi"));
    }

    #[test]
    fn embedded_spaces_are_elided() {
        let mut bindings = Bindings::new();
        assert_eq!(read("greet?hi there\n", &mut bindings).unwrap(), "hithere");
    }

    #[test]
    fn only_plain_spaces_are_elided() {
        // Tabs and every other character are verbatim content.
        let mut bindings = Bindings::new();
        assert_eq!(read("v?a\tb\n", &mut bindings).unwrap(), "a\tb");
    }

    #[test]
    fn no_escape_processing_in_declarations() {
        let mut bindings = Bindings::new();
        assert_eq!(read("v?a/nb\n", &mut bindings).unwrap(), "a/nb");
    }

    #[test]
    fn assignment_marker_in_value_is_verbatim() {
        let mut bindings = Bindings::new();
        assert_eq!(read("v?a?b\n", &mut bindings).unwrap(), "a?b");
    }

    #[test]
    fn empty_value_region_stores_empty_string() {
        let mut bindings = Bindings::new();
        assert_eq!(read("v?\n", &mut bindings).unwrap(), "");
        assert_eq!(bindings.lookup_string("v"), Some(""));
    }

    #[test]
    fn empty_valued_declaration_stores_empty_string() {
        let mut bindings = Bindings::new();
        assert_eq!(read("v\n", &mut bindings).unwrap(), "");
    }

    #[test]
    fn eof_inside_value_region_fails() {
        let mut bindings = Bindings::new();
        let err = read("v?hi", &mut bindings).unwrap_err();
        assert_eq!(err.code(), ErrorCode::E0002);
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut bindings = Bindings::new();
        let err = read("?hi\n", &mut bindings).unwrap_err();
        assert_eq!(err.code(), ErrorCode::E0003);
    }

    #[test]
    fn carriage_return_terminates_the_value() {
        let mut bindings = Bindings::new();
        assert_eq!(read("v?hi\rrest", &mut bindings).unwrap(), "hi");
    }
}
