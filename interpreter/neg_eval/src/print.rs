//! The print evaluator.
//!
//! Resolves a print kind plus a name/literal token into emitted text.
//! Pure with respect to the tables: the evaluator only reads them, and its
//! only side effect is appending to the output sink.

use neg_diagnostic::{undefined_variable, RunResult};
use neg_stream::CharSource;

use crate::bindings::Bindings;
use crate::scanner::Scanner;
use crate::sink::SharedSink;
use crate::statement::{PrintKind, LINE_BREAK_ESCAPE};

/// Evaluate one print statement of the given kind.
///
/// Boolean and number kinds require the name to be declared and fail with
/// a lookup error otherwise. The string kind never fails: the token `/n`
/// emits a single line break (before any lookup, so a variable literally
/// named `/n` is unreachable from print position), a declared name emits
/// its stored value, and an unmatched token is emitted verbatim — inline
/// literal output without a prior declaration.
pub fn evaluate_print<S: CharSource>(
    scanner: &mut Scanner<S>,
    bindings: &Bindings,
    sink: &SharedSink,
    kind: PrintKind,
) -> RunResult<()> {
    let (token, _) = scanner.scan_name()?;
    match kind {
        PrintKind::Boolean => {
            let value = bindings.lookup_boolean(&token).ok_or_else(|| {
                undefined_variable(scanner.line(), kind.var_kind(), &token)
            })?;
            sink.write(if value { "1" } else { "0" });
        }
        PrintKind::Number => {
            let value = bindings.lookup_number(&token).ok_or_else(|| {
                undefined_variable(scanner.line(), kind.var_kind(), &token)
            })?;
            sink.write(&value.to_string());
        }
        PrintKind::String => {
            if token == LINE_BREAK_ESCAPE {
                sink.write("\n");
            } else if let Some(stored) = bindings.lookup_string(&token) {
                sink.write(stored);
            } else {
                sink.write(&token);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::sink::buffer_sink;
    use neg_diagnostic::{ErrorCode, NegError, VarKind};
    use neg_stream::StrSource;
    use pretty_assertions::assert_eq;

    fn print(text: &str, bindings: &Bindings, kind: PrintKind) -> RunResult<String> {
        let mut scanner = Scanner::new(StrSource::new(text));
        let sink = buffer_sink();
        evaluate_print(&mut scanner, bindings, &sink, kind)?;
        Ok(sink.captured())
    }

    #[test]
    fn boolean_prints_one_or_zero() {
        let mut bindings = Bindings::new();
        bindings.define_boolean("t".to_string(), true);
        bindings.define_boolean("f".to_string(), false);
        assert_eq!(print("t\n", &bindings, PrintKind::Boolean).unwrap(), "1");
        assert_eq!(print("f\n", &bindings, PrintKind::Boolean).unwrap(), "0");
    }

    #[test]
    fn number_prints_decimal_text() {
        let mut bindings = Bindings::new();
        bindings.define_number("n".to_string(), 42);
        assert_eq!(print("n\n", &bindings, PrintKind::Number).unwrap(), "42");
    }

    #[test]
    fn undeclared_boolean_is_a_lookup_error() {
        let bindings = Bindings::new();
        let err = print("ghost\n", &bindings, PrintKind::Boolean).unwrap_err();
        assert_eq!(err.code(), ErrorCode::E0004);
        assert!(matches!(
            err,
            NegError::Lookup {
                kind: VarKind::Boolean,
                ..
            }
        ));
    }

    #[test]
    fn undeclared_number_is_a_lookup_error() {
        let bindings = Bindings::new();
        let err = print("ghost\n", &bindings, PrintKind::Number).unwrap_err();
        assert_eq!(err.code(), ErrorCode::E0004);
    }

    #[test]
    fn string_prints_the_stored_value() {
        let mut bindings = Bindings::new();
        bindings.define_string("greet".to_string(), "hithere".to_string());
        assert_eq!(
            print("greet\n", &bindings, PrintKind::String).unwrap(),
            "hithere"
        );
    }

    #[test]
    fn unmatched_string_token_is_emitted_verbatim() {
        let bindings = Bindings::new();
        assert_eq!(
            print("literal\n", &bindings, PrintKind::String).unwrap(),
            "literal"
        );
    }

    #[test]
    fn line_break_escape_wins_over_a_variable_named_slash_n() {
        let mut bindings = Bindings::new();
        bindings.define_string("/n".to_string(), "shadowed".to_string());
        assert_eq!(print("/n\n", &bindings, PrintKind::String).unwrap(), "\n");
    }

    #[test]
    fn empty_string_token_prints_nothing() {
        let bindings = Bindings::new();
        assert_eq!(print("\n", &bindings, PrintKind::String).unwrap(), "");
    }

    #[test]
    fn print_never_mutates_tables() {
        let mut bindings = Bindings::new();
        bindings.define_string("x".to_string(), "v".to_string());
        print("x\n", &bindings, PrintKind::String).unwrap();
        print("unmatched\n", &bindings, PrintKind::String).unwrap();
        assert_eq!(bindings.lookup_string("x"), Some("v"));
        assert_eq!(bindings.lookup_string("unmatched"), None);
    }
}
