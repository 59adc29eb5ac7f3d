//! The sequential character source contract.
//!
//! The interpreter consumes its input one codepoint at a time and never
//! looks further ahead than the single pending character it holds itself.
//! Any type that can produce "next char or done" satisfies the contract;
//! the origin of the characters (file, network, in-memory buffer) is
//! irrelevant to the core.

use std::io;

/// A sequential source of characters.
///
/// `Ok(None)` is the end-of-input signal. Errors are `std::io::Error`:
/// read failures propagate as-is, and malformed byte sequences surface as
/// [`io::ErrorKind::InvalidData`].
pub trait CharSource {
    /// Yield the next character, or `None` when the source is exhausted.
    ///
    /// Once `None` has been returned, every subsequent call returns `None`.
    fn next_char(&mut self) -> io::Result<Option<char>>;
}

/// In-memory character source over a string slice.
///
/// Never returns `Err` — the source is already valid UTF-8.
pub struct StrSource<'a> {
    chars: std::str::Chars<'a>,
}

impl<'a> StrSource<'a> {
    /// Create a source positioned at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
        }
    }
}

impl CharSource for StrSource<'_> {
    #[inline]
    fn next_char(&mut self) -> io::Result<Option<char>> {
        Ok(self.chars.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn drain(source: &mut impl CharSource) -> Vec<char> {
        let mut out = Vec::new();
        while let Ok(Some(c)) = source.next_char() {
            out.push(c);
        }
        out
    }

    #[test]
    fn str_source_yields_chars_in_order() {
        let mut source = StrSource::new("ab!");
        assert_eq!(drain(&mut source), vec!['a', 'b', '!']);
    }

    #[test]
    fn str_source_empty_is_immediately_exhausted() {
        let mut source = StrSource::new("");
        assert!(matches!(source.next_char(), Ok(None)));
    }

    #[test]
    fn str_source_is_exhausted_after_none() {
        let mut source = StrSource::new("x");
        assert!(matches!(source.next_char(), Ok(Some('x'))));
        assert!(matches!(source.next_char(), Ok(None)));
        assert!(matches!(source.next_char(), Ok(None)));
    }

    #[test]
    fn str_source_handles_multibyte() {
        let mut source = StrSource::new("a\u{1F600}b");
        assert_eq!(drain(&mut source), vec!['a', '\u{1F600}', 'b']);
    }
}
