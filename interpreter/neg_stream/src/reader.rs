//! Incremental UTF-8 decoding over an arbitrary byte reader.
//!
//! [`ReaderSource`] wraps any [`Read`] implementation and yields one
//! decoded character per call, buffering bytes internally so the
//! underlying reader is consulted in large chunks. Decoding never looks
//! past the bytes of the character being produced, so a source backed by
//! a pipe or socket blocks only for data the interpreter actually needs.

use std::io::{self, Read};

use crate::source::CharSource;

/// Internal buffer capacity. One refill per 8 KiB of input in the common case.
const BUF_CAP: usize = 8 * 1024;

/// Returns the number of bytes in the UTF-8 character starting with `byte`.
///
/// Uses the leading byte to determine character width:
/// - `0xC0..=0xDF`: 2 bytes
/// - `0xE0..=0xEF`: 3 bytes
/// - `0xF0..=0xF7`: 4 bytes
/// - Everything else (ASCII, continuation, invalid): 1 byte
#[inline]
fn utf8_char_width(byte: u8) -> usize {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

fn invalid_utf8() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, "invalid UTF-8 in program source")
}

/// Character source decoding UTF-8 from any byte reader.
///
/// # Invariant
///
/// `start <= end <= buf.len()`; bytes in `start..end` are unconsumed input.
pub struct ReaderSource<R> {
    inner: R,
    buf: Vec<u8>,
    start: usize,
    end: usize,
    /// The underlying reader returned 0 bytes; no further refills.
    hit_eof: bool,
}

impl<R: Read> ReaderSource<R> {
    /// Create a source over `inner`, positioned at its current read offset.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: vec![0; BUF_CAP],
            start: 0,
            end: 0,
            hit_eof: false,
        }
    }

    #[inline]
    fn available(&self) -> usize {
        self.end - self.start
    }

    /// Pull more bytes from the reader, compacting consumed bytes first.
    ///
    /// After a return with no new bytes available, `hit_eof` is set and the
    /// source is exhausted (modulo a possibly truncated trailing sequence).
    fn refill(&mut self) -> io::Result<()> {
        if self.hit_eof {
            return Ok(());
        }
        if self.start > 0 {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
        }
        loop {
            match self.inner.read(&mut self.buf[self.end..]) {
                Ok(0) => {
                    self.hit_eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    self.end += n;
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: Read> CharSource for ReaderSource<R> {
    fn next_char(&mut self) -> io::Result<Option<char>> {
        if self.available() == 0 {
            self.refill()?;
            if self.available() == 0 {
                return Ok(None);
            }
        }

        let lead = self.buf[self.start];
        if lead.is_ascii() {
            self.start += 1;
            return Ok(Some(char::from(lead)));
        }

        let width = utf8_char_width(lead);
        if width == 1 {
            // Continuation byte or invalid lead in leading position.
            return Err(invalid_utf8());
        }

        // The full sequence may straddle a refill boundary.
        while self.available() < width {
            let before = self.available();
            self.refill()?;
            if self.available() == before {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "truncated UTF-8 sequence at end of program source",
                ));
            }
        }

        let bytes = &self.buf[self.start..self.start + width];
        let decoded = std::str::from_utf8(bytes).map_err(|_| invalid_utf8())?;
        let Some(c) = decoded.chars().next() else {
            return Err(invalid_utf8());
        };
        self.start += width;
        Ok(Some(c))
    }
}
