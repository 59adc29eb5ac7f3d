//! Type-specific value readers.
//!
//! Each reader consumes a name token via the scanner, then its type's
//! value region up to the line break, and stores the result in the
//! matching table. A reader is a pure function of (scanner, tables) —
//! all state it touches arrives as an argument.

mod boolean;
mod number;
mod text;

pub use boolean::read_boolean;
pub use number::read_number;
pub use text::read_string;

use neg_diagnostic::{empty_name, RunResult};

/// Reject an empty declared name.
///
/// Shared by all three readers: a declaration needs a key to store under.
/// (The print evaluator has no such restriction — an empty string token is
/// a legal literal.)
fn require_name(name: &str, line: u32) -> RunResult<()> {
    if name.is_empty() {
        return Err(empty_name(line));
    }
    Ok(())
}
