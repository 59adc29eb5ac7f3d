//! The append-only output sink.
//!
//! Emitted text can be directed to different destinations:
//! - Native: stdout (default)
//! - Tests and embedding: buffer for capture and assertions
//! - Validation: discarded silently
//!
//! The sink inserts nothing between writes and never rolls anything back —
//! output emitted before a failing statement stays emitted.
//!
//! # Performance
//! Uses enum dispatch instead of trait objects for O(1) static dispatch
//! on this per-statement path.

use parking_lot::Mutex;

/// Default sink that writes to stdout.
#[derive(Default)]
pub struct StdoutSink;

impl StdoutSink {
    /// Append text exactly as computed, no separator.
    pub fn write(&self, text: &str) {
        print!("{text}");
    }

    /// Get all captured output.
    ///
    /// Returns empty string since stdout doesn't capture.
    pub fn captured(&self) -> String {
        String::new()
    }

    /// Clear captured output.
    pub fn clear(&self) {
        // Nothing to clear
    }
}

/// Sink that captures output to a buffer.
///
/// Used for tests and for embedding the interpreter where the caller wants
/// the emitted text back as a value.
pub struct BufferSink {
    buffer: Mutex<String>,
}

impl BufferSink {
    /// Create a new buffer sink.
    pub fn new() -> Self {
        BufferSink {
            buffer: Mutex::new(String::new()),
        }
    }

    /// Append text exactly as computed, no separator.
    pub fn write(&self, text: &str) {
        self.buffer.lock().push_str(text);
    }

    /// Get all captured output.
    pub fn captured(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Clear captured output.
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Default for BufferSink {
    fn default() -> Self {
        Self::new()
    }
}

/// Output sink implementation using enum dispatch.
pub enum SinkImpl {
    /// Writes to stdout (default).
    Stdout(StdoutSink),
    /// Captures to a buffer (tests/embedding).
    Buffer(BufferSink),
    /// Discards all output silently (validation runs).
    Silent,
}

impl SinkImpl {
    /// Append text exactly as computed, no separator.
    pub fn write(&self, text: &str) {
        match self {
            Self::Stdout(s) => s.write(text),
            Self::Buffer(s) => s.write(text),
            Self::Silent => {}
        }
    }

    /// Get all captured output.
    ///
    /// Returns empty string for sinks that don't capture (stdout, silent).
    pub fn captured(&self) -> String {
        match self {
            Self::Stdout(s) => s.captured(),
            Self::Buffer(s) => s.captured(),
            Self::Silent => String::new(),
        }
    }

    /// Clear captured output, if any.
    pub fn clear(&self) {
        match self {
            Self::Stdout(s) => s.clear(),
            Self::Buffer(s) => s.clear(),
            Self::Silent => {}
        }
    }
}

/// Shared sink handle that can be passed around.
pub type SharedSink = std::sync::Arc<SinkImpl>;

/// Create a default stdout sink.
pub fn stdout_sink() -> SharedSink {
    std::sync::Arc::new(SinkImpl::Stdout(StdoutSink))
}

/// Create a buffer sink for capturing output.
pub fn buffer_sink() -> SharedSink {
    std::sync::Arc::new(SinkImpl::Buffer(BufferSink::new()))
}

/// Create a silent sink that discards all output.
///
/// Used for `check`-style validation runs where the script should execute
/// without emitting anything.
pub fn silent_sink() -> SharedSink {
    std::sync::Arc::new(SinkImpl::Silent)
}
