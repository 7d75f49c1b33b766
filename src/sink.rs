//! Logging sink contract and built-in sinks.
//!
//! A sink is an explicit collaborator handed to the logger, never ambient
//! global state, so callers can capture and assert on log output in tests.

use parking_lot::Mutex;

/// Destination for finished log records.
pub trait LogSink: Send + Sync {
    /// Record one already-formatted message at info level.
    fn info(&self, message: &str);
}

/// Sink that forwards records to [`tracing`] at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!(target: "reqlog", "{}", message);
    }
}

/// Sink that keeps records in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of all recorded messages.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    /// Drain all recorded messages.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.lock())
    }
}

impl LogSink for MemorySink {
    fn info(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}
