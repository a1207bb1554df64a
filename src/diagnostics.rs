//! Diagnostic sinks.
//!
//! Informational messages (which parameters a search assumed equal, how an
//! estimate was reoriented) go through an explicit sink passed to the
//! [`Evaluator`](crate::Evaluator) rather than a process-wide verbose flag.
//! Diagnostics are strictly additive: no computation depends on them.

use std::sync::Mutex;

/// Receiver for informational diagnostic messages.
pub trait DiagnosticSink {
    /// Record one message.
    fn note(&self, message: &str);
}

/// Sink that discards everything. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn note(&self, _message: &str) {}
}

/// Sink that writes to standard error, for interactive use.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn note(&self, message: &str) {
        eprintln!("[multibias] {}", message);
    }
}

/// Sink that keeps messages in memory, for inspection in tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Empty sink.
    pub fn new() -> MemorySink {
        MemorySink::default()
    }

    /// Messages recorded so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

impl DiagnosticSink for MemorySink {
    fn note(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
