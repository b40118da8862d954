//! Dispatcher - broadcast fan-out to registered sinks

use std::sync::RwLock;

use contracts::{EventSink, LogEntry, Severity};

/// Process-wide hub routing every entry to each registered sink
///
/// Lifecycle contract: sinks are registered during single-threaded startup,
/// entries are emitted for the remainder of the process lifetime, sinks are
/// never removed. `emit` is safe to call from multiple threads; each sink
/// serializes its own writes.
pub struct Dispatcher {
    sinks: RwLock<Vec<Box<dyn EventSink>>>,
}

impl Dispatcher {
    /// Create an empty dispatcher
    pub const fn new() -> Self {
        Self {
            sinks: RwLock::new(Vec::new()),
        }
    }

    /// Append a sink to the ordered list
    pub fn register(&self, sink: Box<dyn EventSink>) {
        if let Ok(mut sinks) = self.sinks.write() {
            sinks.push(sink);
        }
    }

    /// Number of registered sinks
    pub fn sink_count(&self) -> usize {
        self.sinks.read().map_or(0, |sinks| sinks.len())
    }

    /// Broadcast one entry to every sink in registration order
    ///
    /// This is a broadcast, not a pipeline: each sink filters and fails
    /// independently, and a failing sink never blocks the rest. The
    /// dispatcher keeps no log content.
    pub fn emit(&self, entry: &LogEntry) {
        let Ok(sinks) = self.sinks.read() else {
            return;
        };
        for sink in sinks.iter() {
            // Format and write failures were already reported to stderr
            // by the sink; keep going
            let _ = sink.fire(entry);
        }
    }

    /// Emit a plain message at `severity`
    pub fn log(&self, severity: Severity, message: impl Into<String>) {
        self.emit(&LogEntry::new(severity, message));
    }

    /// Emit at `Fatal`
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(Severity::Fatal, message);
    }

    /// Emit at `Error`
    pub fn error(&self, message: impl Into<String>) {
        self.log(Severity::Error, message);
    }

    /// Emit at `Warning`
    pub fn warning(&self, message: impl Into<String>) {
        self.log(Severity::Warning, message);
    }

    /// Emit at `Info`
    pub fn info(&self, message: impl Into<String>) {
        self.log(Severity::Info, message);
    }

    /// Emit at `Debug`
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Severity::Debug, message);
    }

    /// Emit at `Trace`
    pub fn trace(&self, message: impl Into<String>) {
        self.log(Severity::Trace, message);
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: Dispatcher = Dispatcher::new();

/// The process-wide dispatcher instance
///
/// Register sinks once at startup, emit thereafter. Prefer passing a
/// `&Dispatcher` explicitly where feasible; this instance exists so any
/// code path can report diagnostics without being handed a reference.
pub fn global() -> &'static Dispatcher {
    &GLOBAL
}
