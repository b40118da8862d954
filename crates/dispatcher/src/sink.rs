//! WriterSink - a sink over any writable stream

use std::io::Write;
use std::sync::Mutex;

use contracts::{CoreError, EventSink, LogEntry, Severity};

use crate::format::TextFormatter;

/// A destination with its own severity filter and formatter
///
/// The writer is guarded by a mutex so that concurrent `fire` calls never
/// interleave partial lines. Created once during startup and kept for the
/// process lifetime; the destination is released by process exit.
pub struct WriterSink {
    name: String,
    writer: Mutex<Box<dyn Write + Send>>,
    formatter: TextFormatter,
    threshold: Severity,
}

impl WriterSink {
    /// Create a sink writing formatted lines to `writer`
    pub fn new(
        name: impl Into<String>,
        writer: Box<dyn Write + Send>,
        formatter: TextFormatter,
        threshold: Severity,
    ) -> Self {
        Self {
            name: name.into(),
            writer: Mutex::new(writer),
            formatter,
            threshold,
        }
    }

    /// Replace the acceptance policy: admit everything at least as severe
    /// as `level`
    pub fn set_threshold(&mut self, level: Severity) {
        self.threshold = level;
    }
}

impl EventSink for WriterSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn threshold(&self) -> Severity {
        self.threshold
    }

    fn fire(&self, entry: &LogEntry) -> Result<(), CoreError> {
        // Rejected entries do zero formatting work and zero writes
        if !self.accepts(entry.severity) {
            return Ok(());
        }

        let line = match self.formatter.format(entry) {
            Ok(line) => line,
            Err(e) => {
                eprintln!("unable to format log entry: {e}");
                return Err(CoreError::format(&self.name, e.to_string()));
            }
        };

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| CoreError::sink_write(&self.name, "writer lock poisoned"))?;
        writer
            .write_all(line.as_bytes())
            .and_then(|()| writer.write_all(b"\n"))
            .and_then(|()| writer.flush())
            .map_err(|e| {
                let err = CoreError::sink_write(&self.name, e.to_string());
                // An accepted entry must never vanish without a trace
                eprintln!("unable to write log entry: {err}");
                err
            })
    }
}
