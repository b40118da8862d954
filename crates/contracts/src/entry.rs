//! LogEntry - immutable record of a single logged event

use chrono::{DateTime, Local};

use crate::Severity;

/// A single log event, created at the call site and never mutated.
///
/// Each sink consumes the entry independently; there is no shared mutable
/// state between sinks.
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Wall-clock time when the entry was created
    pub timestamp: DateTime<Local>,
    /// Severity tier of the entry
    pub severity: Severity,
    /// The log message
    pub message: String,
    /// Optional structured fields, rendered in insertion order
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    /// Create an entry stamped with the current local time
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            severity,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Attach a structured field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_carries_fields_in_order() {
        let entry = LogEntry::new(Severity::Info, "connected")
            .with_field("host", "10.0.0.1")
            .with_field("port", "22");

        assert_eq!(entry.severity, Severity::Info);
        assert_eq!(entry.message, "connected");
        assert_eq!(entry.fields[0], ("host".to_string(), "10.0.0.1".to_string()));
        assert_eq!(entry.fields[1], ("port".to_string(), "22".to_string()));
    }
}
