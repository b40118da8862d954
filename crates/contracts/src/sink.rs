//! EventSink trait - dispatcher output interface
//!
//! Defines the abstract interface for log sinks.

use crate::{CoreError, LogEntry, Severity};

/// Log output capability
///
/// All sink implementations must implement this trait. The dispatcher
/// holds an ordered collection of boxed sinks and broadcasts every entry
/// to each of them.
pub trait EventSink: Send + Sync {
    /// Sink name (used for error context)
    fn name(&self) -> &str;

    /// Minimum severity this sink records
    fn threshold(&self) -> Severity;

    /// Deliver one entry
    ///
    /// Implementations must check [`EventSink::accepts`] before doing any
    /// formatting work, and must serialize writes to their destination.
    ///
    /// # Errors
    /// Returns format or write errors; the failure stays isolated to this
    /// sink and must not abort the process.
    fn fire(&self, entry: &LogEntry) -> Result<(), CoreError>;

    /// Whether an entry at `severity` passes this sink's filter
    fn accepts(&self, severity: Severity) -> bool {
        self.threshold().admits(severity)
    }
}
