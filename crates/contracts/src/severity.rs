//! Severity model - totally ordered log levels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Log severity, ordered from least verbose (`Fatal`) to most verbose
/// (`Trace`).
///
/// The derived `Ord` follows declaration order, so `Fatal < Trace`. A sink
/// thresholded at some severity admits every entry that is at least as
/// severe, i.e. every entry whose severity compares less than or equal to
/// the threshold.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Unrecoverable error, the process is about to exit
    Fatal,
    /// Operation failed
    Error,
    /// Something suspicious, operation continues
    Warning,
    /// Normal operational messages
    Info,
    /// Diagnostic detail
    Debug,
    /// Very fine-grained diagnostic detail
    Trace,
}

impl Severity {
    /// All severities in verbosity order (least verbose first)
    pub const ALL: [Severity; 6] = [
        Severity::Fatal,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Debug,
        Severity::Trace,
    ];

    /// Threshold-side acceptance test.
    ///
    /// Returns true iff `entry` is at least as severe as `self`. A more
    /// verbose threshold admits more severities, never fewer: a threshold
    /// of `Info` admits `Fatal`/`Error`/`Warning`/`Info` and rejects
    /// `Debug`/`Trace`.
    pub fn admits(self, entry: Severity) -> bool {
        entry <= self
    }

    /// Lowercase name, used for `level=` key-value output
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Fatal => "fatal",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Debug => "debug",
            Severity::Trace => "trace",
        }
    }

    /// Uppercase label for human-readable output
    pub fn label(self) -> &'static str {
        match self {
            Severity::Fatal => "FATAL",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Trace => "TRACE",
        }
    }

    /// Label truncated to four characters, the compact screen convention
    pub fn short_label(self) -> &'static str {
        match self {
            Severity::Fatal => "FATA",
            Severity::Error => "ERRO",
            Severity::Warning => "WARN",
            Severity::Info => "INFO",
            Severity::Debug => "DEBU",
            Severity::Trace => "TRAC",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
