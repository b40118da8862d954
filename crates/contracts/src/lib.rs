//! # Contracts
//!
//! Frozen interface contracts shared by the logging and config-source crates.
//! All business crates can only depend on this crate, reverse dependencies
//! are prohibited.
//!
//! ## Time Model
//! - Entries are stamped with local wall-clock time at the call site
//! - Formatting of timestamps is a per-sink concern, not part of the entry

mod colors;
mod entry;
mod error;
mod severity;
mod sink;

pub use colors::{colorize, ColorFlag};
pub use entry::LogEntry;
pub use error::CoreError;
pub use severity::Severity;
pub use sink::EventSink;
