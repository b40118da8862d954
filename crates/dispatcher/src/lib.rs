//! # Dispatcher
//!
//! Log event routing: a process-wide hub that broadcasts every entry to an
//! ordered list of independently configured sinks, each with its own
//! severity threshold and text formatter.
//!
//! # Example
//!
//! ```no_run
//! use contracts::Severity;
//! use dispatcher::sinks::{init_file, init_screen, DefaultCacheDir};
//!
//! let hub = dispatcher::global();
//! init_screen(hub, Severity::Info);
//! init_file(hub, &DefaultCacheDir).unwrap();
//!
//! hub.info("cluster reachable");
//! ```

mod dispatcher;
mod format;
mod sink;
pub mod sinks;

pub use crate::dispatcher::{global, Dispatcher};
pub use crate::format::{TextFormatter, DEFAULT_TIMESTAMP_FORMAT};
pub use crate::sink::WriterSink;
