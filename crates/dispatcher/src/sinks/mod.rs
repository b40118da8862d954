//! Sink initializers
//!
//! Construct and register the two concrete sinks used by the tool: the
//! interactive screen sink and the durable file sink.

mod file;
mod screen;

pub use self::file::{
    file_sink, init_file, open_log_file, CacheDir, DefaultCacheDir, LOG_FILE_NAME,
};
pub use self::screen::{init_screen, log_level_for, screen_sink};
