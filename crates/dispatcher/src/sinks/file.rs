//! File sink initializer - durable append-only log under the cache dir

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use contracts::{CoreError, Severity};

use crate::dispatcher::Dispatcher;
use crate::format::{TextFormatter, DEFAULT_TIMESTAMP_FORMAT};
use crate::sink::WriterSink;

/// Fixed log filename inside the cache directory
pub const LOG_FILE_NAME: &str = "k0sctl.log";

const CACHE_DIR_NAME: &str = "k0sctl";
const SESSION_BANNER: &str = "###### New session ######";

/// Collaborator supplying the cache directory location
pub trait CacheDir {
    /// The directory the log file lives in
    fn dir(&self) -> PathBuf;

    /// Create the directory; must not fail when it already exists
    fn ensure(&self, dir: &Path) -> io::Result<()> {
        fs::create_dir_all(dir)
    }
}

/// Platform cache location, `<cache>/k0sctl`
pub struct DefaultCacheDir;

impl CacheDir for DefaultCacheDir {
    fn dir(&self) -> PathBuf {
        dirs::cache_dir().map_or_else(
            || PathBuf::from(".k0sctl").join("cache"),
            |cache| cache.join(CACHE_DIR_NAME),
        )
    }
}

/// Ensure the log directory exists and open the log file in append mode
///
/// Prior content is preserved across sessions; a session-boundary banner
/// line stamped with the current time marks each new start.
///
/// # Errors
/// Directory creation or file open failures are fatal at startup: without
/// durable logging the tool's diagnosability guarantee is broken.
pub fn open_log_file(cache: &dyn CacheDir) -> Result<File, CoreError> {
    let dir = cache.dir();
    cache.ensure(&dir).map_err(|e| {
        CoreError::sink_init(
            "file",
            format!("error while creating log directory {}: {e}", dir.display()),
        )
    })?;

    let path = dir.join(LOG_FILE_NAME);
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| {
            CoreError::sink_init("file", format!("failed to open log {}: {e}", path.display()))
        })?;

    // Session boundary marker; a failed banner write is not fatal
    let _ = writeln!(
        file,
        "time=\"{}\" level=info msg=\"{SESSION_BANNER}\"",
        Local::now().format(DEFAULT_TIMESTAMP_FORMAT)
    );

    Ok(file)
}

/// Build the file sink: threshold fixed at Debug, full explicit timestamps
///
/// The file always captures more than the screen, but Trace entries are
/// excluded to bound its growth.
pub fn file_sink(cache: &dyn CacheDir) -> Result<WriterSink, CoreError> {
    let file = open_log_file(cache)?;

    let formatter = TextFormatter {
        full_timestamp: true,
        disable_level_truncation: true,
        ..Default::default()
    };

    Ok(WriterSink::new(
        "file",
        Box::new(file),
        formatter,
        Severity::Debug,
    ))
}

/// Construct the file sink and register it
pub fn init_file(dispatcher: &Dispatcher, cache: &dyn CacheDir) -> Result<(), CoreError> {
    dispatcher.register(Box::new(file_sink(cache)?));
    Ok(())
}
