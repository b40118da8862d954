//! TextFormatter - renders a single log entry to a text line

use std::fmt::Write;

use contracts::{CoreError, LogEntry, Severity};

/// RFC822-style timestamp, matching the session banner in the log file.
/// Renders a numeric offset (`+0000`) rather than a zone name; chrono has
/// no zone-name source for `Local`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d %b %y %H:%M %z";

/// Compact clock used on screen when a full timestamp is not requested
const SHORT_TIMESTAMP_FORMAT: &str = "%H:%M:%S";

const COLOR_RED: &str = "\x1b[31m";
const COLOR_YELLOW: &str = "\x1b[33m";
const COLOR_CYAN: &str = "\x1b[36m";
const COLOR_GRAY: &str = "\x1b[37m";
const COLOR_RESET: &str = "\x1b[0m";

/// Per-sink formatting configuration, immutable after construction
#[derive(Debug, Clone)]
pub struct TextFormatter {
    /// Omit the timestamp entirely
    pub disable_timestamp: bool,
    /// Use `timestamp_format` instead of the short clock
    pub full_timestamp: bool,
    /// chrono format string used when `full_timestamp` is set
    pub timestamp_format: String,
    /// Apply ANSI color codes
    pub force_colors: bool,
    /// Keep full level labels instead of the 4-character form
    pub disable_level_truncation: bool,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self {
            disable_timestamp: false,
            full_timestamp: false,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            force_colors: false,
            disable_level_truncation: false,
        }
    }
}

impl TextFormatter {
    /// Render one entry to a single line, without a trailing newline
    ///
    /// # Errors
    /// Fails when the configured timestamp format cannot be rendered; the
    /// caller reports the failure and skips the write for this sink only.
    pub fn format(&self, entry: &LogEntry) -> Result<String, CoreError> {
        if self.force_colors {
            self.format_colored(entry)
        } else {
            self.format_plain(entry)
        }
    }

    /// `LEVL[15:04:05] message  key=value` with ANSI color on the label
    fn format_colored(&self, entry: &LogEntry) -> Result<String, CoreError> {
        let color = level_color(entry.severity);
        let label = if self.disable_level_truncation {
            entry.severity.label()
        } else {
            entry.severity.short_label()
        };

        let mut line = String::new();
        if self.disable_timestamp {
            let _ = write!(line, "{color}{label}{COLOR_RESET} {}", entry.message);
        } else {
            let ts = self.render_timestamp(entry)?;
            let _ = write!(line, "{color}{label}{COLOR_RESET}[{ts}] {}", entry.message);
        }

        for (key, value) in &entry.fields {
            let _ = write!(
                line,
                " {color}{key}{COLOR_RESET}={}",
                quote_if_needed(value)
            );
        }

        Ok(line)
    }

    /// logfmt-style `time="…" level=… msg="…" key=value`
    fn format_plain(&self, entry: &LogEntry) -> Result<String, CoreError> {
        let mut line = String::new();

        if !self.disable_timestamp {
            let ts = self.render_timestamp(entry)?;
            let _ = write!(line, "time=\"{ts}\" ");
        }
        let _ = write!(
            line,
            "level={} msg={}",
            entry.severity,
            quote_if_needed(&entry.message)
        );
        for (key, value) in &entry.fields {
            let _ = write!(line, " {key}={}", quote_if_needed(value));
        }

        Ok(line)
    }

    fn render_timestamp(&self, entry: &LogEntry) -> Result<String, CoreError> {
        let format = if self.full_timestamp {
            self.timestamp_format.as_str()
        } else {
            SHORT_TIMESTAMP_FORMAT
        };

        let mut ts = String::new();
        write!(ts, "{}", entry.timestamp.format(format)).map_err(|_| {
            CoreError::Other(format!("unrenderable timestamp format '{format}'"))
        })?;
        Ok(ts)
    }
}

fn level_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Fatal | Severity::Error => COLOR_RED,
        Severity::Warning => COLOR_YELLOW,
        Severity::Info => COLOR_CYAN,
        Severity::Debug | Severity::Trace => COLOR_GRAY,
    }
}

/// Quote a value unless it is plain enough to stand bare
fn quote_if_needed(value: &str) -> String {
    let plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '/' | '@' | '^' | '+' | '-' | ':'));
    if plain {
        value.to_string()
    } else {
        format!("\"{}\"", value.replace('"', "\\\""))
    }
}
