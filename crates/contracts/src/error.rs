//! Layered error definitions
//!
//! Categorized by source: sink lifecycle / formatting / config source / io

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum CoreError {
    // ===== Sink Errors =====
    /// Sink could not be constructed; fatal at startup
    #[error("sink '{sink_name}' init error: {message}")]
    SinkInit { sink_name: String, message: String },

    /// Sink write error; isolated to the failing sink
    #[error("sink '{sink_name}' write error: {message}")]
    SinkWrite { sink_name: String, message: String },

    /// A single entry failed to render for one sink
    #[error("sink '{sink_name}' format error: {message}")]
    Format { sink_name: String, message: String },

    // ===== Config Source Errors =====
    /// The stdin marker was used but stdin is an interactive terminal
    #[error("can't read stdin")]
    StdinIsTerminal,

    /// Config resolution exhausted all candidates
    #[error("failed to locate configuration")]
    ConfigNotFound,

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl CoreError {
    /// Create sink init error
    pub fn sink_init(sink_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SinkInit {
            sink_name: sink_name.into(),
            message: message.into(),
        }
    }

    /// Create sink write error
    pub fn sink_write(sink_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SinkWrite {
            sink_name: sink_name.into(),
            message: message.into(),
        }
    }

    /// Create format error
    pub fn format(sink_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Format {
            sink_name: sink_name.into(),
            message: message.into(),
        }
    }
}
