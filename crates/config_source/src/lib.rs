//! # Config Source
//!
//! Resolves the user-supplied config token into an opened readable stream:
//! either standard input (via the `-` marker, rejected when stdin is an
//! interactive terminal) or the first existing file from a deterministic
//! candidate list, with extension fallback for the bare default filename.
//!
//! # Example
//!
//! ```no_run
//! let source = config_source::resolve("k0sctl.yaml").unwrap();
//! let content = source.read_to_string().unwrap();
//! ```

mod resolver;

pub use resolver::{
    resolve, ConfigSource, DEFAULT_CONFIG_FILE, FALLBACK_CONFIG_FILE, STDIN_MARKER,
};
