//! Multi-candidate config source resolution

use std::env;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use is_terminal::IsTerminal;

use contracts::CoreError;

/// Conventional default config filename
pub const DEFAULT_CONFIG_FILE: &str = "k0sctl.yaml";

/// Short-extension sibling tried when the default filename is absent
pub const FALLBACK_CONFIG_FILE: &str = "k0sctl.yml";

/// Token meaning "read from standard input"
pub const STDIN_MARKER: &str = "-";

/// An opened, readable config source
///
/// Always either an open stream or a resolution failure; never a
/// partially-opened resource. The caller consumes it fully and releases
/// it by dropping.
#[derive(Debug)]
pub enum ConfigSource {
    /// The process's standard input, already open
    Stdin(io::Stdin),
    /// An opened file, with its resolved absolute path
    File { path: PathBuf, file: File },
}

impl ConfigSource {
    /// Resolved path for file sources, `None` for stdin
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Stdin(_) => None,
            ConfigSource::File { path, .. } => Some(path),
        }
    }

    /// Consume the source, reading it to the end
    pub fn read_to_string(self) -> io::Result<String> {
        let mut content = String::new();
        match self {
            ConfigSource::Stdin(mut stdin) => stdin.read_to_string(&mut content)?,
            ConfigSource::File { mut file, .. } => file.read_to_string(&mut content)?,
        };
        Ok(content)
    }
}

impl Read for ConfigSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            ConfigSource::Stdin(stdin) => stdin.read(buf),
            ConfigSource::File { file, .. } => file.read(buf),
        }
    }
}

/// Turn a path token into an opened readable stream
///
/// - `-` returns stdin, unless stdin is attached to an interactive
///   terminal ([`CoreError::StdinIsTerminal`]).
/// - Any other token is tried as a path relative to the working directory;
///   the bare default filename additionally falls back to its `.yml`
///   sibling. The first existing candidate is opened; non-existent
///   candidates are skipped without error.
///
/// # Errors
/// [`CoreError::ConfigNotFound`] when no candidate exists.
pub fn resolve(token: &str) -> Result<ConfigSource, CoreError> {
    if token == STDIN_MARKER {
        return resolve_stdin(io::stdin().is_terminal());
    }
    let base = env::current_dir()?;
    resolve_file(&base, token)
}

fn resolve_stdin(stdin_is_terminal: bool) -> Result<ConfigSource, CoreError> {
    if stdin_is_terminal {
        return Err(CoreError::StdinIsTerminal);
    }
    Ok(ConfigSource::Stdin(io::stdin()))
}

fn resolve_file(base: &Path, token: &str) -> Result<ConfigSource, CoreError> {
    let mut candidates = vec![token.to_string()];
    // Extension fallback applies only to the bare default filename
    if token == DEFAULT_CONFIG_FILE {
        candidates.push(FALLBACK_CONFIG_FILE.to_string());
    }

    for candidate in candidates {
        let path = base.join(&candidate);
        if !path.exists() {
            continue;
        }

        let path = path.canonicalize()?;
        let file = File::open(&path)?;
        return Ok(ConfigSource::File { path, file });
    }

    Err(CoreError::ConfigNotFound)
}
