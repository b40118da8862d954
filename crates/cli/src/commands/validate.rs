//! `validate` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;

use contracts::{LogEntry, Severity};

use crate::cli::{Cli, ValidateArgs};

/// Resolution result for JSON output
#[derive(Serialize)]
struct ValidationResult {
    valid: bool,
    source: String,
    bytes: usize,
}

/// Execute the `validate` command
///
/// Resolves the config token to an opened stream, reads it fully back into
/// the in-memory configuration value, and reports where it came from.
pub fn run_validate(cli: &Cli, args: &ValidateArgs) -> Result<()> {
    let hub = dispatcher::global();
    hub.debug(format!("resolving configuration from '{}'", cli.config));

    let source = config_source::resolve(&cli.config)
        .with_context(|| format!("can't read config from '{}'", cli.config))?;
    let origin = source
        .path()
        .map_or_else(|| "stdin".to_string(), |p| p.display().to_string());

    let content = source
        .read_to_string()
        .with_context(|| format!("failed to read configuration from {origin}"))?;

    hub.emit(
        &LogEntry::new(Severity::Info, "configuration loaded")
            .with_field("source", origin.as_str())
            .with_field("bytes", content.len().to_string()),
    );

    let result = ValidationResult {
        valid: true,
        source: origin,
        bytes: content.len(),
    };

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .context("Failed to serialize validation result")?;
        println!("{json}");
    } else {
        println!("✓ configuration read from {} ({} bytes)", result.source, result.bytes);
    }

    Ok(())
}
