//! # k0sctl CLI
//!
//! Entry point wiring:
//! - screen and file sink registration with the process-wide dispatcher
//! - config source resolution and read-back
//! - copyright banner

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::run_validate;
use contracts::{colorize, Severity};
use dispatcher::sinks::{init_file, init_screen, log_level_for, DefaultCacheDir};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Version => {
            // Non-interactive invocation: screen stays silent below Fatal
            init_logging(&cli, Severity::Fatal)?;
            println!("version: v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Validate(args) => {
            init_logging(&cli, Severity::Info)?;
            display_banner();
            run_validate(&cli, args)
        }
    }
}

/// Register the screen and file sinks with the process-wide dispatcher
///
/// Startup sink failures propagate and terminate the tool before any work
/// begins.
fn init_logging(cli: &Cli, default_level: Severity) -> Result<()> {
    let hub = dispatcher::global();
    init_screen(hub, log_level_for(cli.debug, cli.trace, default_level));
    init_file(hub, &DefaultCacheDir)?;
    Ok(())
}

fn display_banner() {
    let name = if colorize().enabled() {
        concat!("\x1b[1m", "k0sctl", "\x1b[0m")
    } else {
        "k0sctl"
    };
    println!(
        "{name} v{} Copyright 2026, k0sctl authors.",
        env!("CARGO_PKG_VERSION")
    );
}
