//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};

/// k0sctl - cluster configuration tool
#[derive(Parser, Debug)]
#[command(
    name = "k0sctl",
    author,
    version,
    about = "k0s cluster configuration tool",
    long_about = "Reads a cluster configuration document from a file or stdin,\n\
                  logging to the screen and to a durable session log under the\n\
                  user cache directory."
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long, global = true, env = "DEBUG")]
    pub debug: bool,

    /// Enable trace logging
    #[arg(long, global = true, env = "TRACE")]
    pub trace: bool,

    /// Path to cluster config yaml. Use '-' to read from stdin.
    #[arg(
        short = 'c',
        long,
        global = true,
        default_value = config_source::DEFAULT_CONFIG_FILE
    )]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve and read the cluster configuration source
    Validate(ValidateArgs),

    /// Print version information
    Version,
}

/// Arguments for the `validate` command
#[derive(Parser, Debug, Clone)]
pub struct ValidateArgs {
    /// Output result as JSON
    #[arg(long)]
    pub json: bool,
}
