//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Zonefeed: blocklist to resolver-zone publisher
///
/// Periodically downloads a plain-text domain blocklist and atomically
/// publishes it as unbound `local-zone` directives.
#[derive(Debug, Parser)]
#[command(name = "zonefeed")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Source URL of the blocklist (required for run mode)
    #[arg(long)]
    pub source: Option<String>,

    /// Published output file read by the resolver (required for run mode)
    #[arg(long = "output-file")]
    pub output_file: Option<PathBuf>,

    /// Temporary output file (default: "<output-file>.tmp", same directory)
    #[arg(long = "output-file-temporary")]
    pub output_file_temporary: Option<PathBuf>,

    /// Seconds between fetch cycles
    #[arg(long)]
    pub frequency: Option<u64>,

    /// Maximum number of download attempts per cycle
    #[arg(long = "retry-max")]
    pub retry_max: Option<u32>,

    /// Seconds between failed attempts within a cycle
    #[arg(long = "retry-delay")]
    pub retry_delay: Option<u64>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Run a single fetch cycle and exit
    #[arg(long)]
    pub once: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for zonefeed
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "zonefeed.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
