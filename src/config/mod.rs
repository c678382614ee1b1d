//! Configuration layer for zonefeed.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority
//! (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file**
//! 3. **Built-in defaults**
//!
//! The source URL and output file path are required and have no
//! defaults; frequency and retry settings fall back to the built-in
//! defaults (24 hours, 10 attempts, 1 second).
//!
//! All validation happens here, before the pipeline starts: an invalid
//! URL, a missing output directory, or a temporary path on a different
//! directory than the output is a fatal startup error, never a retried
//! one.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
