//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Blocklist source section
    #[serde(default)]
    pub source: SourceSection,

    /// Output file section
    #[serde(default)]
    pub output: OutputSection,

    /// Scheduling section
    #[serde(default)]
    pub schedule: ScheduleSection,

    /// Retry policy section
    #[serde(default)]
    pub retry: RetrySection,
}

/// Blocklist source section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceSection {
    /// Source URL of the blocklist
    pub url: Option<String>,
}

/// Output file section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Published file read by the resolver
    pub file: Option<String>,

    /// Temporary file used for atomic publication
    pub temporary: Option<String>,
}

/// Scheduling section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleSection {
    /// Seconds between fetch cycles
    pub frequency_secs: Option<u64>,
}

/// Retry policy section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetrySection {
    /// Maximum number of download attempts per cycle
    pub max_attempts: Option<u32>,

    /// Seconds between failed attempts
    pub delay_secs: Option<u64>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Zonefeed Configuration File

[source]
# Source URL of the plain-text blocklist (required)
# url = "https://example.com/blocklist.txt"

[output]
# Published file continuously read by the resolver (required)
# file = "/etc/unbound/blocklist.conf"

# Temporary file used for atomic publication.
# Must be in the same directory as the output file.
# (default: "<file>.tmp")
# temporary = "/etc/unbound/blocklist.conf.tmp"

[schedule]
# Seconds between fetch cycles (default: 86400, i.e. 24 hours)
frequency_secs = 86400

[retry]
# Download attempts per cycle before giving up until the next cycle (default: 10)
# max_attempts = 10

# Seconds between failed attempts (default: 1)
# delay_secs = 1
"#
    .to_string()
}
