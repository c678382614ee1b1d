//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction,
//! so the pipeline can assume every value is usable.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use crate::pipeline::RetryPolicy;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and an
/// optional TOML config, or [`ValidatedConfig::load`] to also read the
/// config file named on the command line.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Source URL of the blocklist (required)
    pub source: Url,

    /// Published output file read by the resolver (required)
    pub output_file: PathBuf,

    /// Temporary output file, in the same directory as `output_file`
    pub output_file_temporary: PathBuf,

    /// Wait between fetch cycles
    pub frequency: Duration,

    /// Retry policy for download attempts within a cycle
    pub retry_policy: RetryPolicy,

    /// Run a single fetch cycle and exit
    pub once: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ source: {}, output: {}, temporary: {}, frequency: {}s, \
             retry: {}x/{}s, once: {} }}",
            self.source,
            self.output_file.display(),
            self.output_file_temporary.display(),
            self.frequency.as_secs(),
            self.retry_policy.max_attempts,
            self.retry_policy.delay.as_secs(),
            self.once,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional
    /// TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required fields are missing (`source`, `output_file`)
    /// - The source URL is invalid or not http(s)
    /// - The output directory does not exist
    /// - The temporary file is not in the output file's directory
    /// - Duration or retry values are invalid
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let source = Self::resolve_source(cli, toml)?;
        let output_file = Self::resolve_output_file(cli, toml)?;
        let output_file_temporary = Self::resolve_temporary(cli, toml, &output_file)?;
        let frequency = Self::resolve_frequency(cli, toml)?;
        let retry_policy = Self::build_retry_policy(cli, toml)?;

        Ok(Self {
            source,
            output_file,
            output_file_temporary,
            frequency,
            retry_policy,
            once: cli.once,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, or
    /// if the merged configuration is invalid.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_source(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        let url_str = cli
            .source
            .as_deref()
            .or_else(|| toml.and_then(|t| t.source.url.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(field::SOURCE, "Use --source or set source.url in config file")
            })?;

        let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: url_str.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(url)
    }

    fn resolve_output_file(cli: &Cli, toml: Option<&TomlConfig>) -> Result<PathBuf, ConfigError> {
        let path = cli
            .output_file
            .clone()
            .or_else(|| toml.and_then(|t| t.output.file.as_deref().map(PathBuf::from)))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::OUTPUT_FILE,
                    "Use --output-file or set output.file in config file",
                )
            })?;

        let path = expand_tilde(&path);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(ConfigError::OutputDirMissing {
                    path: parent.to_path_buf(),
                });
            }
        }

        Ok(path)
    }

    fn resolve_temporary(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        output: &Path,
    ) -> Result<PathBuf, ConfigError> {
        let temp = cli
            .output_file_temporary
            .clone()
            .or_else(|| toml.and_then(|t| t.output.temporary.as_deref().map(PathBuf::from)))
            .map_or_else(
                // Append .tmp instead of replacing the extension so
                // "blocklist.conf" becomes "blocklist.conf.tmp".
                || PathBuf::from(format!("{}.tmp", output.display())),
                |p| expand_tilde(&p),
            );

        if temp.parent() != output.parent() {
            return Err(ConfigError::TempPathMismatch {
                temp,
                output: output.to_path_buf(),
            });
        }

        Ok(temp)
    }

    fn resolve_frequency(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        let seconds = cli
            .frequency
            .or_else(|| toml.and_then(|t| t.schedule.frequency_secs))
            .unwrap_or(defaults::FREQUENCY_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "frequency",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }

    fn build_retry_policy(cli: &Cli, toml: Option<&TomlConfig>) -> Result<RetryPolicy, ConfigError> {
        let retry = toml.map(|t| &t.retry);

        let max_attempts = cli
            .retry_max
            .or_else(|| retry.and_then(|r| r.max_attempts))
            .unwrap_or(defaults::RETRY_MAX_ATTEMPTS);

        let delay_secs = cli
            .retry_delay
            .or_else(|| retry.and_then(|r| r.delay_secs))
            .unwrap_or(defaults::RETRY_DELAY_SECS);

        if max_attempts == 0 {
            return Err(ConfigError::InvalidRetry(
                "max_attempts must be greater than 0".to_string(),
            ));
        }

        Ok(RetryPolicy::new()
            .with_max_attempts(max_attempts)
            .with_delay(Duration::from_secs(delay_secs)))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and systems where the home directory
/// cannot be determined, pass through unchanged.
fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(stripped) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(stripped))
}
