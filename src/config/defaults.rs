//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default seconds between fetch cycles (24 hours).
pub const FREQUENCY_SECS: u64 = 86_400;

/// Default maximum number of download attempts per cycle.
pub const RETRY_MAX_ATTEMPTS: u32 = 10;

/// Default seconds between failed attempts.
pub const RETRY_DELAY_SECS: u64 = 1;

/// Default fetch frequency as Duration.
#[must_use]
pub const fn frequency() -> Duration {
    Duration::from_secs(FREQUENCY_SECS)
}

/// Default inter-attempt delay as Duration.
#[must_use]
pub const fn retry_delay() -> Duration {
    Duration::from_secs(RETRY_DELAY_SECS)
}
