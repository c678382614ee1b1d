//! Retry policy configuration for fetch cycles.

use std::time::Duration;

/// Configuration for fixed-delay bounded retry behavior.
///
/// Controls how many attempts a single cycle makes and how long to wait
/// between failed attempts. The delay is fixed; there is no backoff
/// growth. All failure kinds are retried identically.
///
/// # Defaults
///
/// - `max_attempts`: 10
/// - `delay`: 1 second
///
/// # Example
///
/// ```
/// use zonefeed::pipeline::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::default();
///
/// let custom = RetryPolicy::new()
///     .with_max_attempts(3)
///     .with_delay(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the initial attempt).
    ///
    /// A value of 1 means no retries; only the initial attempt is made.
    pub max_attempts: u32,

    /// Delay between failed attempts.
    pub delay: Duration,
}

impl RetryPolicy {
    /// Default maximum attempts.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

    /// Default inter-attempt delay (1 second).
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

    /// Minimum value for `max_attempts`.
    pub const MIN_MAX_ATTEMPTS: u32 = 1;

    /// Creates a new retry policy with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            delay: Self::DEFAULT_DELAY,
        }
    }

    /// Sets the maximum number of attempts.
    ///
    /// # Panics
    ///
    /// Panics if `max_attempts` is less than 1.
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        assert!(
            max_attempts >= Self::MIN_MAX_ATTEMPTS,
            "max_attempts must be at least 1"
        );
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the delay between failed attempts.
    ///
    /// Zero delay is supported (useful for testing) but not recommended
    /// for production as it creates a tight retry loop.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns true if the given attempt number should be followed by
    /// another attempt.
    ///
    /// # Arguments
    ///
    /// * `attempt` - The attempt number (1 = first attempt).
    #[must_use]
    pub const fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}
