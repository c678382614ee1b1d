//! A single traced fetch/transform/publish cycle.

use thiserror::Error;
use tracing::{Instrument, field};
use url::Url;

use crate::fetch::{BlocklistFetcher, FetchError};
use crate::publish::{FilePublisher, PublishError};
use crate::time::{Sleeper, TokioSleeper};
use crate::transform;

use super::RetryPolicy;
use super::scheduler::CycleRunner;

/// Error type for one pipeline attempt.
///
/// All variants are contained by the retry loop; none escape a cycle.
#[derive(Debug, Error)]
pub enum CycleError {
    /// The download failed before any line was consumed.
    #[error("Download failed: {0}")]
    Fetch(#[from] FetchError),

    /// Writing or promoting the artifact failed.
    #[error("Publish failed: {0}")]
    Publish(#[from] PublishError),
}

/// The result of one complete cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The blocklist was published; `processed` counts directive pairs.
    Completed {
        /// Number of accepted entries written to the artifact.
        processed: u64,
    },

    /// Every attempt failed; the previously published artifact, if any,
    /// remains valid and untouched.
    Exhausted {
        /// Number of attempts made before giving up.
        attempts: u32,
    },
}

impl CycleOutcome {
    /// Returns true if the cycle published an artifact.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    /// Returns the processed-entry count for a completed cycle.
    #[must_use]
    pub const fn processed(&self) -> Option<u64> {
        match self {
            Self::Completed { processed } => Some(*processed),
            Self::Exhausted { .. } => None,
        }
    }
}

/// One bounded-retry execution of download, transform, and publish.
///
/// Composes a [`BlocklistFetcher`] with the [`FilePublisher`] under a
/// [`RetryPolicy`]: attempts run until the first success or until the
/// ceiling is reached, with the fixed delay between failures. Failure
/// handling is uniform; no error kind is treated as permanent within a
/// cycle.
///
/// # Type Parameters
///
/// - `F`: The fetcher implementation
/// - `S`: The sleeper for inter-attempt delays (defaults to [`TokioSleeper`])
#[derive(Debug)]
pub struct FetchCycle<F, S = TokioSleeper> {
    source: Url,
    fetcher: F,
    publisher: FilePublisher,
    sleeper: S,
    retry: RetryPolicy,
}

impl<F> FetchCycle<F, TokioSleeper> {
    /// Creates a new cycle with the default retry policy and sleeper.
    #[must_use]
    pub fn new(source: Url, fetcher: F, publisher: FilePublisher) -> Self {
        Self {
            source,
            fetcher,
            publisher,
            sleeper: TokioSleeper,
            retry: RetryPolicy::default(),
        }
    }
}

impl<F, S> FetchCycle<F, S> {
    /// Sets a custom sleeper for inter-attempt delays.
    ///
    /// This is primarily useful for testing to avoid actual delays.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> FetchCycle<F, S2> {
        FetchCycle {
            source: self.source,
            fetcher: self.fetcher,
            publisher: self.publisher,
            sleeper,
            retry: self.retry,
        }
    }

    /// Sets the retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    /// Returns the source URL.
    #[must_use]
    pub const fn source(&self) -> &Url {
        &self.source
    }

    /// Returns the configured retry policy.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }
}

impl<F: BlocklistFetcher, S: Sleeper> FetchCycle<F, S> {
    /// Executes a single attempt: download, transform, publish.
    async fn attempt(&self) -> Result<u64, CycleError> {
        let lines = self.fetcher.fetch(&self.source).await?;
        let processed = self.publisher.publish(transform::directives(lines)).await?;
        Ok(processed)
    }

    /// Runs the cycle to completion or exhaustion.
    ///
    /// The whole attempt sequence runs inside one tracing span; each
    /// attempt is a child span carrying the source URL and attempt
    /// number. The outer span records the processed count on success
    /// and is marked as an error on exhaustion. Never returns an error;
    /// the outcome is the contract.
    pub async fn run(&self) -> CycleOutcome {
        let span = tracing::info_span!(
            "fetch_blocklist",
            source = %self.source,
            outcome = field::Empty,
            processed = field::Empty,
        );
        let handle = span.clone();
        self.run_attempts(&handle).instrument(span).await
    }

    async fn run_attempts(&self, span: &tracing::Span) -> CycleOutcome {
        let max_attempts = self.retry.max_attempts;

        for attempt in 1..=max_attempts {
            tracing::debug!(
                source = %self.source,
                attempt,
                max_attempts,
                "Downloading blocklist"
            );

            let attempt_span =
                tracing::debug_span!("attempt", source = %self.source, number = attempt);
            match self.attempt().instrument(attempt_span).await {
                Ok(processed) => {
                    span.record("outcome", "ok");
                    span.record("processed", processed);
                    tracing::debug!(processed, "Processed blocklist entries");
                    return CycleOutcome::Completed { processed };
                }
                Err(e) => {
                    tracing::warn!(error = %e, attempt, "Blocklist update attempt failed");
                    if self.retry.should_retry(attempt) {
                        self.sleeper.sleep(self.retry.delay).await;
                    }
                }
            }
        }

        span.record("outcome", "error");
        CycleOutcome::Exhausted {
            attempts: max_attempts,
        }
    }
}

impl<F: BlocklistFetcher, S: Sleeper> CycleRunner for FetchCycle<F, S> {
    async fn run_cycle(&self) -> CycleOutcome {
        self.run().await
    }
}
