//! The perpetual fetch/wait scheduling loop.

use std::time::Duration;

use crate::time::{Sleeper, TokioSleeper};

use super::CycleOutcome;

/// Trait for running one fetch cycle.
///
/// This seam lets the scheduler be tested with scripted runners instead
/// of a real download pipeline.
pub trait CycleRunner: Send + Sync {
    /// Runs one cycle to completion or exhaustion.
    fn run_cycle(&self) -> impl std::future::Future<Output = CycleOutcome> + Send;
}

/// Drives fetch cycles forever, separated by a fixed wait.
///
/// The loop alternates between fetching and waiting, starting with a
/// fetch. Cycles run strictly in sequence and never overlap. An
/// exhausted cycle does not stop the loop; the next iteration retries
/// against a possibly updated remote source.
///
/// The loop has no terminal state of its own (unless a cycle cap is
/// configured); it stops when the caller drops the future, typically by
/// racing it against a shutdown signal. Dropping it cancels any
/// in-flight wait promptly.
#[derive(Debug)]
pub struct Scheduler<R, S = TokioSleeper> {
    runner: R,
    sleeper: S,
    interval: Duration,
    max_cycles: Option<u64>,
}

impl<R> Scheduler<R, TokioSleeper> {
    /// Creates a scheduler driving `runner` at the given interval.
    #[must_use]
    pub const fn new(runner: R, interval: Duration) -> Self {
        Self {
            runner,
            sleeper: TokioSleeper,
            interval,
            max_cycles: None,
        }
    }
}

impl<R, S> Scheduler<R, S> {
    /// Sets a custom sleeper for the inter-cycle wait.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> Scheduler<R, S2> {
        Scheduler {
            runner: self.runner,
            sleeper,
            interval: self.interval,
            max_cycles: self.max_cycles,
        }
    }

    /// Caps the number of cycles, after which [`Scheduler::run`] returns.
    ///
    /// Used for single-shot operation and in tests. No wait follows the
    /// final cycle.
    #[must_use]
    pub const fn with_max_cycles(mut self, max_cycles: u64) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }

    /// Returns the configured inter-cycle interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}

impl<R: CycleRunner, S: Sleeper> Scheduler<R, S> {
    /// Runs the fetch/wait loop.
    ///
    /// Returns the final cycle's outcome once the cycle cap is reached;
    /// without a cap this future never resolves.
    pub async fn run(&self) -> CycleOutcome {
        let mut completed: u64 = 0;

        loop {
            let outcome = self.runner.run_cycle().await;
            match outcome {
                CycleOutcome::Completed { processed } => {
                    tracing::info!(processed, "Blocklist updated");
                }
                CycleOutcome::Exhausted { attempts } => {
                    tracing::warn!(attempts, "Blocklist update failed; will retry next cycle");
                }
            }

            completed += 1;
            if let Some(max) = self.max_cycles {
                if completed >= max {
                    return outcome;
                }
            }

            tracing::debug!(
                secs = self.interval.as_secs(),
                "Waiting until next download attempt"
            );
            self.sleeper.sleep(self.interval).await;
        }
    }
}
