//! Application execution logic.
//!
//! This module wires the validated configuration into a fetch cycle and
//! scheduler, then drives them until a shutdown signal arrives.

use thiserror::Error;
use tokio::signal;

use zonefeed::config::ValidatedConfig;
use zonefeed::fetch::HttpFetcher;
use zonefeed::pipeline::{CycleOutcome, FetchCycle, Scheduler};
use zonefeed::publish::FilePublisher;
use zonefeed::telemetry::{LivenessGauge, LogGauge};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Single-shot fetch exhausted all retry attempts.
    #[error("Fetch failed after {attempts} attempt(s)")]
    Exhausted {
        /// Number of attempts made before giving up.
        attempts: u32,
    },
}

/// Executes the main application loop.
///
/// This function:
/// 1. Reports the service as up
/// 2. Builds the fetch cycle from configuration
/// 3. Runs a single cycle (`--once`) or the perpetual scheduler
/// 4. Stops on shutdown signal (Ctrl+C or SIGTERM)
///
/// # Errors
///
/// Returns an error if a single-shot run (`--once`) exhausts all retry
/// attempts without publishing. The perpetual scheduler never fails; it
/// logs exhausted cycles and waits for the next interval.
///
/// # Coverage Note
///
/// This function is excluded from coverage because it requires a real
/// async runtime with signal handling.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    LogGauge.set_up();

    let cycle = build_cycle(&config);
    let scheduler = Scheduler::new(cycle, config.frequency);

    if config.once {
        tracing::info!("Single-shot mode enabled");
        return finish(scheduler.with_max_cycles(1).run().await);
    }

    tracing::info!(
        "Scheduling fetches every {}s",
        config.frequency.as_secs()
    );

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    tokio::select! {
        biased;

        () = &mut shutdown => {
            tracing::info!("Shutdown signal received, stopping...");
            Ok(())
        }

        _outcome = scheduler.run() => {
            // Unreachable: an uncapped scheduler never returns.
            Ok(())
        }
    }
}

/// Builds the fetch cycle from validated configuration.
fn build_cycle(config: &ValidatedConfig) -> FetchCycle<HttpFetcher> {
    let publisher = FilePublisher::new(&config.output_file, &config.output_file_temporary);

    FetchCycle::new(config.source.clone(), HttpFetcher::new(), publisher)
        .with_retry_policy(config.retry_policy.clone())
}

/// Maps the final outcome of a single-shot run to the process result.
const fn finish(outcome: CycleOutcome) -> Result<(), RunError> {
    match outcome {
        CycleOutcome::Completed { .. } => Ok(()),
        CycleOutcome::Exhausted { attempts } => Err(RunError::Exhausted { attempts }),
    }
}

/// Returns a future that completes when a shutdown signal is received.
///
/// Excluded from coverage - requires OS signal handling.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
