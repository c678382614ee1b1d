//! Time abstraction for testability.
//!
//! This module provides a [`Sleeper`] trait that allows injecting
//! instant sleepers in tests while using real tokio timers in production.

use std::time::Duration;

/// Abstraction over asynchronous delays.
///
/// The retry loop and the scheduler both wait between operations;
/// implementations of this trait decide how that wait is performed,
/// allowing tests to skip delays entirely.
pub trait Sleeper: Send + Sync {
    /// Waits for the given duration.
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send;
}

/// Production sleeper backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Sleeper that returns immediately, for tests.
///
/// Using this in place of [`TokioSleeper`] makes retry and scheduling
/// tests run instantly without mock clocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantSleeper;

impl Sleeper for InstantSleeper {
    async fn sleep(&self, _duration: Duration) {}
}
