//! The fetch/transform/publish pipeline.
//!
//! This module provides:
//! - Fixed-delay bounded retry configuration ([`RetryPolicy`])
//! - One traced download-transform-publish cycle ([`FetchCycle`],
//!   [`CycleOutcome`], [`CycleError`])
//! - The perpetual scheduling loop ([`Scheduler`], [`CycleRunner`])

mod cycle;
mod retry;
mod scheduler;

#[cfg(test)]
mod retry_tests;

pub use cycle::{CycleError, CycleOutcome, FetchCycle};
pub use retry::RetryPolicy;
pub use scheduler::{CycleRunner, Scheduler};
