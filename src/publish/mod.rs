//! Atomic artifact publication.
//!
//! This module provides:
//! - The atomic write-temp-then-rename publisher ([`FilePublisher`])
//! - Publication error types ([`PublishError`])

mod error;
mod writer;

#[cfg(test)]
mod writer_tests;

pub use error::PublishError;
pub use writer::FilePublisher;
