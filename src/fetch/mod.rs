//! Blocklist download layer.
//!
//! This module provides:
//! - The [`BlocklistFetcher`] trait abstracting the download collaborator
//! - The streaming line type ([`LineStream`])
//! - The production reqwest implementation ([`HttpFetcher`])
//! - Download error types ([`FetchError`])

mod client;
mod error;

#[cfg(test)]
mod client_tests;

pub use client::{HttpFetcher, USER_AGENT};
pub use error::FetchError;

use std::pin::Pin;

use tokio_stream::Stream;
use url::Url;

/// A lazily consumed stream of blocklist lines.
///
/// Lines arrive as the response body is read, so arbitrarily large
/// blocklists are never buffered fully into memory.
pub type LineStream = Pin<Box<dyn Stream<Item = Result<String, FetchError>> + Send>>;

/// Trait for downloading the blocklist from a source URL.
///
/// # Design
///
/// This trait abstracts the HTTP transfer, enabling:
/// - Dependency injection for testing with scripted fetchers
/// - Swapping HTTP libraries without changing the pipeline
///
/// Implementations must treat every 4xx/5xx status as a failure and
/// follow redirects automatically.
pub trait BlocklistFetcher: Send + Sync {
    /// Downloads the blocklist at `source` as a line stream.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when:
    /// - The connection fails ([`FetchError::Connection`])
    /// - The request times out ([`FetchError::Timeout`])
    /// - The server answers with status >= 400 ([`FetchError::Status`])
    ///
    /// Body read failures surface later, as `Err` items of the stream.
    fn fetch(
        &self,
        source: &Url,
    ) -> impl std::future::Future<Output = Result<LineStream, FetchError>> + Send;
}
