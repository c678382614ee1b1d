//! Error types for blocklist downloads.

use thiserror::Error;

/// Error type for download operations.
///
/// Describes what went wrong without dictating recovery strategy;
/// the retry loop treats every variant identically.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other transport-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The server answered with an error status.
    ///
    /// The response body is not processed in this case.
    #[error("Server returned an error: {status}")]
    Status {
        /// The HTTP status code received.
        status: http::StatusCode,
    },

    /// Reading the response body failed mid-stream.
    #[error("Failed to read response body: {0}")]
    Body(#[source] std::io::Error),
}
