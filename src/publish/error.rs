//! Error types for artifact publication.

use thiserror::Error;

use crate::fetch::FetchError;

/// Error type for publish operations.
///
/// Every variant leaves the previously published file untouched; only
/// the temporary file may be left in an indeterminate state.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Writing the temporary artifact failed.
    #[error("Failed to write temporary artifact: {0}")]
    Write(#[source] std::io::Error),

    /// The atomic rename onto the published path failed.
    #[error("Failed to replace published file: {0}")]
    Replace(#[source] std::io::Error),

    /// The upstream line stream failed while the artifact was being written.
    #[error("Blocklist stream failed: {0}")]
    Source(#[from] FetchError),
}
