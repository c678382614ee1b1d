//! Blocklist line to resolver directive transformation.
//!
//! Each accepted blocklist line becomes a [`DirectivePair`]: a
//! `local-zone` redirect declaration plus a `local-data` A record
//! answering the zone with the sink address. The mapping is pure,
//! order-preserving, and performs no domain syntax validation.

use tokio_stream::{Stream, StreamExt};


/// Sentinel address all blocked zones resolve to.
pub const SINK_ADDRESS: &str = "0.0.0.0";

/// First header line: redirect the wildcard root zone.
pub const HEADER_ZONE: &str = "local-zone: \"0.0.0.0\" redirect";

/// Second header line: answer the wildcard root zone with the sink address.
pub const HEADER_DATA: &str = "local-data: \"0.0.0.0 A 0.0.0.0\"";

/// A pair of unbound directives derived from one accepted blocklist line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectivePair {
    domain: String,
}

impl DirectivePair {
    /// Converts a raw blocklist line into a directive pair.
    ///
    /// The line is trimmed of surrounding whitespace. Returns `None` for
    /// comment lines (leading `#` after trimming) and for lines that trim
    /// to empty. Anything else is trusted verbatim as a domain.
    #[must_use]
    pub fn from_line(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }
        Some(Self {
            domain: trimmed.to_string(),
        })
    }

    /// Returns the domain this pair blocks.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Renders the `local-zone` redirect declaration.
    #[must_use]
    pub fn zone_line(&self) -> String {
        format!("local-zone: \"{}\" redirect", self.domain)
    }

    /// Renders the `local-data` address record for the zone.
    #[must_use]
    pub fn data_line(&self) -> String {
        format!("local-data: \"{} A {SINK_ADDRESS}\"", self.domain)
    }
}

/// Adapts a stream of raw lines into a stream of directive pairs.
///
/// Skipped lines (comments, blanks) produce no output; accepted lines
/// map one-to-one in input order. Errors from the underlying line
/// stream pass through unchanged.
pub fn directives<S, E>(lines: S) -> impl Stream<Item = Result<DirectivePair, E>>
where
    S: Stream<Item = Result<String, E>>,
{
    lines.filter_map(|item| match item {
        Ok(line) => DirectivePair::from_line(&line).map(Ok),
        Err(e) => Some(Err(e)),
    })
}
