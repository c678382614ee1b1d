//! Production blocklist fetcher using reqwest.

use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;
use tokio_util::io::StreamReader;
use url::Url;

use super::{BlocklistFetcher, FetchError, LineStream};

/// Identifying user-agent sent with every download request.
pub const USER_AGENT: &str = concat!("zonefeed ", env!("CARGO_PKG_VERSION"));

/// Production fetcher using reqwest.
///
/// Issues a GET request with the identifying [`USER_AGENT`] header,
/// follows redirects (reqwest's default policy), and exposes the
/// response body as a line stream without buffering it fully.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    inner: reqwest::Client,
    user_agent: String,
}

impl HttpFetcher {
    /// Creates a new fetcher with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Creates a fetcher from an existing reqwest client.
    ///
    /// Useful when custom configuration (timeouts, TLS, proxies) is needed.
    #[must_use]
    pub fn from_client(client: reqwest::Client) -> Self {
        Self {
            inner: client,
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Overrides the user-agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl BlocklistFetcher for HttpFetcher {
    async fn fetch(&self, source: &Url) -> Result<LineStream, FetchError> {
        tracing::debug!(source = %source, "Downloading blocklist");

        let response = self
            .inner
            .get(source.as_str())
            .header(http::header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout
                } else {
                    FetchError::Connection(Box::new(e))
                }
            })?;

        let status = response.status();
        if status >= http::StatusCode::BAD_REQUEST {
            return Err(FetchError::Status { status });
        }

        // Decode the body incrementally: chunk stream -> buffered reader -> lines.
        let chunks = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(std::io::Error::other));
        let reader = tokio::io::BufReader::new(StreamReader::new(chunks));
        let lines = LinesStream::new(tokio::io::AsyncBufReadExt::lines(reader));

        Ok(Box::pin(lines.map(|line| line.map_err(FetchError::Body))))
    }
}
