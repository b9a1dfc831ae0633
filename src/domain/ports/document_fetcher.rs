use async_trait::async_trait;
use thiserror::Error;

/// Transport-level failure while fetching a text document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("{0}")]
    Network(String),
}

/// Fetches public text documents (HTML pages, JavaScript assets).
///
/// Implementations must bound every request with a timeout and treat any
/// non-2xx response as [`FetchError::Status`].
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// GET `url` and return the response body as text.
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}
