use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// The read surfaces on [`crate::ArticleStore`] are deliberately infallible:
/// decoding and schema anomalies are recovered locally, never surfaced. Only
/// the ingestion boundary returns `PulseError`.
#[derive(Debug, Error)]
pub enum PulseError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A body or file could not be parsed as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A local file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },
}
