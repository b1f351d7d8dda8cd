//! The summarization model capability and its error type.

use async_trait::async_trait;
use thiserror::Error;

/// Errors produced by a summarization model call.
#[derive(Debug, Error)]
pub enum ModelError {
    /// HTTP transport failure.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint base URL could not be parsed.
    #[error("invalid endpoint url: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// Endpoint returned a non-success status.
    #[error("model endpoint returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for logging.
        body: String,
    },

    /// The model is still loading on the inference host.
    #[error("model is not ready yet (still loading)")]
    NotReady,

    /// Response body could not be interpreted.
    #[error("malformed model response: {0}")]
    MalformedResponse(String),

    /// The call exceeded its deadline.
    #[error("model call timed out")]
    Timeout,
}

/// Opaque abstractive summarization capability.
///
/// Implementations may truncate the input to their supported window, and the
/// word bounds are honored on a best-effort basis only: the underlying model
/// can exceed or fall short of them.
#[async_trait]
pub trait SummaryModel: Send + Sync {
    /// Summarize `text` into roughly `min_words..=max_words` words.
    ///
    /// # Errors
    /// Returns an error if the underlying model call fails.
    async fn summarize(
        &self,
        text: &str,
        min_words: usize,
        max_words: usize,
    ) -> Result<String, ModelError>;
}
