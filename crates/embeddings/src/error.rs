//! Typed error enum for the embeddings crate.

use thiserror::Error;

/// Errors from embedding generation operations.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Provider answered with a non-success status; `message` is the provider's own.
    #[error("failed to fetch embedding: {message}")]
    Fetch { status: u16, message: String },
    #[error("malformed embedding response: {0}")]
    MalformedResponse(String),
    #[error("embedding client initialization failed: {0}")]
    ClientInit(String),
}

impl EmbeddingError {
    /// Message suitable for returning to API callers.
    ///
    /// For provider rejections this is exactly the provider's message.
    #[must_use]
    pub fn caller_message(&self) -> String {
        match self {
            Self::Fetch { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
