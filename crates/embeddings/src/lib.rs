//! Embedding generation for cinevec
//!
//! Text is embedded by a remote provider keyed by a caller-supplied API key.

pub mod error;
mod api_types;
mod gemini;
#[cfg(test)]
mod tests;

use async_trait::async_trait;

pub use error::EmbeddingError;
pub use gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, GeminiEmbeddingClient};

/// Source of text embeddings. Injected into the service layer as `Arc<dyn EmbeddingProvider>`.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed `text` on behalf of the holder of `api_key`.
    ///
    /// The returned vector is not checked against any expected dimension.
    async fn embed(&self, text: &str, api_key: &str) -> Result<Vec<f32>, EmbeddingError>;
}
