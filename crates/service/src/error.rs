//! Typed error enum for the service layer.
//!
//! Unifies storage and embedding failures into a single error type.

use cinevec_embeddings::EmbeddingError;
use cinevec_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage and embedding failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Embedding provider call failed.
    #[error("embedding: {0}")]
    Embedding(#[from] EmbeddingError),

    /// Provider returned a vector of the wrong length.
    #[error("embedding has {actual} dimensions, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Caller provided invalid input (empty title, description or query).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    /// Whether the caller, not the backend, is at fault.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Message returned to HTTP callers. Provider rejections pass through verbatim.
    pub fn client_message(&self) -> String {
        match self {
            Self::Embedding(e) => e.caller_message(),
            Self::InvalidInput(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}
