use std::time::Duration;

use async_trait::async_trait;
use cinevec_core::env_parse_with_default;

use crate::api_types::{Content, EmbedContentRequest, EmbedContentResponse, ErrorEnvelope, Part};
use crate::{EmbeddingError, EmbeddingProvider};

/// Default embedding API origin.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Default embedding model (768 dimensions).
pub const DEFAULT_MODEL: &str = "text-embedding-004";
/// Request timeout when `CINEVEC_EMBEDDING_TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
/// Longest slice of an unparseable error body echoed back to callers.
const MAX_ERROR_BODY_LEN: usize = 500;

/// Client for the `embedContent` endpoint.
///
/// The API key is not part of the client; every call carries the caller's own key.
#[derive(Debug, Clone)]
pub struct GeminiEmbeddingClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiEmbeddingClient {
    /// Creates a client for `base_url` and `model`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, EmbeddingError> {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EmbeddingError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url, model: model.into() })
    }

    /// Creates a client from `CINEVEC_EMBEDDING_URL`, `CINEVEC_EMBEDDING_MODEL`
    /// and `CINEVEC_EMBEDDING_TIMEOUT_SECS`, falling back to the defaults.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, EmbeddingError> {
        let base_url =
            std::env::var("CINEVEC_EMBEDDING_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        let model =
            std::env::var("CINEVEC_EMBEDDING_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_owned());
        let timeout_secs =
            env_parse_with_default("CINEVEC_EMBEDDING_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);
        Self::new(base_url, model, Duration::from_secs(timeout_secs))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:embedContent", self.base_url, self.model)
    }
}

#[async_trait]
impl EmbeddingProvider for GeminiEmbeddingClient {
    async fn embed(&self, text: &str, api_key: &str) -> Result<Vec<f32>, EmbeddingError> {
        let request = EmbedContentRequest {
            model: format!("models/{}", self.model),
            content: Content { parts: vec![Part { text }] },
        };

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(&body);
            tracing::error!(status = status.as_u16(), %message, "Error fetching embedding");
            return Err(EmbeddingError::Fetch { status: status.as_u16(), message });
        }

        let parsed: EmbedContentResponse = serde_json::from_str(&body).map_err(|e| {
            EmbeddingError::MalformedResponse(format!(
                "{e} (body: {})",
                truncate(&body, MAX_ERROR_BODY_LEN)
            ))
        })?;

        tracing::debug!(dimensions = parsed.embedding.values.len(), "embedding fetched");
        Ok(parsed.embedding.values)
    }
}

/// Extracts `error.message` from a provider error body, falling back to the raw text.
pub(crate) fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => "empty error response".to_owned(),
        Err(_) => truncate(body.trim(), MAX_ERROR_BODY_LEN).to_owned(),
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub(crate) fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
