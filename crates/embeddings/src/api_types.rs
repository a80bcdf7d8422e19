use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct EmbedContentRequest<'a> {
    pub model: String,
    pub content: Content<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Content<'a> {
    pub parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Part<'a> {
    pub text: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EmbedContentResponse {
    pub embedding: ContentEmbedding,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContentEmbedding {
    pub values: Vec<f32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}
