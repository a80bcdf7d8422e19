#![expect(clippy::unwrap_used, reason = "test code")]

use std::time::Duration;

use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::gemini::{error_message, truncate};
use crate::{EmbeddingError, EmbeddingProvider, GeminiEmbeddingClient};

const EMBED_PATH: &str = "/v1beta/models/text-embedding-004:embedContent";

fn client_for(server: &MockServer) -> GeminiEmbeddingClient {
    GeminiEmbeddingClient::new(server.uri(), "text-embedding-004", Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_embed_success_returns_values_as_is() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path(EMBED_PATH))
        .and(query_param("key", "test-key"))
        .and(body_json(serde_json::json!({
            "model": "models/text-embedding-004",
            "content": {"parts": [{"text": "Inception A mind-bending heist"}]}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "embedding": {"values": [0.25, -1.5, 3.0]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let values = client.embed("Inception A mind-bending heist", "test-key").await.unwrap();
    assert_eq!(values, vec![0.25, -1.5, 3.0]);
}

#[tokio::test]
async fn test_embed_error_status_carries_provider_message() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path(EMBED_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.embed("text", "bad-key").await.unwrap_err();
    match &err {
        EmbeddingError::Fetch { status, message } => {
            assert_eq!(*status, 400);
            assert_eq!(message, "API key not valid. Please pass a valid API key.");
        },
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.caller_message(), "API key not valid. Please pass a valid API key.");
}

#[tokio::test]
async fn test_embed_no_retry_on_server_error() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path(EMBED_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.embed("text", "test-key").await.unwrap_err();
    assert!(matches!(err, EmbeddingError::Fetch { status: 503, .. }));
    assert_eq!(err.caller_message(), "Service Unavailable");
}

#[tokio::test]
async fn test_embed_malformed_success_body() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path(EMBED_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"embeddings": []})),
        )
        .mount(&server)
        .await;

    let err = client.embed("text", "test-key").await.unwrap_err();
    assert!(matches!(err, EmbeddingError::MalformedResponse(_)));
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client =
        GeminiEmbeddingClient::new("http://localhost:9/", "m", Duration::from_secs(1)).unwrap();
    assert_eq!(client.base_url(), "http://localhost:9");
    assert_eq!(client.model(), "m");
}

#[test]
fn test_error_message_fallbacks() {
    assert_eq!(error_message(r#"{"error": {"message": "quota"}}"#), "quota");
    assert_eq!(error_message("  plain text  "), "plain text");
    assert_eq!(error_message(""), "empty error response");
}

#[test]
fn test_truncate_unicode_boundary() {
    let s = "привет";
    let result = truncate(s, 3);
    assert!(result.len() <= 3);
    assert_eq!(truncate("hello", 10), "hello");
}
