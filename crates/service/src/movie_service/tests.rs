#![expect(clippy::unwrap_used, reason = "test code")]

use std::sync::Mutex;

use async_trait::async_trait;
use cinevec_core::{Movie, SimilarMovie};
use cinevec_embeddings::EmbeddingError;
use cinevec_storage::StorageError;

use super::*;

/// Records every embedding request and answers with a fixed vector or a provider error.
struct StubEmbeddings {
    response: Result<Vec<f32>, (u16, String)>,
    calls: Mutex<Vec<(String, String)>>,
}

impl StubEmbeddings {
    fn returning(values: Vec<f32>) -> Self {
        Self { response: Ok(values), calls: Mutex::new(Vec::new()) }
    }

    fn failing(status: u16, message: &str) -> Self {
        Self { response: Err((status, message.to_owned())), calls: Mutex::new(Vec::new()) }
    }

    fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmbeddingProvider for StubEmbeddings {
    async fn embed(&self, text: &str, api_key: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.lock().unwrap().push((text.to_owned(), api_key.to_owned()));
        match &self.response {
            Ok(values) => Ok(values.clone()),
            Err((status, message)) => {
                Err(EmbeddingError::Fetch { status: *status, message: message.clone() })
            },
        }
    }
}

#[derive(Default)]
struct MemoryStore {
    rows: Mutex<Vec<Movie>>,
}

#[async_trait]
impl MovieStore for MemoryStore {
    async fn insert_movie(
        &self,
        title: &str,
        description: &str,
        embedding: &[f32],
    ) -> Result<i64, StorageError> {
        let mut rows = self.rows.lock().unwrap();
        let id = i64::try_from(rows.len()).unwrap() + 1;
        rows.push(Movie {
            id,
            title: title.to_owned(),
            description: description.to_owned(),
            embedding: embedding.to_vec(),
        });
        Ok(id)
    }

    async fn list_movies(&self) -> Result<Vec<MovieSummary>, StorageError> {
        Ok(self.rows.lock().unwrap().iter().map(Movie::summary).collect())
    }

    async fn get_movie(&self, id: i64) -> Result<Option<Movie>, StorageError> {
        Ok(self.rows.lock().unwrap().iter().find(|m| m.id == id).cloned())
    }

    async fn search_similar(
        &self,
        _embedding: &[f32],
        limit: usize,
    ) -> Result<Vec<SimilarMovie>, StorageError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .take(limit)
            .map(|m| SimilarMovie {
                id: m.id,
                title: m.title.clone(),
                description: m.description.clone(),
                similarity: 1.0,
            })
            .collect())
    }
}

fn service_with(
    embeddings: StubEmbeddings,
) -> (MovieService, Arc<MemoryStore>, Arc<StubEmbeddings>) {
    let store = Arc::new(MemoryStore::default());
    let embeddings = Arc::new(embeddings);
    let service = MovieService::new(store.clone(), embeddings.clone());
    (service, store, embeddings)
}

#[tokio::test]
async fn test_create_movie_sends_title_space_description() {
    let (service, _store, embeddings) =
        service_with(StubEmbeddings::returning(vec![0.0; EMBEDDING_DIMENSION]));

    service
        .create_movie(NewMovie::new("Inception", "A mind-bending heist"), "key-123")
        .await
        .unwrap();

    assert_eq!(
        embeddings.calls(),
        vec![("Inception A mind-bending heist".to_owned(), "key-123".to_owned())]
    );
}

#[tokio::test]
async fn test_create_movie_stores_exact_embedding() {
    let values: Vec<f32> = (0..EMBEDDING_DIMENSION).map(|i| i as f32 / 7.0).collect();
    let (service, store, _embeddings) = service_with(StubEmbeddings::returning(values.clone()));

    let id = service.create_movie(NewMovie::new("Heat", "Cops and robbers"), "k").await.unwrap();

    let movie = store.get_movie(id).await.unwrap().unwrap();
    assert_eq!(movie.embedding, values);
    assert_eq!(service.list_movies().await.unwrap(), vec![movie.summary()]);
}

#[tokio::test]
async fn test_create_movie_provider_error_propagates_message() {
    let (service, store, _embeddings) =
        service_with(StubEmbeddings::failing(403, "Permission denied"));

    let err = service.create_movie(NewMovie::new("Heat", "Cops and robbers"), "k").await.unwrap_err();

    assert!(matches!(err, ServiceError::Embedding(EmbeddingError::Fetch { status: 403, .. })));
    assert_eq!(err.client_message(), "Permission denied");
    assert!(store.list_movies().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_movie_rejects_wrong_dimension() {
    let (service, store, _embeddings) = service_with(StubEmbeddings::returning(vec![1.0; 384]));

    let err = service.create_movie(NewMovie::new("Heat", "Cops and robbers"), "k").await.unwrap_err();

    assert!(matches!(
        err,
        ServiceError::DimensionMismatch { expected: EMBEDDING_DIMENSION, actual: 384 }
    ));
    assert!(store.list_movies().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_movie_rejects_blank_fields_without_calling_provider() {
    let (service, _store, embeddings) =
        service_with(StubEmbeddings::returning(vec![0.0; EMBEDDING_DIMENSION]));

    let err = service.create_movie(NewMovie::new("  ", "Something"), "k").await.unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(err.client_message(), "title must not be empty");

    let err = service.create_movie(NewMovie::new("Title", ""), "k").await.unwrap_err();
    assert_eq!(err.client_message(), "description must not be empty");

    assert!(embeddings.calls().is_empty());
}

#[tokio::test]
async fn test_search_clamps_limit_and_embeds_query() {
    let (service, _store, embeddings) =
        service_with(StubEmbeddings::returning(vec![0.0; EMBEDDING_DIMENSION]));
    service.create_movie(NewMovie::new("A", "first"), "k").await.unwrap();
    service.create_movie(NewMovie::new("B", "second"), "k").await.unwrap();

    let hits = service.search_movies("heist", "k", 0).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(embeddings.calls().last().unwrap().0, "heist");

    let err = service.search_movies(" ", "k", 5).await.unwrap_err();
    assert!(err.is_invalid_input());
}
