use std::sync::Arc;

use cinevec_core::{
    EMBEDDING_DIMENSION, MAX_SEARCH_LIMIT, MovieSummary, NewMovie, SimilarMovie,
};
use cinevec_embeddings::EmbeddingProvider;
use cinevec_storage::MovieStore;

use crate::ServiceError;

/// Creates, lists and searches movies. Holds the single store and embedding
/// provider of the process; both are injected.
pub struct MovieService {
    store: Arc<dyn MovieStore>,
    embeddings: Arc<dyn EmbeddingProvider>,
}

impl MovieService {
    #[must_use]
    pub fn new(store: Arc<dyn MovieStore>, embeddings: Arc<dyn EmbeddingProvider>) -> Self {
        Self { store, embeddings }
    }

    /// Embed `"{title} {description}"` and store the movie. Returns the new id.
    pub async fn create_movie(&self, movie: NewMovie, api_key: &str) -> Result<i64, ServiceError> {
        require_non_empty("title", &movie.title)?;
        require_non_empty("description", &movie.description)?;

        let embedding = self.embed(&movie.embedding_text(), api_key).await?;
        let id = self.store.insert_movie(&movie.title, &movie.description, &embedding).await?;

        tracing::info!(id, title = %movie.title, "movie created");
        Ok(id)
    }

    pub async fn list_movies(&self) -> Result<Vec<MovieSummary>, ServiceError> {
        Ok(self.store.list_movies().await?)
    }

    /// Movies nearest to `query`, closest first. `limit` is clamped to `1..=MAX_SEARCH_LIMIT`.
    pub async fn search_movies(
        &self,
        query: &str,
        api_key: &str,
        limit: usize,
    ) -> Result<Vec<SimilarMovie>, ServiceError> {
        require_non_empty("query", query)?;
        let limit = limit.clamp(1, MAX_SEARCH_LIMIT);

        let embedding = self.embed(query, api_key).await?;
        Ok(self.store.search_similar(&embedding, limit).await?)
    }

    async fn embed(&self, text: &str, api_key: &str) -> Result<Vec<f32>, ServiceError> {
        let embedding = self.embeddings.embed(text, api_key).await?;
        if embedding.len() != EMBEDDING_DIMENSION {
            return Err(ServiceError::DimensionMismatch {
                expected: EMBEDDING_DIMENSION,
                actual: embedding.len(),
            });
        }
        Ok(embedding)
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
