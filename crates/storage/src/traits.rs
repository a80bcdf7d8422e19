//! Async storage trait, the seam the service layer is built against.

use async_trait::async_trait;
use cinevec_core::{Movie, MovieSummary, SimilarMovie};

use crate::error::StorageError;

/// Movie persistence operations.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Insert a movie with its embedding and return the assigned id.
    async fn insert_movie(
        &self,
        title: &str,
        description: &str,
        embedding: &[f32],
    ) -> Result<i64, StorageError>;

    /// All movies projected to `(id, title, description)`.
    async fn list_movies(&self) -> Result<Vec<MovieSummary>, StorageError>;

    /// Full row including the decoded embedding.
    async fn get_movie(&self, id: i64) -> Result<Option<Movie>, StorageError>;

    /// Nearest movies by cosine similarity, closest first.
    async fn search_similar(
        &self,
        embedding: &[f32],
        limit: usize,
    ) -> Result<Vec<SimilarMovie>, StorageError>;
}
