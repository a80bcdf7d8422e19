use async_trait::async_trait;
use cinevec_core::{Movie, MovieSummary, SimilarMovie};

use super::Storage;
use crate::error::StorageError;
use crate::traits::MovieStore;

#[async_trait]
impl MovieStore for Storage {
    async fn insert_movie(
        &self,
        title: &str,
        description: &str,
        embedding: &[f32],
    ) -> Result<i64, StorageError> {
        let storage = self.clone();
        let title = title.to_owned();
        let description = description.to_owned();
        let embedding = embedding.to_vec();
        tokio::task::spawn_blocking(move || storage.insert_movie(&title, &description, &embedding))
            .await?
    }

    async fn list_movies(&self) -> Result<Vec<MovieSummary>, StorageError> {
        let storage = self.clone();
        tokio::task::spawn_blocking(move || storage.list_movies()).await?
    }

    async fn get_movie(&self, id: i64) -> Result<Option<Movie>, StorageError> {
        let storage = self.clone();
        tokio::task::spawn_blocking(move || storage.get_movie(id)).await?
    }

    async fn search_similar(
        &self,
        embedding: &[f32],
        limit: usize,
    ) -> Result<Vec<SimilarMovie>, StorageError> {
        let storage = self.clone();
        let embedding = embedding.to_vec();
        tokio::task::spawn_blocking(move || storage.search_similar(&embedding, limit)).await?
    }
}
