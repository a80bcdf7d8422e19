use anyhow::Result;
use cinevec_core::NewMovie;
use cinevec_embeddings::GeminiEmbeddingClient;
use cinevec_service::MovieService;
use cinevec_storage::Storage;
use std::sync::Arc;

use crate::{ensure_db_dir, get_api_key, get_db_path};

fn open_storage() -> Result<Storage> {
    let db_path = get_db_path();
    ensure_db_dir(&db_path)?;
    Ok(Storage::new(&db_path)?)
}

fn movie_service(storage: Storage) -> Result<MovieService> {
    let embeddings = GeminiEmbeddingClient::from_env()?;
    Ok(MovieService::new(Arc::new(storage), Arc::new(embeddings)))
}

pub(crate) fn run_init() -> Result<()> {
    let storage = open_storage()?;
    println!("Database ready: {} movies", storage.count_movies()?);
    Ok(())
}

pub(crate) fn run_list() -> Result<()> {
    let storage = open_storage()?;
    let movies = storage.list_movies()?;
    println!("{}", serde_json::to_string_pretty(&movies)?);
    Ok(())
}

pub(crate) async fn run_add(title: String, description: String) -> Result<()> {
    let api_key = get_api_key()?;
    let service = movie_service(open_storage()?)?;
    let id = service.create_movie(NewMovie::new(title, description), &api_key).await?;
    println!("{}", serde_json::json!({"success": true, "id": id}));
    Ok(())
}

pub(crate) async fn run_search(query: String, limit: usize) -> Result<()> {
    let api_key = get_api_key()?;
    let service = movie_service(open_storage()?)?;
    let hits = service.search_movies(&query, &api_key, limit).await?;
    println!("{}", serde_json::to_string_pretty(&hits)?);
    Ok(())
}
