use anyhow::Result;
use cinevec_embeddings::GeminiEmbeddingClient;
use cinevec_http::{AppState, create_router};
use cinevec_service::MovieService;
use cinevec_storage::Storage;
use std::path::Path;
use std::sync::Arc;

use crate::{ensure_db_dir, get_db_path};

/// Opens the pool and initializes the schema. A schema failure is logged and
/// the storage is still returned so the server starts.
pub(crate) fn open_serving_storage(db_path: &Path) -> Result<Storage> {
    ensure_db_dir(db_path)?;
    let storage = Storage::open(db_path)?;

    if let Err(e) = storage.initialize_schema() {
        tracing::error!("Error initializing database: {}", e);
    } else {
        tracing::info!("Database initialized successfully");
    }

    Ok(storage)
}

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let storage = open_serving_storage(&get_db_path())?;

    let embeddings = GeminiEmbeddingClient::from_env()?;
    tracing::info!(
        base_url = embeddings.base_url(),
        model = embeddings.model(),
        "Embedding client configured"
    );

    let movie_service = Arc::new(MovieService::new(Arc::new(storage), Arc::new(embeddings)));
    let state = Arc::new(AppState::new(movie_service));

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
