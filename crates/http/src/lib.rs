//! HTTP API server for cinevec.

#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use axum::{
    Json, Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use cinevec_service::MovieService;

pub use query_types::{CreateMovieRequest, SearchMoviesRequest};
pub use response_types::{
    CreateMovieResponse, ListMoviesResponse, SearchMoviesResponse, VersionResponse,
};

/// Shared application state for all HTTP handlers.
///
/// Built once at startup; the service owns the process-wide store and embedding client.
pub struct AppState {
    pub movie_service: Arc<MovieService>,
}

impl AppState {
    #[must_use]
    pub fn new(movie_service: Arc<MovieService>) -> Self {
        Self { movie_service }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route(
            "/api/movies",
            get(handlers::movies::list_movies).post(handlers::movies::create_movie),
        )
        .route("/api/movies/search", post(handlers::movies::search_movies))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
