use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use std::sync::Arc;

use cinevec_core::{DEFAULT_SEARCH_LIMIT, NewMovie};

use crate::AppState;
use crate::api_error::{ActionError, ApiError};
use crate::query_types::{CreateMovieRequest, SearchMoviesRequest};
use crate::response_types::{CreateMovieResponse, ListMoviesResponse, SearchMoviesResponse};

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateMovieRequest>, JsonRejection>,
) -> Result<Json<CreateMovieResponse>, ActionError> {
    let Json(req) = payload?;
    let movie = NewMovie::new(req.title, req.description);
    state.movie_service.create_movie(movie, &req.api_key).await?;
    Ok(Json(CreateMovieResponse { success: true }))
}

pub async fn list_movies(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListMoviesResponse>, ApiError> {
    let movies = state.movie_service.list_movies().await?;
    Ok(Json(ListMoviesResponse { movies }))
}

pub async fn search_movies(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SearchMoviesRequest>, JsonRejection>,
) -> Result<Json<SearchMoviesResponse>, ApiError> {
    let Json(req) = payload?;
    let limit = req.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    let movies = state.movie_service.search_movies(&req.query, &req.api_key, limit).await?;
    Ok(Json(SearchMoviesResponse { movies }))
}
