//! Request bodies (Deserialize)

use serde::{Deserialize, Serialize};

/// Body of `POST /api/movies`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovieRequest {
    pub title: String,
    pub description: String,
    pub api_key: String,
}

/// Body of `POST /api/movies/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMoviesRequest {
    pub query: String,
    pub api_key: String,
    #[serde(default)]
    pub limit: Option<usize>,
}
