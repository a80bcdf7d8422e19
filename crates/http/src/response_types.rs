//! Response types (Serialize)

use cinevec_core::{MovieSummary, SimilarMovie};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateMovieResponse {
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListMoviesResponse {
    pub movies: Vec<MovieSummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchMoviesResponse {
    pub movies: Vec<SimilarMovie>,
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}
