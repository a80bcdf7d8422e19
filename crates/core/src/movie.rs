//! Movie domain types.

use serde::{Deserialize, Serialize};

/// Input for creating a movie. The embedding is computed from these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub description: String,
}

impl NewMovie {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into() }
    }

    /// Text sent to the embedding provider for this movie.
    #[must_use]
    pub fn embedding_text(&self) -> String {
        embedding_text(&self.title, &self.description)
    }
}

/// Joins title and description with a single space.
#[must_use]
pub fn embedding_text(title: &str, description: &str) -> String {
    format!("{title} {description}")
}

/// A stored movie as returned to API callers. Never carries the embedding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: i64,
    pub title: String,
    pub description: String,
}

/// A full stored row, including the decoded embedding.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub embedding: Vec<f32>,
}

impl Movie {
    #[must_use]
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }
}

/// Similarity search hit, ordered by `similarity` (cosine, higher is closer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarMovie {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub similarity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_text_single_space() {
        let movie = NewMovie::new("Inception", "A mind-bending heist");
        assert_eq!(movie.embedding_text(), "Inception A mind-bending heist");
    }

    #[test]
    fn test_embedding_text_keeps_inner_whitespace() {
        assert_eq!(embedding_text("A  B", " c"), "A  B  c");
    }

    #[test]
    fn test_summary_serializes_without_embedding() {
        let movie = Movie {
            id: 7,
            title: "Heat".to_owned(),
            description: "Cops and robbers".to_owned(),
            embedding: vec![0.5; 4],
        };
        let json = serde_json::to_value(movie.summary()).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "title": "Heat", "description": "Cops and robbers"}));
        assert!(json.get("embedding").is_none());
    }
}
