//! Migration v2: vec0 similarity index over movie embeddings
//!
//! Rows share their rowid with `movies.id`. Dimension must match `EMBEDDING_DIMENSION`.

pub(super) const SQL: &str = "
CREATE VIRTUAL TABLE IF NOT EXISTS movies_vec USING vec0(
    embedding float[768] distance_metric=cosine
);
";
