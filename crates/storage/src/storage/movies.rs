use cinevec_core::{Movie, MovieSummary, decode_f32_blob, encode_f32_blob};
use rusqlite::types::Type;
use rusqlite::{OptionalExtension as _, params};

use super::{Storage, get_conn, log_row_error};
use crate::error::StorageError;

impl Storage {
    /// Insert the row and its index entry in one transaction; returns the new id.
    pub fn insert_movie(
        &self,
        title: &str,
        description: &str,
        embedding: &[f32],
    ) -> Result<i64, StorageError> {
        let blob = encode_f32_blob(embedding);

        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO movies (title, description, embedding) VALUES (?1, ?2, ?3)",
            params![title, description, blob],
        )?;
        let id = tx.last_insert_rowid();
        tx.execute(
            "INSERT INTO movies_vec(rowid, embedding) VALUES (?1, ?2)",
            params![id, blob],
        )?;
        tx.commit()?;

        tracing::debug!(id, title, "movie inserted");
        Ok(id)
    }

    pub fn list_movies(&self) -> Result<Vec<MovieSummary>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare("SELECT id, title, description FROM movies ORDER BY id")?;
        let results = stmt
            .query_map([], |row| {
                Ok(MovieSummary {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    description: row.get(2)?,
                })
            })?
            .filter_map(log_row_error)
            .collect();
        Ok(results)
    }

    pub fn get_movie(&self, id: i64) -> Result<Option<Movie>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let movie = conn
            .query_row(
                "SELECT id, title, description, embedding FROM movies WHERE id = ?1",
                params![id],
                Self::row_to_movie,
            )
            .optional()?;
        Ok(movie)
    }

    pub fn count_movies(&self) -> Result<usize, StorageError> {
        let conn = get_conn(&self.pool)?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    pub(crate) fn row_to_movie(row: &rusqlite::Row<'_>) -> rusqlite::Result<Movie> {
        let blob: Vec<u8> = row.get(3)?;
        let embedding = decode_f32_blob(&blob)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Blob, Box::new(e)))?;
        Ok(Movie { id: row.get(0)?, title: row.get(1)?, description: row.get(2)?, embedding })
    }
}
