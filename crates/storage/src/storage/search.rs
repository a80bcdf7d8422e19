//! Nearest-neighbour search over the vec0 index

use cinevec_core::{SimilarMovie, encode_f32_blob};
use rusqlite::params;

use super::{Storage, get_conn, log_row_error};
use crate::error::StorageError;

impl Storage {
    pub fn search_similar(
        &self,
        query_vec: &[f32],
        limit: usize,
    ) -> Result<Vec<SimilarMovie>, StorageError> {
        if query_vec.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let conn = get_conn(&self.pool)?;
        let query_blob = encode_f32_blob(query_vec);

        let mut stmt = conn.prepare(
            r#"WITH knn AS (
                   SELECT rowid, distance
                   FROM movies_vec
                   WHERE embedding MATCH ?1 AND k = ?2
               )
               SELECT m.id, m.title, m.description,
                      COALESCE(1.0 - knn.distance, 0.0) AS similarity
               FROM knn
               JOIN movies m ON m.id = knn.rowid
               ORDER BY similarity DESC, m.id"#,
        )?;

        let results = stmt
            .query_map(params![query_blob, limit as i64], |row| {
                Ok(SimilarMovie {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    description: row.get(2)?,
                    similarity: row.get(3)?,
                })
            })?
            .filter_map(log_row_error)
            .collect();

        Ok(results)
    }
}
