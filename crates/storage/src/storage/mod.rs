//! `SQLite` storage implementation
//!
//! All methods are synchronous; [`MovieStore`](crate::MovieStore) wraps them
//! in `spawn_blocking` for async callers.

// SQLite uses i64 for counts/limits, Rust uses usize - safe conversions within DB context
#![allow(
    clippy::as_conversions,
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    reason = "SQLite i64 <-> Rust usize conversions are safe within DB row counts"
)]

mod backend;
mod movies;
mod search;

use cinevec_core::env_parse_with_default;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;

use crate::error::StorageError;
use crate::migrations;
use crate::vec_init::init_sqlite_vec;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Main storage struct wrapping `SQLite` connection pool
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    Ok(pool.get()?)
}

/// Log row read errors and filter them out
pub(crate) fn log_row_error<T>(result: rusqlite::Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!("Row read error: {}", e);
            None
        },
    }
}

/// Custom connection initializer for sqlite-vec and concurrency settings
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    init_sqlite_vec();
    conn.execute_batch(
        "PRAGMA busy_timeout = 30000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )?;
    Ok(())
}

fn db_pool_size() -> u32 {
    env_parse_with_default("CINEVEC_DB_POOL_SIZE", 8)
}

impl Storage {
    /// Open a connection pool on `db_path` without touching the schema.
    pub fn open(db_path: &Path) -> Result<Self, StorageError> {
        init_sqlite_vec();

        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);

        let pool_size = db_pool_size();
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        tracing::info!(pool_size = pool_size, path = %db_path.display(), "Storage pool opened");

        Ok(Self { pool })
    }

    /// Ensure the movies table and its similarity index exist. Idempotent.
    pub fn initialize_schema(&self) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        migrations::run_migrations(&conn)?;
        Ok(())
    }

    /// Open the pool and initialize the schema, failing on either.
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        let storage = Self::open(db_path)?;
        storage.initialize_schema()?;
        Ok(storage)
    }
}
