//! Typed error enum for the storage layer.

use cinevec_core::BlobError;
use thiserror::Error;

/// Storage-layer error covering pool, SQL, decoding and task failures.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// SQL statement or schema failure.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Stored embedding blob could not be decoded.
    #[error("embedding blob corrupted: {0}")]
    Blob(#[from] BlobError),

    /// Blocking task panicked or was cancelled.
    #[error("storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

