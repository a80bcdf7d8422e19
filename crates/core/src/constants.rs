//! Shared constants for cinevec.

/// Embedding vector dimension (text-embedding-004: 768d).
pub const EMBEDDING_DIMENSION: usize = 768;

/// Size in bytes of one stored embedding blob.
pub const EMBEDDING_BLOB_LEN: usize = EMBEDDING_DIMENSION * size_of::<f32>();

/// Default number of similarity search hits when the caller gives no limit.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Maximum number of similarity search hits for any query (DoS protection).
pub const MAX_SEARCH_LIMIT: usize = 100;
