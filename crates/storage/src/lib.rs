//! Storage layer for cinevec
//!
//! `SQLite` movie table with a sqlite-vec `vec0` index for similarity search.

pub mod error;
mod migrations;
mod storage;
#[cfg(test)]
mod tests;
pub mod traits;
mod vec_init;

pub use error::StorageError;
pub use migrations::SCHEMA_VERSION;
pub use storage::Storage;
pub use traits::MovieStore;
