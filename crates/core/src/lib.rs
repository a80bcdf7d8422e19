//! Core types for cinevec
//!
//! Domain types, constants and codecs shared by every other crate.

mod blob;
mod constants;
mod env_config;
mod movie;

pub use blob::{BlobError, decode_f32_blob, encode_f32_blob};
pub use constants::*;
pub use env_config::env_parse_with_default;
pub use movie::{Movie, MovieSummary, NewMovie, SimilarMovie, embedding_text};
