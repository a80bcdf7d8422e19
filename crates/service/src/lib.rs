//! Service layer for cinevec
//!
//! Centralizes business logic between HTTP/CLI front ends and storage/embeddings.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod error;
mod movie_service;

pub use error::ServiceError;
pub use movie_service::MovieService;
