//! F32 blob codec.
//!
//! Embeddings are persisted as raw little-endian `f32` arrays, four bytes per
//! element, the same layout sqlite-vec reads for `float[N]` columns.

use thiserror::Error;
use zerocopy::byteorder::little_endian::F32;
use zerocopy::{FromBytes, IntoBytes};

/// Blob could not be decoded into `f32` values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlobError {
    #[error("blob length {len} is not a multiple of 4")]
    InvalidLength { len: usize },
}

/// Encodes a vector as a little-endian `f32` blob.
#[must_use]
pub fn encode_f32_blob(values: &[f32]) -> Vec<u8> {
    let le: Vec<F32> = values.iter().copied().map(F32::new).collect();
    le.as_bytes().to_vec()
}

/// Decodes a little-endian `f32` blob back into a vector.
///
/// # Errors
/// Returns [`BlobError::InvalidLength`] if the byte count is not a multiple of 4.
pub fn decode_f32_blob(bytes: &[u8]) -> Result<Vec<f32>, BlobError> {
    let le = <[F32]>::ref_from_bytes(bytes)
        .map_err(|_| BlobError::InvalidLength { len: bytes.len() })?;
    Ok(le.iter().map(|v| v.get()).collect())
}
