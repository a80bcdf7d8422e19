//! Test utilities and module declarations for storage tests.

use crate::Storage;
use cinevec_core::EMBEDDING_DIMENSION;
use tempfile::TempDir;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

/// Unit vector along axis `axis`.
pub fn axis_vector(axis: usize) -> Vec<f32> {
    let mut vec = vec![0.0_f32; EMBEDDING_DIMENSION];
    if let Some(elem) = vec.get_mut(axis) {
        *elem = 1.0;
    }
    vec
}
