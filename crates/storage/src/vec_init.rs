//! SQLite-vec extension initialization

use rusqlite::ffi::sqlite3_auto_extension;
use sqlite_vec::sqlite3_vec_init;
use std::sync::Once;

static INIT: Once = Once::new();

/// Registers sqlite-vec as an auto extension for every connection opened afterwards.
/// Safe to call multiple times - only initializes once.
#[allow(clippy::missing_transmute_annotations)]
pub(crate) fn init_sqlite_vec() {
    INIT.call_once(|| {
        // SAFETY: `sqlite3_vec_init` is the extension entry point statically linked
        // by the sqlite-vec crate; SQLite calls it with the standard init signature.
        unsafe {
            sqlite3_auto_extension(Some(std::mem::transmute(sqlite3_vec_init as *const ())));
        }
        tracing::info!("sqlite-vec extension registered");
    });
}
