#![allow(
    clippy::redundant_pub_crate,
    reason = "migrations module is private, pub(crate) is intentional"
)]

mod v1;
mod v2;

use rusqlite::Connection;

pub const SCHEMA_VERSION: i32 = 2;

/// Brings the schema up to [`SCHEMA_VERSION`]. Every statement is `IF NOT EXISTS`,
/// so running against an up-to-date database is a no-op.
pub fn run_migrations(conn: &Connection) -> Result<(), rusqlite::Error> {
    let current_version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    tracing::info!("Database schema version: {} (target: {})", current_version, SCHEMA_VERSION);

    // IF NOT EXISTS batches always run; user_version only records the target.
    tracing::debug!("Ensuring schema v1: movies table");
    conn.execute_batch(v1::SQL)?;

    tracing::debug!("Ensuring schema v2: vector similarity index");
    conn.execute_batch(v2::SQL)?;

    if current_version < SCHEMA_VERSION {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    }
    tracing::info!("Database schema up to date (version {})", SCHEMA_VERSION);

    Ok(())
}
