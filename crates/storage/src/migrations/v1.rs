//! Migration v1: movies table

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS movies (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    embedding BLOB NOT NULL
);
";
