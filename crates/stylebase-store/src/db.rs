//! Database connection management
//!
//! Provides utilities for opening and preparing SQLite connections for
//! the legacy node lookup

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use std::path::Path;

/// Embedded DDL for the generic node table
///
/// One relation: a node row carries an object-type discriminator and a
/// text alias. Stylesheet rows use the discriminator in
/// [`crate::lookup::STYLESHEET_OBJECT_TYPE`] and the slash-normalized
/// name without the `.css` suffix as their alias.
const NODES_SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS nodes (
    node_id     INTEGER PRIMARY KEY,
    object_type TEXT NOT NULL,
    text        TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_nodes_object_type_text
    ON nodes (object_type, text);
";

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Configure a connection with optimal settings
pub fn configure(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(from_rusqlite)?;

    // WAL mode for better concurrency with other writers
    conn.pragma_update(None, "journal_mode", "WAL")
        .map_err(from_rusqlite)?;

    Ok(())
}

/// Ensure the node table exists
///
/// Idempotent; safe to call on every startup.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(NODES_SCHEMA).map_err(from_rusqlite)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_schema_idempotent() {
        let conn = open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        ensure_schema(&conn).unwrap();

        conn.execute(
            "INSERT INTO nodes (node_id, object_type, text) VALUES (1, 'x', 'y')",
            [],
        )
        .unwrap();
    }

    #[test]
    fn test_configure_in_memory() {
        let conn = open_in_memory().unwrap();
        configure(&conn).unwrap();
    }
}
