//! Legacy node-table lookup
//!
//! Stylesheets are historically tracked by name in the generic node
//! table rather than by file path; editor tooling addresses them through
//! the integer node id. This module bridges the two identifier spaces:
//! a stylesheet path is reduced to the alias it was registered under and
//! the matching node id is resolved, with `0` standing in for
//! "never registered".

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension};

/// Object-type discriminator for stylesheet rows in the node table
pub const STYLESHEET_OBJECT_TYPE: &str = "9f68da4f-a3a8-44c6-8b1a-3c4575b649eb";

/// Derive the node-table alias for a stylesheet path
///
/// Normalizes backslashes to forward slashes and strips the literal
/// `.css` suffix. This is an exact-suffix strip: a name such as
/// `styless` is left alone, and only a trailing `.css` as a whole is
/// removed.
pub fn lookup_alias(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    normalized
        .strip_suffix(".css")
        .unwrap_or(&normalized)
        .to_string()
}

/// Resolve the legacy integer identifier for a stylesheet path
///
/// Runs a parameterized single-row query against the node table for the
/// stylesheet object type and the derived alias. Returns the first
/// matching row's node id, or `0` when the stylesheet was never
/// registered. A miss is not an error; only a failing query is.
pub fn legacy_id_for(conn: &Connection, path: &str) -> Result<i32> {
    let alias = lookup_alias(path);

    let mut stmt = conn
        .prepare(
            "SELECT node_id FROM nodes
             WHERE object_type = ?1 AND text = ?2
             ORDER BY node_id LIMIT 1",
        )
        .map_err(from_rusqlite)?;

    let node_id = stmt
        .query_row(rusqlite::params![STYLESHEET_OBJECT_TYPE, alias], |row| {
            row.get::<_, i32>(0)
        })
        .optional()
        .map_err(from_rusqlite)?;

    Ok(node_id.unwrap_or(0))
}
