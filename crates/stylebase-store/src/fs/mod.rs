//! File store abstraction
//!
//! Defines the [`FileSystem`] contract the stylesheet repository reads
//! through, plus two implementations: [`PhysicalFileSystem`] rooted at a
//! directory, and [`MemoryFileSystem`] for tests and embedding.

mod memory;
mod physical;

pub use memory::MemoryFileSystem;
pub use physical::PhysicalFileSystem;

use crate::errors::Result;
use chrono::{DateTime, Utc};
use std::io::Read;

/// Byte-oriented hierarchical store, read side only
///
/// All operations are synchronous and blocking. Identifiers are relative
/// paths; implementations accept both `/` and `\` separators and resolve
/// them to the canonical slash-normalized form via
/// [`relative_path`](FileSystem::relative_path).
pub trait FileSystem {
    /// Check whether an entry exists for the given identifier
    fn exists(&self, id: &str) -> bool;

    /// Open an entry for reading
    ///
    /// The returned handle is scoped to the caller; dropping it releases
    /// the underlying resource on every exit path.
    fn open(&self, id: &str) -> Result<Box<dyn Read>>;

    /// Resolve the canonical relative path form of an identifier
    fn relative_path(&self, id: &str) -> String;

    /// Creation timestamp of an entry, normalized to UTC
    fn created(&self, path: &str) -> Result<DateTime<Utc>>;

    /// Last-modification timestamp of an entry, normalized to UTC
    fn last_modified(&self, path: &str) -> Result<DateTime<Utc>>;

    /// Enumerate every entry under the given prefix, recursively
    ///
    /// Returns canonical relative paths in the store's enumeration order.
    /// An empty prefix enumerates the whole store.
    fn list_all(&self, prefix: &str) -> Result<Vec<String>>;
}

/// Normalize an identifier to the canonical relative form
///
/// Backslashes become forward slashes and leading separators are
/// stripped; the result is relative to the store root.
pub(crate) fn normalize(id: &str) -> String {
    id.replace('\\', "/").trim_start_matches('/').to_string()
}
