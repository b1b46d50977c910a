use crate::errors::{decode_error, file_not_found, io_error, Result};
use crate::fs::FileSystem;
use crate::lookup;
use rusqlite::Connection;
use std::io::Read;
use stylebase_core::model::Stylesheet;
use tracing::debug;

/// Stylesheet repository
///
/// Composes the file store and the legacy node lookup into fully
/// populated [`Stylesheet`] records. The repository is stateless between
/// calls: every read goes straight to the two collaborators it holds for
/// its lifetime, and nothing is cached or mutated on their side.
pub struct StylesheetRepository<'db, FS: FileSystem> {
    fs: FS,
    db: &'db Connection,
}

impl<'db, FS: FileSystem> StylesheetRepository<'db, FS> {
    /// Create a repository over a file store and a lookup connection
    pub fn new(fs: FS, db: &'db Connection) -> Self {
        Self { fs, db }
    }

    /// Load one stylesheet by identifier
    ///
    /// Fails with `NotFound` when the file store has no such entry; in
    /// that case the lookup store is never queried. Reads the full byte
    /// content, decodes it strictly as UTF-8, takes both timestamps from
    /// store metadata, and resolves the legacy node id. The returned
    /// record is marked clean, so downstream change tracking never
    /// mistakes a freshly loaded stylesheet for an edited one.
    pub fn get(&self, id: &str) -> Result<Stylesheet> {
        if !self.fs.exists(id) {
            return Err(file_not_found(id));
        }

        let mut bytes = Vec::new();
        {
            let mut reader = self.fs.open(id)?;
            reader
                .read_to_end(&mut bytes)
                .map_err(|e| io_error("read", e))?;
        }

        let path = self.fs.relative_path(id);
        let content = String::from_utf8(bytes).map_err(|e| decode_error(&path, e))?;
        let created = self.fs.created(&path)?;
        let updated = self.fs.last_modified(&path)?;
        let legacy_id = lookup::legacy_id_for(self.db, &path)?;

        let mut stylesheet = Stylesheet::new(path);
        stylesheet.set_content(content);
        stylesheet.set_timestamps(created, updated);
        stylesheet.set_legacy_id(legacy_id);
        // Populating from storage is not a local edit.
        stylesheet.mark_clean();

        debug!(path = %stylesheet.path(), legacy_id, "loaded stylesheet");

        Ok(stylesheet)
    }

    /// Check whether an identifier names an entry in the file store
    pub fn exists(&self, id: &str) -> bool {
        self.fs.exists(id)
    }

    /// Load stylesheets lazily
    ///
    /// With one or more identifiers: yields one result per identifier, in
    /// the given order. With none: enumerates every entry under the store
    /// root and yields one result per entry, in the store's enumeration
    /// order.
    ///
    /// The sequence is forward-only and produced on demand; it fuses
    /// after the first error, so a missing identifier ends the iteration
    /// without touching later ones. Consuming the store twice means
    /// calling this method twice — the iterator itself is one-pass.
    pub fn get_all<'a>(
        &'a self,
        ids: &[&str],
    ) -> Result<impl Iterator<Item = Result<Stylesheet>> + 'a> {
        let pending: Vec<String> = if ids.is_empty() {
            self.fs.list_all("")?
        } else {
            ids.iter().map(|id| id.to_string()).collect()
        };

        let mut queue = pending.into_iter();
        let mut failed = false;
        Ok(std::iter::from_fn(move || {
            if failed {
                return None;
            }
            let id = queue.next()?;
            let item = self.get(&id);
            failed = item.is_err();
            Some(item)
        }))
    }
}
