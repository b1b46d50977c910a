use super::{normalize, FileSystem};
use crate::errors::{io_error, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Directory-rooted file store
///
/// Identifiers resolve against the root directory; enumeration walks the
/// tree recursively and yields slash-normalized relative paths in sorted
/// order, which is this store's enumeration order.
pub struct PhysicalFileSystem {
    root: PathBuf,
}

impl PhysicalFileSystem {
    /// Create a file store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn full_path(&self, id: &str) -> PathBuf {
        self.root.join(normalize(id))
    }

    fn metadata(&self, path: &str) -> Result<fs::Metadata> {
        fs::metadata(self.full_path(path)).map_err(|e| io_error("metadata", e))
    }

    fn walk(&self, dir: &Path, out: &mut Vec<String>) -> Result<()> {
        let entries = fs::read_dir(dir).map_err(|e| io_error("list", e))?;
        for entry in entries {
            let entry = entry.map_err(|e| io_error("list", e))?;
            let path = entry.path();
            if path.is_dir() {
                self.walk(&path, out)?;
            } else if let Ok(rel) = path.strip_prefix(&self.root) {
                out.push(normalize(&rel.to_string_lossy()));
            }
        }
        Ok(())
    }
}

impl FileSystem for PhysicalFileSystem {
    fn exists(&self, id: &str) -> bool {
        self.full_path(id).is_file()
    }

    fn open(&self, id: &str) -> Result<Box<dyn Read>> {
        let file = fs::File::open(self.full_path(id)).map_err(|e| io_error("open", e))?;
        Ok(Box::new(file))
    }

    fn relative_path(&self, id: &str) -> String {
        normalize(id)
    }

    fn created(&self, path: &str) -> Result<DateTime<Utc>> {
        let meta = self.metadata(path)?;
        // Not every filesystem records a birth time; fall back to the
        // modification time rather than failing the whole load.
        let stamp = meta
            .created()
            .or_else(|_| meta.modified())
            .map_err(|e| io_error("created", e))?;
        Ok(stamp.into())
    }

    fn last_modified(&self, path: &str) -> Result<DateTime<Utc>> {
        let meta = self.metadata(path)?;
        let stamp = meta.modified().map_err(|e| io_error("last_modified", e))?;
        Ok(stamp.into())
    }

    fn list_all(&self, prefix: &str) -> Result<Vec<String>> {
        let start = self.full_path(prefix);
        if !start.is_dir() {
            return Ok(Vec::new());
        }
        let mut out = Vec::new();
        self.walk(&start, &mut out)?;
        out.sort();
        Ok(out)
    }
}
