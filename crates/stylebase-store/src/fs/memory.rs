use super::{normalize, FileSystem};
use crate::errors::{file_not_found, Result};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::io::{Cursor, Read};

/// In-memory file store
///
/// Entries live in a `BTreeMap`, so enumeration order is the sorted path
/// order and fully deterministic. Each entry carries explicit creation
/// and modification timestamps, which makes this the store of choice for
/// tests that pin timestamp behavior.
///
/// # Example
///
/// ```
/// use stylebase_store::{FileSystem, MemoryFileSystem};
///
/// let store = MemoryFileSystem::with_files([("main.css", "body {}")]);
/// assert!(store.exists("main.css"));
/// ```
#[derive(Default)]
pub struct MemoryFileSystem {
    files: BTreeMap<String, MemoryFile>,
}

struct MemoryFile {
    bytes: Vec<u8>,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
}

impl MemoryFileSystem {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with files, stamped with the current time
    pub fn with_files(
        files: impl IntoIterator<Item = (impl Into<String>, impl Into<Vec<u8>>)>,
    ) -> Self {
        let mut store = Self::new();
        for (path, bytes) in files {
            store.insert(path, bytes);
        }
        store
    }

    /// Add or replace a file, stamped with the current time
    pub fn insert(&mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        let now = Utc::now();
        self.insert_with_times(path, bytes, now, now);
    }

    /// Add or replace a file with explicit timestamps
    pub fn insert_with_times(
        &mut self,
        path: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
        created: DateTime<Utc>,
        modified: DateTime<Utc>,
    ) {
        self.files.insert(
            normalize(&path.into()),
            MemoryFile {
                bytes: bytes.into(),
                created,
                modified,
            },
        );
    }

    fn entry(&self, path: &str) -> Result<&MemoryFile> {
        let normalized = normalize(path);
        self.files
            .get(&normalized)
            .ok_or_else(|| file_not_found(&normalized))
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, id: &str) -> bool {
        self.files.contains_key(&normalize(id))
    }

    fn open(&self, id: &str) -> Result<Box<dyn Read>> {
        let entry = self.entry(id)?;
        Ok(Box::new(Cursor::new(entry.bytes.clone())))
    }

    fn relative_path(&self, id: &str) -> String {
        normalize(id)
    }

    fn created(&self, path: &str) -> Result<DateTime<Utc>> {
        Ok(self.entry(path)?.created)
    }

    fn last_modified(&self, path: &str) -> Result<DateTime<Utc>> {
        Ok(self.entry(path)?.modified)
    }

    fn list_all(&self, prefix: &str) -> Result<Vec<String>> {
        let prefix = normalize(prefix);
        let matches = |path: &str| {
            prefix.is_empty() || path == prefix || path.starts_with(&format!("{}/", prefix))
        };
        Ok(self
            .files
            .keys()
            .filter(|path| matches(path))
            .cloned()
            .collect())
    }
}
