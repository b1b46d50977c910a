use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Derive the stable surrogate key for a stylesheet path.
///
/// Hashes the slash-normalized relative path with SHA-256 and folds the
/// first 16 bytes into a UUID. The same path always yields the same key,
/// across processes and loads.
pub fn path_key(path: &str) -> Uuid {
    let mut hasher = Sha256::new();
    hasher.update(path.as_bytes());
    let digest = hasher.finalize();

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    Uuid::from_bytes(bytes)
}

/// Stylesheet - one text asset read from the file store
///
/// The relative path is the natural key; `key` is a surrogate identifier
/// derived from it, and `legacy_id` is a best-effort cross-reference into
/// the generic node table (`0` when the stylesheet was never registered
/// there).
///
/// Mutation goes through methods so the change-tracking flag stays
/// coherent: every mutator marks the record dirty, and only
/// [`mark_clean`](Stylesheet::mark_clean) clears it. A record freshly
/// loaded from storage is marked clean exactly once by the repository, so
/// it is never mistaken for a locally edited one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stylesheet {
    /// Relative, slash-normalized path within the store
    path: String,

    /// Surrogate key derived from `path`
    key: Uuid,

    /// UTF-8 text body
    content: String,

    /// Creation timestamp from store metadata (UTC)
    created_at: DateTime<Utc>,

    /// Last-modification timestamp from store metadata (UTC)
    updated_at: DateTime<Utc>,

    /// Legacy integer identifier from the node table, 0 = unregistered
    legacy_id: i32,

    /// Change-tracking flag; not part of the persisted representation
    #[serde(skip)]
    dirty: bool,
}

impl Stylesheet {
    /// Create a new Stylesheet for the given relative path
    ///
    /// The surrogate key is derived from the path, both timestamps are
    /// stamped with the current time, the body is empty, and the legacy
    /// id is the unregistered sentinel. The new record starts out dirty;
    /// a loader that populates it from storage calls
    /// [`mark_clean`](Stylesheet::mark_clean) when done.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let key = path_key(&path);
        let now = Utc::now();
        Self {
            path,
            key,
            content: String::new(),
            created_at: now,
            updated_at: now,
            legacy_id: 0,
            dirty: true,
        }
    }

    /// Relative path within the store
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Surrogate key derived from the path
    pub fn key(&self) -> Uuid {
        self.key
    }

    /// UTF-8 text body
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Creation timestamp (UTC)
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last-modification timestamp (UTC)
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Legacy node-table identifier, 0 when unregistered
    pub fn legacy_id(&self) -> i32 {
        self.legacy_id
    }

    /// Check whether the stylesheet is registered in the node table
    pub fn has_legacy_id(&self) -> bool {
        self.legacy_id != 0
    }

    /// Replace the text body
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.dirty = true;
    }

    /// Rename the stylesheet; the surrogate key is re-derived
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
        self.key = path_key(&self.path);
        self.dirty = true;
    }

    /// Overwrite both store timestamps
    pub fn set_timestamps(&mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self.dirty = true;
    }

    /// Set the legacy node-table identifier
    pub fn set_legacy_id(&mut self, legacy_id: i32) {
        self.legacy_id = legacy_id;
        self.dirty = true;
    }

    /// Check whether the record has unsaved local modifications
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the change-tracking flag
    ///
    /// Called once by the repository right after populating a record from
    /// storage. Not part of the normal mutation path.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_key_deterministic() {
        assert_eq!(path_key("main.css"), path_key("main.css"));
        assert_eq!(path_key("nested/app.css"), path_key("nested/app.css"));
    }

    #[test]
    fn test_path_key_distinct_for_distinct_paths() {
        assert_ne!(path_key("main.css"), path_key("other.css"));
        assert_ne!(path_key("a/main.css"), path_key("b/main.css"));
    }

    #[test]
    fn test_new_stylesheet() {
        let sheet = Stylesheet::new("main.css");

        assert_eq!(sheet.path(), "main.css");
        assert_eq!(sheet.key(), path_key("main.css"));
        assert_eq!(sheet.content(), "");
        assert_eq!(sheet.legacy_id(), 0);
        assert!(!sheet.has_legacy_id());
        assert!(sheet.is_dirty());
    }

    #[test]
    fn test_mark_clean_clears_dirty() {
        let mut sheet = Stylesheet::new("main.css");
        sheet.mark_clean();
        assert!(!sheet.is_dirty());
    }

    #[test]
    fn test_mutators_mark_dirty() {
        let mut sheet = Stylesheet::new("main.css");
        sheet.mark_clean();

        sheet.set_content("body {}");
        assert!(sheet.is_dirty());

        sheet.mark_clean();
        sheet.set_legacy_id(42);
        assert!(sheet.is_dirty());
        assert!(sheet.has_legacy_id());

        sheet.mark_clean();
        sheet.set_timestamps(Utc::now(), Utc::now());
        assert!(sheet.is_dirty());
    }

    #[test]
    fn test_set_path_rederives_key() {
        let mut sheet = Stylesheet::new("main.css");
        sheet.mark_clean();

        sheet.set_path("renamed.css");

        assert_eq!(sheet.key(), path_key("renamed.css"));
        assert!(sheet.is_dirty());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut sheet = Stylesheet::new("themes/dark.css");
        sheet.set_content("body { background: #000; }");
        sheet.set_legacy_id(7);
        sheet.mark_clean();

        let json = serde_json::to_string(&sheet).unwrap();
        let loaded: Stylesheet = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.path(), sheet.path());
        assert_eq!(loaded.key(), sheet.key());
        assert_eq!(loaded.content(), sheet.content());
        assert_eq!(loaded.legacy_id(), 7);
        // The dirty flag is not persisted; a deserialized record is clean
        assert!(!loaded.is_dirty());
    }
}
