//! Stylebase Store - persistence layer for stylesheet assets
//!
//! Provides:
//! - The [`fs::FileSystem`] contract with physical and in-memory
//!   implementations
//! - The legacy node-table lookup bridging paths to integer identifiers
//! - The [`repo::StylesheetRepository`] adapter composing the two
//! - SQLite connection helpers and the embedded lookup schema
//!
//! Everything here is synchronous blocking I/O; the repository holds no
//! state between calls.

pub mod db;
pub mod errors;
pub mod fs;
pub mod lookup;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use fs::{FileSystem, MemoryFileSystem, PhysicalFileSystem};
pub use repo::StylesheetRepository;
