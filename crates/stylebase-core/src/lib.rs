//! Stylebase Core - domain model for filesystem-backed stylesheet assets
//!
//! This crate provides the foundational pieces shared by the persistence
//! layer:
//! - The [`Stylesheet`] domain record with derived surrogate keys, UTC
//!   timestamps, and explicit change tracking
//! - The canonical error taxonomy with stable error codes
//! - The logging facility built on `tracing`
//!
//! No I/O happens here; reading assets from a store lives in
//! `stylebase-store`.

pub mod errors;
pub mod logging;
pub mod model;

// Re-export commonly used types
pub use errors::{Result, SbError, SbErrorKind};
pub use model::{path_key, Stylesheet};
