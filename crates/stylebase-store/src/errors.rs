//! Error handling for stylebase-store
//!
//! Wraps the stylebase-core error taxonomy with store-specific helpers

use stylebase_core::errors::SbError;

/// Result type alias using SbError
pub type Result<T> = std::result::Result<T, SbError>;

/// Create a NotFound error for a missing stylesheet path
pub fn file_not_found(path: &str) -> SbError {
    SbError::NotFound {
        path: path.to_string(),
    }
}

/// Create an IO error from std::io::Error
pub fn io_error(op: &str, err: std::io::Error) -> SbError {
    SbError::Io {
        op: op.to_string(),
        message: err.to_string(),
    }
}

/// Create a decode error for non-UTF-8 stylesheet bytes
pub fn decode_error(path: &str, err: std::string::FromUtf8Error) -> SbError {
    SbError::Decode {
        path: path.to_string(),
        message: err.to_string(),
    }
}

/// Create a persistence error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> SbError {
    SbError::Persistence {
        op: "sqlite".to_string(),
        message: err.to_string(),
    }
}
