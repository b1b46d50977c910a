use thiserror::Error;

/// Result type alias using SbError
pub type Result<T> = std::result::Result<T, SbError>;

/// Canonical error kind taxonomy
///
/// Provides a stable classification of every error the stylesheet stack
/// can produce. Each kind maps to a stable error code usable for
/// programmatic handling and test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SbErrorKind {
    /// Requested path is absent from the file store
    NotFound,
    /// Failure while reading from the file store
    Io,
    /// Stylesheet bytes were not valid UTF-8
    Decode,
    /// Failure in the relational lookup store
    Persistence,
}

impl SbErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            SbErrorKind::NotFound => "ERR_NOT_FOUND",
            SbErrorKind::Io => "ERR_IO",
            SbErrorKind::Decode => "ERR_DECODE",
            SbErrorKind::Persistence => "ERR_PERSISTENCE",
        }
    }
}

/// Comprehensive error taxonomy for stylesheet operations
///
/// Variants carry the context a caller needs to act on the failure: the
/// missing path for `NotFound`, the failing operation for `Io` and
/// `Persistence`, the offending path for `Decode`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SbError {
    /// Stylesheet path not present in the file store
    #[error("Stylesheet not found: {path}")]
    NotFound { path: String },

    /// File store read failure
    #[error("IO failure in operation '{op}': {message}")]
    Io { op: String, message: String },

    /// Content bytes were not valid UTF-8
    #[error("Invalid UTF-8 in stylesheet '{path}': {message}")]
    Decode { path: String, message: String },

    /// Lookup store failure
    #[error("Persistence failure in operation '{op}': {message}")]
    Persistence { op: String, message: String },
}

impl SbError {
    /// Get the error kind
    pub fn kind(&self) -> SbErrorKind {
        match self {
            SbError::NotFound { .. } => SbErrorKind::NotFound,
            SbError::Io { .. } => SbErrorKind::Io,
            SbError::Decode { .. } => SbErrorKind::Decode,
            SbError::Persistence { .. } => SbErrorKind::Persistence,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_code_mapping() {
        let err = SbError::NotFound {
            path: "main.css".to_string(),
        };
        assert_eq!(err.kind(), SbErrorKind::NotFound);
        assert_eq!(err.code(), "ERR_NOT_FOUND");
    }

    #[test]
    fn test_display_carries_path() {
        let err = SbError::NotFound {
            path: "missing/app.css".to_string(),
        };
        assert!(err.to_string().contains("missing/app.css"));
    }

    #[test]
    fn test_display_carries_operation() {
        let err = SbError::Io {
            op: "open".to_string(),
            message: "permission denied".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("open"));
        assert!(rendered.contains("permission denied"));
    }

    #[test]
    fn test_codes_are_distinct() {
        let codes = [
            SbErrorKind::NotFound.code(),
            SbErrorKind::Io.code(),
            SbErrorKind::Decode.code(),
            SbErrorKind::Persistence.code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in codes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
