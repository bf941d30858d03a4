// ── Central error type ────────────────────────────────────────────────────────
//
// All fallible operations in findbar return `error::Result<T>`.  Searching
// itself never fails — empty queries, empty targets, and out-of-range carets
// are all valid inputs — so the only error sources are the optional string
// table loaders in `lang`.

/// Every error that findbar can produce.
#[derive(Debug)]
pub enum FindbarError {
    /// A standard I/O error (reading a string table file).
    Io(std::io::Error),

    /// A string table failed to parse as JSON.
    Json(serde_json::Error),
}

impl std::fmt::Display for FindbarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "string table parse error: {e}"),
        }
    }
}

impl std::error::Error for FindbarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for FindbarError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for FindbarError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FindbarError>;
