//! Error types for wikidex.
//!
//! The library crate uses [`WikidexError`] via `thiserror`.
//! The app crate (cli) wraps this with `color-eyre` for rich diagnostics.
//!
//! Only failures that abort the run surface as errors: a single unreadable
//! document is logged and skipped at the call site instead.

use std::path::PathBuf;

/// Top-level error type for all wikidex operations.
#[derive(Debug, thiserror::Error)]
pub enum WikidexError {
    /// Filesystem I/O error (directory enumeration or index write).
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, WikidexError>;

impl WikidexError {
    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
