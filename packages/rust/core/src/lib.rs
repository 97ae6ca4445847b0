//! Core library for wikidex — wiki navigation index generation.
//!
//! This crate provides:
//! - [`WikidexError`] — the unified error type
//! - Domain types ([`Document`], [`Heading`])
//! - Markdown outline extraction ([`outline`])
//! - Index building and serialization ([`index`])

pub mod error;
pub mod index;
pub mod outline;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use error::{Result, WikidexError};
pub use index::{build_index, scan_documents, write_index, INDEX_FILE_NAME};
pub use types::{Document, Heading, DEFAULT_HEADING_DEPTH, MAX_HEADING_DEPTH};
