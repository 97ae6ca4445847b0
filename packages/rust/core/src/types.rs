//! Core domain types for wikidex indexes.
//!
//! All values here are transient — rebuilt from the wiki directory on every
//! run, never persisted. The only artifact that outlives a run is the
//! rendered index file itself.

/// Deepest heading level that can appear in the outline (`######`).
pub const MAX_HEADING_DEPTH: u8 = 6;

/// Default maximum heading depth included in the outline.
pub const DEFAULT_HEADING_DEPTH: u8 = 3;

// ---------------------------------------------------------------------------
// Heading
// ---------------------------------------------------------------------------

/// A single outline heading within a document.
///
/// `depth` counts the hash marks, so it is always in `2..=6`; level-1
/// headings are reserved for the document title and never become headings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Nesting depth (2 for `##` through 6 for `######`).
    pub depth: u8,
    /// Heading text, trimmed.
    pub text: String,
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// One wiki page: its link target, display title, and heading outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Filename without the `.md` extension — the wiki link target.
    pub name: String,
    /// Display title (first `# ` line, or derived from the filename).
    pub title: String,
    /// Retained headings in source order.
    pub headings: Vec<Heading>,
}
