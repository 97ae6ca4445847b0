//! Index building and serialization.
//!
//! The builder:
//! 1. Enumerates `.md` files in the wiki directory (minus the index itself)
//! 2. Orders them case-insensitively by filename
//! 3. Extracts each page's title and heading outline
//! 4. Renders one nested bullet list and writes it to [`INDEX_FILE_NAME`]
//!
//! Everything is rebuilt from scratch on each run. A page that cannot be
//! read is logged and skipped; only directory enumeration and the final
//! write are fatal.

use std::fs;
use std::path::{Path, PathBuf};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::{debug, error, instrument};

use crate::error::{Result, WikidexError};
use crate::outline::{anchor_slug, extract_headings, title_or_fallback};
use crate::types::Document;

/// Reserved name of the generated index file, excluded from the input set.
pub const INDEX_FILE_NAME: &str = "_Sidebar.md";

/// Extension of recognized wiki pages.
const DOC_EXTENSION: &str = ".md";

/// Fixed first line of the generated index.
const INDEX_HEADER: &str = "# Table of contents";

/// Characters percent-encoded in link targets. This is the complement of the
/// set JavaScript's `encodeURI` leaves intact, so rendered links match what
/// the wiki platform itself produces.
const ENCODE_URI_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

// ---------------------------------------------------------------------------
// Scanning
// ---------------------------------------------------------------------------

/// Scan a wiki directory into ordered [`Document`]s.
///
/// Unreadable pages are logged and skipped; a directory that cannot be
/// enumerated is fatal.
#[instrument(skip_all, fields(dir = %dir.display(), max_depth))]
pub fn scan_documents(dir: &Path, max_depth: u8) -> Result<Vec<Document>> {
    let entries = fs::read_dir(dir).map_err(|e| WikidexError::io(dir, e))?;

    let mut names: Vec<String> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| WikidexError::io(dir, e))?;

        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            debug!(name = ?entry.file_name(), "skipping non-UTF-8 filename");
            continue;
        };

        if !file_name.ends_with(DOC_EXTENSION) || file_name == INDEX_FILE_NAME {
            continue;
        }
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }

        names.push(file_name.to_string());
    }

    // Case-insensitive filename order determines index order.
    names.sort_by_key(|n| n.to_lowercase());

    let mut documents = Vec::with_capacity(names.len());
    for name in names {
        let path = dir.join(&name);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                error!(file = %name, cause = %e, "failed to read document, skipping");
                continue;
            }
        };

        let stem = name
            .strip_suffix(DOC_EXTENSION)
            .unwrap_or(&name)
            .to_string();

        documents.push(Document {
            title: title_or_fallback(&content, &stem),
            headings: extract_headings(&content, max_depth),
            name: stem,
        });
    }

    debug!(count = documents.len(), "documents scanned");
    Ok(documents)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render the index body for an ordered set of documents.
pub fn render(documents: &[Document]) -> String {
    let mut out = format!("{INDEX_HEADER}\n\n");

    for doc in documents {
        let page = encode_uri(&doc.name);
        out.push_str(&format!("- [{}]({page})\n", doc.title));

        for heading in &doc.headings {
            // H2 sits flush with the page entry's children; each further
            // level nests two more spaces.
            let indent = "  ".repeat(usize::from(heading.depth.saturating_sub(2)));
            let anchor = encode_uri(&anchor_slug(&heading.text));
            out.push_str(&format!(
                "{indent}- [{}]({page}#{anchor})\n",
                heading.text
            ));
        }
    }

    out
}

/// Build the full index text for a wiki directory.
pub fn build_index(dir: &Path, max_depth: u8) -> Result<String> {
    let documents = scan_documents(dir, max_depth)?;
    Ok(render(&documents))
}

/// Build the index and write it to [`INDEX_FILE_NAME`] inside `dir`,
/// overwriting any prior content. Returns the written path.
#[instrument(skip_all, fields(dir = %dir.display(), max_depth))]
pub fn write_index(dir: &Path, max_depth: u8) -> Result<PathBuf> {
    let output = build_index(dir, max_depth)?;

    let path = dir.join(INDEX_FILE_NAME);
    fs::write(&path, &output).map_err(|e| WikidexError::io(&path, e))?;

    debug!(path = %path.display(), bytes = output.len(), "index written");
    Ok(path)
}

fn encode_uri(s: &str) -> String {
    utf8_percent_encode(s, ENCODE_URI_SET).to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
