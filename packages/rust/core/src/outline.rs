//! Markdown outline extraction: titles, headings, and link anchors.
//!
//! Line-oriented regex scanning — the wiki format puts one heading marker per
//! line, so no markdown parser is needed. The anchor slug algorithm mirrors
//! the hosting platform's auto-generated heading anchors; its step order is
//! load-bearing and must not be rearranged, or generated links silently stop
//! resolving.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Heading, MAX_HEADING_DEPTH};

// ---------------------------------------------------------------------------
// Title extraction
// ---------------------------------------------------------------------------

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\s+(.*)$").expect("valid regex"));

/// Extract the page title from the first level-1 heading line, if any.
pub fn extract_title(content: &str) -> Option<String> {
    content
        .lines()
        .find_map(|line| TITLE_RE.captures(line))
        .map(|c| c[1].trim().to_string())
}

/// Page title with fallback: when no level-1 heading exists, derive one from
/// the filename stem with hyphens turned into spaces.
pub fn title_or_fallback(content: &str, name: &str) -> String {
    extract_title(content).unwrap_or_else(|| name.replace('-', " "))
}

// ---------------------------------------------------------------------------
// Heading extraction
// ---------------------------------------------------------------------------

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{2,6})\s+(.*)$").expect("valid regex"));

/// Collect outline headings (`##` through `######`) in source order,
/// keeping only those at or above `max_depth` (clamped to 6).
///
/// Level-1 lines are never outline headings — they carry the title.
pub fn extract_headings(content: &str, max_depth: u8) -> Vec<Heading> {
    let max_depth = max_depth.min(MAX_HEADING_DEPTH);

    content
        .lines()
        .filter_map(|line| HEADING_RE.captures(line))
        .filter_map(|c| {
            let depth = c[1].len() as u8;
            (depth <= max_depth).then(|| Heading {
                depth,
                text: c[2].trim().to_string(),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Anchor slugging
// ---------------------------------------------------------------------------

/// HTML-tag-like spans, including an unterminated tag at end of input.
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[^>]+(>|$)").expect("valid regex"));

/// Straight and right-single-quote apostrophes.
static APOSTROPHE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"['’]").expect("valid regex"));

/// Everything outside the anchor alphabet.
static PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9 _-]").expect("valid regex"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

static DASH_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("valid regex"));

static EDGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-_]+|[-_]+$").expect("valid regex"));

/// Derive the link anchor for a heading text.
///
/// Close approximation of the wiki platform's anchor generation. The steps
/// run in this exact order: trim, lowercase, strip HTML tags, drop
/// apostrophes, drop remaining punctuation, collapse whitespace to hyphens,
/// collapse hyphen runs, strip edge hyphens/underscores.
pub fn anchor_slug(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let no_tags = TAG_RE.replace_all(&lowered, "");
    let no_apostrophes = APOSTROPHE_RE.replace_all(&no_tags, "");
    let alphabet_only = PUNCT_RE.replace_all(&no_apostrophes, "");
    let hyphenated = WHITESPACE_RE.replace_all(&alphabet_only, "-");
    let collapsed = DASH_RUN_RE.replace_all(&hyphenated, "-");
    EDGE_RE.replace_all(&collapsed, "").into_owned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- Title extraction ---

    #[test]
    fn title_from_first_h1() {
        let content = "# Getting Started\n\nSome intro text.\n";
        assert_eq!(extract_title(content), Some("Getting Started".into()));
    }

    #[test]
    fn title_skips_non_h1_lines() {
        let content = "Preamble paragraph.\n## Not the title\n# Real Title\n";
        assert_eq!(extract_title(content), Some("Real Title".into()));
    }

    #[test]
    fn title_fallback_uses_filename() {
        let content = "No headings here at all.\n";
        assert_eq!(title_or_fallback(content, "api-reference"), "api reference");
    }

    #[test]
    fn title_fallback_leaves_underscores() {
        assert_eq!(title_or_fallback("", "release_notes"), "release_notes");
    }

    // --- Heading extraction ---

    #[test]
    fn headings_keep_source_order() {
        let content = "# Title\n## Alpha\ntext\n### Beta\n## Gamma\n";
        let headings = extract_headings(content, 3);
        let texts: Vec<&str> = headings.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, vec!["Alpha", "Beta", "Gamma"]);
        assert_eq!(headings[0].depth, 2);
        assert_eq!(headings[1].depth, 3);
    }

    #[test]
    fn headings_respect_depth_limit() {
        let content = "## Shallow\n### Deep Heading\n";
        let at_two = extract_headings(content, 2);
        assert_eq!(at_two.len(), 1);
        assert_eq!(at_two[0].text, "Shallow");

        let at_three = extract_headings(content, 3);
        assert_eq!(at_three.len(), 2);
        assert_eq!(at_three[1].text, "Deep Heading");
    }

    #[test]
    fn headings_exclude_h1_even_when_repeated() {
        let content = "# One\n# Another H1\n## Kept\n";
        let headings = extract_headings(content, 6);
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].text, "Kept");
    }

    #[test]
    fn headings_depth_limit_clamps_to_six() {
        let content = "###### Sixth\n";
        let headings = extract_headings(content, 99);
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].depth, 6);
    }

    #[test]
    fn seven_hashes_is_not_a_heading() {
        assert!(extract_headings("####### Too Deep\n", 6).is_empty());
    }

    // --- Anchor slugging ---

    #[test]
    fn slug_plain_text_lowercases_and_hyphenates() {
        assert_eq!(anchor_slug("Getting Started Guide 2"), "getting-started-guide-2");
    }

    #[test]
    fn slug_is_idempotent() {
        let once = anchor_slug("Don't <b>Panic</b> — Again!");
        assert_eq!(anchor_slug(&once), once);
    }

    #[test]
    fn slug_removes_apostrophes() {
        assert_eq!(anchor_slug("Don't Panic!"), "dont-panic");
        assert_eq!(anchor_slug("Don’t Panic!"), "dont-panic");
    }

    #[test]
    fn slug_strips_html_tags() {
        assert_eq!(anchor_slug("<b>Bold</b> Title"), "bold-title");
    }

    #[test]
    fn slug_strips_unterminated_trailing_tag() {
        assert_eq!(anchor_slug("Broken <span class=\"x"), "broken");
    }

    #[test]
    fn slug_collapses_hyphen_runs() {
        assert_eq!(anchor_slug("a -- b"), "a-b");
    }

    #[test]
    fn slug_strips_edge_hyphens_and_underscores() {
        assert_eq!(anchor_slug("--_trimmed_--"), "trimmed");
    }

    #[test]
    fn slug_drops_non_ascii() {
        assert_eq!(anchor_slug("Café Menu"), "caf-menu");
    }

    #[test]
    fn slug_empty_for_punctuation_only() {
        assert_eq!(anchor_slug("!!!"), "");
    }
}
