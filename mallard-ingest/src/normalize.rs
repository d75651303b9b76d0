//! Raw page text sanitation: ASCII-only, single-spaced, no pagination noise.

use anyhow::Result;
use regex::Regex;

/// Flatten page texts into one clean buffer of single-spaced printable ASCII.
///
/// Empty pages contribute nothing but do not break the join. An all-empty
/// input yields `""`, which downstream stages treat as zero transactions.
pub fn normalize_pages(pages: &[String]) -> Result<String> {
    normalize_text(&pages.join("\n"))
}

/// Same sanitation for text that is already a single buffer.
///
/// Pagination markers ("Page: 1 of 3") are dropped before whitespace
/// collapse so their removal cannot leave a double space behind, which
/// keeps the whole function idempotent.
pub fn normalize_text(text: &str) -> Result<String> {
    let page_marker = Regex::new(r"(?i)Page:\s*\d+\s*of\s*\d+")?;
    let whitespace = Regex::new(r"\s+")?;

    let ascii: String = text
        .chars()
        .filter(|&c| matches!(c, ' '..='~' | '\n' | '\t' | '\r'))
        .collect();

    let no_markers = page_marker.replace_all(&ascii, "");
    let collapsed = whitespace.replace_all(&no_markers, " ");

    Ok(collapsed.trim().to_string())
}
