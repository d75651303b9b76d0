//! Trailing-text capture and reference-number formatting.
//!
//! The extractor's non-greedy description stops at the amount/balance pair,
//! so memo lines, addresses, and phone numbers printed after a record would
//! otherwise be lost. Everything between one match and the start of the
//! next belongs to the earlier transaction's details.

use anyhow::Result;
use regex::Regex;

use crate::extract::RawMatch;

/// Produce the final details string for each match, in match order.
///
/// Trailing text up to the next match (or end of text for the last match)
/// is appended first; then any `Ref:<digits>` token in the combined text is
/// spaced out as ` - Ref:<digits>`.
pub fn enrich_details(matches: &[RawMatch], text: &str) -> Result<Vec<String>> {
    let reference = Regex::new(r"\s*(Ref:\d+)")?;

    let mut out = Vec::with_capacity(matches.len());
    for (i, m) in matches.iter().enumerate() {
        let boundary = matches.get(i + 1).map_or(text.len(), |next| next.start);
        let trailing = text[m.end..boundary].trim();

        let mut details = m.details.trim().to_string();
        if !trailing.is_empty() {
            details.push(' ');
            details.push_str(trailing);
        }

        let details = reference.replace_all(&details, " - $1");
        out.push(details.trim().to_string());
    }

    Ok(out)
}
