//! Regex extraction of transaction records from normalized statement text.

use anyhow::Result;
use regex::Regex;

/// One matched transaction record.
///
/// Byte offsets point into the normalized text so the enricher can capture
/// the trailing free text that the non-greedy description left behind.
#[derive(Debug, Clone, PartialEq)]
pub struct RawMatch {
    pub start: usize,
    pub end: usize,
    /// `MM/DD` or `Mon D` token, unresolved.
    pub date_token: String,
    /// Explicit "Withdrawal"/"Deposit" word, when the row printed one.
    pub direction: Option<String>,
    /// Row type keyword from the closed set, when present.
    pub transaction_type: Option<String>,
    pub details: String,
    /// Amount as printed: optional sign, thousands separators, two fraction digits.
    pub amount: String,
    /// Balance as printed, never signed.
    pub balance: String,
}

/// Scan normalized text for transaction records, left to right,
/// non-overlapping.
///
/// A date token that fits neither supported spelling simply starts no
/// record there. Zero matches is a valid outcome, not an error.
pub fn extract(text: &str) -> Result<Vec<RawMatch>> {
    let record = Regex::new(concat!(
        r"(?P<date>\d{2}/\d{2}|[A-Za-z]{3} \d{1,2})\s+",
        r"(?:\b(?P<direction>Withdrawal|Deposit)\b\s+)?",
        r"(?:(?P<kind>Card Purchase|Card purchase|POS|ACH|Transfer|ATM)?\s+)?",
        r"(?P<details>.+?)\s+",
        r"(?P<amount>-?[\d,]+\.\d{2})\s+",
        r"(?P<balance>[\d,]+\.\d{2})",
    ))?;

    let mut out = Vec::new();
    for caps in record.captures_iter(text) {
        let whole = match caps.get(0) {
            Some(m) => m,
            None => continue,
        };

        out.push(RawMatch {
            start: whole.start(),
            end: whole.end(),
            date_token: caps["date"].to_string(),
            direction: caps.name("direction").map(|m| m.as_str().to_string()),
            transaction_type: caps.name("kind").map(|m| m.as_str().to_string()),
            details: caps["details"].to_string(),
            amount: caps["amount"].to_string(),
            balance: caps["balance"].to_string(),
        });
    }

    Ok(out)
}
