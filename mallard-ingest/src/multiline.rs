//! Reassembly of transactions split across printed lines.
//!
//! Some statement layouts render one transaction as three visual lines:
//! date and merchant, a lone reference number, then the amount/balance
//! pair. After whitespace collapse that becomes a fixed token shape inside
//! the flattened buffer, which can be folded back into a single record.

use anyhow::Result;
use regex::Regex;

/// Fold the `date description reference amount balance` continuation shape
/// into one single-spaced record.
///
/// The bare reference number stays inside the description so the enricher
/// can reformat it later. Best-effort: only this exact shape is rewritten;
/// anything else is left for trailing-text capture to recover.
pub fn join_continuations(text: &str) -> Result<String> {
    let continuation = Regex::new(concat!(
        r"(\d{2}/\d{2}|[A-Za-z]{3} \d{1,2})\s+",
        r"((?:Card Purchase|POS|ACH|Transfer|ATM)?\s*.+?)\s+",
        r"(\d+)\s+",
        r"(-?[\d,]+\.\d{2})\s+",
        r"([\d,]+\.\d{2})",
    ))?;

    Ok(continuation.replace_all(text, "$1 $2 $3 $4 $5").into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folds_reference_continuation() {
        let text = "01/02 Card Purchase Acme Hardware 55512 -42.00 958.00";
        assert_eq!(
            join_continuations(text).unwrap(),
            "01/02 Card Purchase Acme Hardware 55512 -42.00 958.00"
        );
    }

    #[test]
    fn test_normalizes_residual_spacing() {
        // Continuation fragments that survived normalization with stray
        // spacing come out single-spaced.
        let text = "Jan 2 Transfer Savings  9001  -100.00  900.00";
        assert_eq!(
            join_continuations(text).unwrap(),
            "Jan 2 Transfer Savings 9001 -100.00 900.00"
        );
    }

    #[test]
    fn test_leaves_other_shapes_alone() {
        let text = "no transactions here at all";
        assert_eq!(join_continuations(text).unwrap(), text);

        let no_reference = "01/02 Coffee -4.50 95.50";
        assert_eq!(join_continuations(no_reference).unwrap(), no_reference);
    }
}
