//! The full statement pipeline: normalize, join continuations, extract,
//! enrich, date-normalize, classify.

use anyhow::Result;
use mallard_core::{CategoryRuleSet, Direction, Transaction, parse_statement_date};

use crate::enrich::enrich_details;
use crate::extract::extract;
use crate::multiline::join_continuations;
use crate::normalize::normalize_pages;

/// Parse raw page texts into categorized transactions, preserving printed
/// statement order.
///
/// `year` resolves the year-less month/day tokens. An empty or unmatchable
/// input yields `Ok(vec![])`; per-row anomalies (unknown month
/// abbreviation, missing type keyword) degrade to defaults and keep the
/// transaction in the output.
pub fn parse_statement(
    pages: &[String],
    year: i32,
    rules: &CategoryRuleSet,
) -> Result<Vec<Transaction>> {
    let text = normalize_pages(pages)?;
    parse_normalized(&text, year, rules)
}

/// Pipeline stages over already-normalized text.
///
/// Split out so callers that normalized up front (for example to tell an
/// empty document from a zero-match one) do not pay for it twice.
pub fn parse_normalized(
    text: &str,
    year: i32,
    rules: &CategoryRuleSet,
) -> Result<Vec<Transaction>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let text = join_continuations(text)?;
    let matches = extract(&text)?;
    let details = enrich_details(&matches, &text)?;

    let mut out = Vec::with_capacity(matches.len());
    for (m, details) in matches.iter().zip(details) {
        let direction = match m.direction.as_deref() {
            Some("Withdrawal") => Direction::Withdrawal,
            Some("Deposit") => Direction::Deposit,
            _ => Direction::from_amount_token(&m.amount),
        };

        let amount: f64 = m.amount.replace(['-', ','], "").parse()?;
        let balance: f64 = m.balance.replace(',', "").parse()?;

        let (category, subcategory) = rules.classify(&details, amount);

        out.push(Transaction {
            date: parse_statement_date(&m.date_token, year),
            direction,
            transaction_type: m
                .transaction_type
                .clone()
                .unwrap_or_else(|| "Other".to_string()),
            details,
            amount,
            balance,
            category,
            subcategory,
        });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_amount_sign_and_separators_are_stripped() {
        let rules = CategoryRuleSet::default();
        let txns = parse_statement(
            &pages(&["01/02 Rent -1,800.00 2,200.00"]),
            2025,
            &rules,
        )
        .unwrap();

        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].amount, 1800.00);
        assert_eq!(txns[0].balance, 2200.00);
        assert_eq!(txns[0].direction, Direction::Withdrawal);
        assert_eq!(txns[0].signed_amount(), -1800.00);
    }

    #[test]
    fn test_explicit_direction_word_wins_over_sign() {
        let rules = CategoryRuleSet::default();
        let txns = parse_statement(
            &pages(&["01/02 Deposit Refund Acme 25.00 2,225.00"]),
            2025,
            &rules,
        )
        .unwrap();

        assert_eq!(txns[0].direction, Direction::Deposit);
        assert_eq!(txns[0].transaction_type, "Other");
    }

    #[test]
    fn test_missing_type_falls_back_to_other() {
        let rules = CategoryRuleSet::default();
        let txns =
            parse_statement(&pages(&["01/02 Coffee -4.50 95.50"]), 2025, &rules).unwrap();
        assert_eq!(txns[0].transaction_type, "Other");
    }

    #[test]
    fn test_empty_input_short_circuits() {
        let rules = CategoryRuleSet::default();
        assert!(parse_statement(&[], 2025, &rules).unwrap().is_empty());
        assert!(
            parse_statement(&pages(&["", ""]), 2025, &rules)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_degraded_month_keeps_transaction() {
        let rules = CategoryRuleSet::default();
        let txns =
            parse_statement(&pages(&["Xxz 5 Coffee -4.50 95.50"]), 2025, &rules).unwrap();

        assert_eq!(txns.len(), 1);
        assert!(txns[0].date.is_degraded());
        assert_eq!(txns[0].date.to_string(), "2025-00-05");
    }
}
