//! Ordered keyword rules for assigning spending categories.
//!
//! Rule order is part of the public contract: the first category whose
//! keyword matches wins, so a keyword appearing under two categories
//! resolves by list position, not specificity.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// One category with its match keywords (case-insensitive substrings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Ordered category-to-keywords mapping used by the classifier.
///
/// Callers own the value; concurrent pipeline runs should each hold their
/// own clone, and mutation goes through [`CategoryRuleSet::add_category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRuleSet {
    rules: Vec<CategoryRule>,
}

impl Default for CategoryRuleSet {
    fn default() -> Self {
        CategoryRuleSet {
            rules: vec![
                rule("Income", &["Payroll", "Deposit", "Best Buy Stores"]),
                rule("Grocery", &["Walmart", "Kroger", "Dollar-General", "Aldi", "Meijer"]),
                rule(
                    "Entertainment",
                    &["Netflix", "Spotify", "GameStop", "Doordash", "McDonalds"],
                ),
                rule(
                    "Debt",
                    &["Credit Card", "Loan Payment", "Discover", "Best Egg", "Merrick Bank"],
                ),
                rule(
                    "Utilities",
                    &["Columbia Gas", "Electric", "Water", "Verizon", "AT&T"],
                ),
                rule("Mortgage", &["Home Mtg", "Mortgage"]),
                rule("Insurance", &["State Farm", "Geico", "Progressive"]),
                rule("Home", &["The Home Depot", "Lowe's", "Menards"]),
                rule("Gas", &["Speedway", "Circle K", "Shell", "BP"]),
            ],
        }
    }
}

fn rule(name: &str, keywords: &[&str]) -> CategoryRule {
    CategoryRule {
        name: name.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

impl CategoryRuleSet {
    /// Rules in classification order.
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Category names in classification order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name.as_str())
    }

    /// Assign `(category, subcategory)` for a transaction.
    ///
    /// First-match-wins linear scan over the rule list; within a category
    /// any keyword suffices. No match yields `("Uncategorized", "Other")`.
    pub fn classify(&self, details: &str, amount: f64) -> (String, String) {
        let haystack = details.to_lowercase();

        for rule in &self.rules {
            for keyword in &rule.keywords {
                if haystack.contains(&keyword.to_lowercase()) {
                    // Small gas-station tickets are snacks, not fuel.
                    let subcategory = if rule.name == "Gas" {
                        if amount < 30.0 { "Snacks" } else { "Gas" }.to_string()
                    } else {
                        rule.name.clone()
                    };
                    return (rule.name.clone(), subcategory);
                }
            }
        }

        ("Uncategorized".to_string(), "Other".to_string())
    }

    /// Append a new category with an empty keyword list.
    ///
    /// Fails without mutating on an empty/whitespace name or a duplicate.
    pub fn add_category(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            bail!("category name is empty");
        }
        if self.rules.iter().any(|r| r.name == name) {
            bail!("category already exists: {name}");
        }

        self.rules.push(CategoryRule {
            name: name.to_string(),
            keywords: Vec::new(),
        });
        Ok(())
    }

    /// Load a rule set from a JSON file. File order is classification order.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("reading rules file {}", path.as_ref().display()))?;
        let rules: Vec<CategoryRule> =
            serde_json::from_str(&content).context("parsing rules JSON")?;
        Ok(CategoryRuleSet { rules })
    }

    /// Persist the rule set as JSON, preserving order.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.rules)?;
        fs::write(path.as_ref(), json)
            .with_context(|| format!("writing rules file {}", path.as_ref().display()))?;
        Ok(())
    }
}

/// Split a manual `"Main -> Sub"` label into `(category, subcategory)`.
///
/// A label without the separator doubles as its own subcategory. Manual
/// reassignments never go back through the classifier.
pub fn split_category_label(label: &str) -> (String, String) {
    match label.split_once(" -> ") {
        Some((main, sub)) => (main.trim().to_string(), sub.trim().to_string()),
        None => (label.trim().to_string(), label.trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rule_order() {
        let rules = CategoryRuleSet::default();
        let names: Vec<_> = rules.names().collect();
        assert_eq!(
            names,
            [
                "Income",
                "Grocery",
                "Entertainment",
                "Debt",
                "Utilities",
                "Mortgage",
                "Insurance",
                "Home",
                "Gas"
            ]
        );
    }

    #[test]
    fn test_classify_keyword_case_insensitive() {
        let rules = CategoryRuleSet::default();
        assert_eq!(
            rules.classify("WALMART STORE #123", 50.0),
            ("Grocery".to_string(), "Grocery".to_string())
        );
        assert_eq!(
            rules.classify("netflix.com monthly", 15.49),
            ("Entertainment".to_string(), "Entertainment".to_string())
        );
    }

    #[test]
    fn test_classify_no_match() {
        let rules = CategoryRuleSet::default();
        assert_eq!(
            rules.classify("Some Unknown Merchant", 12.00),
            ("Uncategorized".to_string(), "Other".to_string())
        );
    }

    #[test]
    fn test_gas_snacks_boundary() {
        let rules = CategoryRuleSet::default();
        assert_eq!(
            rules.classify("Speedway 0042", 29.99),
            ("Gas".to_string(), "Snacks".to_string())
        );
        assert_eq!(
            rules.classify("Speedway 0042", 30.00),
            ("Gas".to_string(), "Gas".to_string())
        );
    }

    #[test]
    fn test_overlapping_keyword_resolves_by_rule_order() {
        let mut rules = CategoryRuleSet::default();
        rules.add_category("Shopping").unwrap();
        // "Walmart" now appears under both Grocery and Shopping; Grocery is
        // earlier in the list and must win.
        rules.rules.last_mut().unwrap().keywords.push("Walmart".to_string());

        assert_eq!(rules.classify("Walmart Supercenter", 80.0).0, "Grocery");
    }

    #[test]
    fn test_classify_is_deterministic() {
        let rules = CategoryRuleSet::default();
        let first = rules.classify("Shell Oil 57442", 28.50);
        let second = rules.classify("Shell Oil 57442", 28.50);
        assert_eq!(first, second);
    }

    #[test]
    fn test_add_category_appends_last() {
        let mut rules = CategoryRuleSet::default();
        rules.add_category("Travel").unwrap();
        assert_eq!(rules.names().last(), Some("Travel"));
        assert!(rules.rules().last().unwrap().keywords.is_empty());
    }

    #[test]
    fn test_add_category_rejects_duplicate_and_empty() {
        let mut rules = CategoryRuleSet::default();
        let before = rules.clone();

        assert!(rules.add_category("Gas").is_err());
        assert!(rules.add_category("").is_err());
        assert!(rules.add_category("   ").is_err());
        assert_eq!(rules, before);
    }

    #[test]
    fn test_split_category_label() {
        assert_eq!(
            split_category_label("Gas -> Snacks"),
            ("Gas".to_string(), "Snacks".to_string())
        );
        assert_eq!(
            split_category_label("Grocery"),
            ("Grocery".to_string(), "Grocery".to_string())
        );
    }

    #[test]
    fn test_json_round_trip() {
        let mut rules = CategoryRuleSet::default();
        rules.add_category("Travel").unwrap();

        let path = std::env::temp_dir().join("mallard_rules_round_trip.json");
        rules.save(&path).unwrap();
        let loaded = CategoryRuleSet::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, rules);
    }
}
