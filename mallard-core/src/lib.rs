//! mallard-core: domain types and classification logic for parsed bank-statement transactions.

pub mod dates;
pub mod rules;
pub mod transaction;

pub use dates::{StatementDate, parse_statement_date};
pub use rules::{CategoryRule, CategoryRuleSet, split_category_label};
pub use transaction::{Direction, Transaction};
