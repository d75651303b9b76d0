//! Transaction record produced by the statement pipeline.

use serde::{Deserialize, Serialize};

use crate::dates::StatementDate;

/// Cash-flow sign of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Withdrawal,
    Deposit,
}

impl Direction {
    /// Infer the direction from the printed amount when the row carries no
    /// explicit Withdrawal/Deposit word.
    pub fn from_amount_token(amount: &str) -> Self {
        if amount.contains('-') {
            Direction::Withdrawal
        } else {
            Direction::Deposit
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Withdrawal => "Withdrawal",
            Direction::Deposit => "Deposit",
        }
    }
}

/// One parsed financial movement, in printed statement order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: StatementDate,
    pub direction: Direction,
    /// Row type keyword ("Card Purchase", "ACH", ...) or "Other".
    pub transaction_type: String,
    /// Merchant/description text, with any `Ref:<n>` token reformatted and
    /// continuation text appended.
    pub details: String,
    /// Non-negative magnitude; `direction` carries the sign.
    pub amount: f64,
    /// Running balance as printed, never sign-adjusted.
    pub balance: f64,
    pub category: String,
    pub subcategory: String,
}

impl Transaction {
    /// Signed view of the amount: withdrawals negative, deposits positive.
    pub fn signed_amount(&self) -> f64 {
        match self.direction {
            Direction::Withdrawal => -self.amount,
            Direction::Deposit => self.amount,
        }
    }
}
