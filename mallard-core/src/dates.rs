//! Statement date normalization.
//!
//! Statement rows print dates as `MM/DD` or `Mon D` with no year, so the
//! year always comes from the caller.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A normalized statement date.
///
/// A month of `0` is the sentinel for an unrecognized month abbreviation:
/// the date renders with an `00` month and reports
/// [`StatementDate::is_degraded`] instead of dropping the transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl StatementDate {
    /// True when the month abbreviation could not be resolved.
    pub fn is_degraded(&self) -> bool {
        self.month == 0
    }

    /// Real calendar date, when one exists. `None` for the degraded
    /// sentinel or for out-of-range `MM/DD` values.
    pub fn as_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl fmt::Display for StatementDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Normalize a `MM/DD` or `Mon D` token with the statement year.
///
/// Unknown month abbreviations degrade to the sentinel month rather than
/// failing; callers wanting strict dates check [`StatementDate::is_degraded`].
pub fn parse_statement_date(token: &str, year: i32) -> StatementDate {
    let token = token.trim();

    if let Some((month, day)) = token.split_once('/') {
        return StatementDate {
            year,
            month: month.parse().unwrap_or(0),
            day: day.parse().unwrap_or(0),
        };
    }

    let mut parts = token.split_whitespace();
    let month = parts.next().map_or(0, month_number);
    let day = parts.next().and_then(|d| d.parse().ok()).unwrap_or(0);

    StatementDate { year, month, day }
}

fn month_number(abbr: &str) -> u32 {
    match abbr {
        "Jan" => 1,
        "Feb" => 2,
        "Mar" => 3,
        "Apr" => 4,
        "May" => 5,
        "Jun" => 6,
        "Jul" => 7,
        "Aug" => 8,
        "Sep" => 9,
        "Oct" => 10,
        "Nov" => 11,
        "Dec" => 12,
        _ => 0,
    }
}
