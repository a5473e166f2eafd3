//! Ledger entry model
//!
//! Represents one row of the project ledger: a dated amount recorded against
//! a project under an expense-type label. The expense type is open-ended
//! string data; `CUSTO` and `RECEITA` are the two values the net
//! computations recognize.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;
use super::month::Month;

/// Expense-type value for cost rows; these count negatively in net totals
pub const KIND_COST: &str = "CUSTO";

/// Expense-type value for revenue rows; these count positively everywhere
pub const KIND_REVENUE: &str = "RECEITA";

/// A single ledger row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Calendar date the amount was recorded on (day precision)
    pub date: NaiveDate,

    /// Project label; unbounded cardinality
    pub project: String,

    /// Expense-type label; open string set, `CUSTO`/`RECEITA` recognized
    pub kind: String,

    /// Recorded amount, sign as it appears in the source ledger
    pub amount: Money,
}

impl LedgerEntry {
    /// Create a new ledger entry
    pub fn new(
        date: NaiveDate,
        project: impl Into<String>,
        kind: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            date,
            project: project.into(),
            kind: kind.into(),
            amount,
        }
    }

    /// The year-month bucket this entry falls into.
    ///
    /// Always derived from `date`; the bucket is never stored separately.
    pub fn month(&self) -> Month {
        Month::from_date(self.date)
    }

    /// Check whether this entry is a cost row
    pub fn is_cost(&self) -> bool {
        self.kind == KIND_COST
    }

    /// Check whether this entry is a revenue row
    pub fn is_revenue(&self) -> bool {
        self.kind == KIND_REVENUE
    }

    /// The sign-normalized amount used in net computations.
    ///
    /// Cost rows contribute negatively; every other expense-type value,
    /// recognized or not, passes through unchanged.
    pub fn signed_amount(&self) -> Money {
        if self.is_cost() {
            -self.amount
        } else {
            self.amount
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kind: &str, cents: i64) -> LedgerEntry {
        LedgerEntry::new(
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            "Alpha",
            kind,
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_month_is_derived_from_date() {
        let e = entry(KIND_COST, 100);
        assert_eq!(e.month(), Month::new(2024, 1).unwrap());

        let mut moved = e.clone();
        moved.date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(moved.month(), Month::new(2024, 2).unwrap());
    }

    #[test]
    fn test_signed_amount_negates_costs() {
        assert_eq!(entry(KIND_COST, 10_000).signed_amount().cents(), -10_000);
    }

    #[test]
    fn test_signed_amount_keeps_revenue() {
        assert_eq!(entry(KIND_REVENUE, 30_000).signed_amount().cents(), 30_000);
    }

    #[test]
    fn test_signed_amount_unknown_kind_passes_through() {
        let e = entry("OUTRO", 5_000);
        assert!(!e.is_cost());
        assert!(!e.is_revenue());
        assert_eq!(e.signed_amount().cents(), 5_000);
    }

    #[test]
    fn test_kind_is_case_sensitive_data() {
        // The expense type is data, not an enum; only the exact source
        // vocabulary is recognized.
        assert!(!entry("custo", 100).is_cost());
        assert_eq!(entry("custo", 100).signed_amount().cents(), 100);
    }
}
