//! Cash-flow view
//!
//! Groups the entire unfiltered ledger by (month, expense type) and sums the
//! raw amounts, so cost and revenue magnitudes sit side by side unsigned.
//! Like the revenue views, this one ignores the active filter selection on
//! purpose. Unrecognized expense types form their own groups rather than
//! being dropped; the display layer only color-codes the CUSTO and RECEITA
//! series.

use std::collections::BTreeMap;

use serde::Serialize;
use tabled::Tabled;

use crate::models::{Ledger, Money, Month};

/// One (month, expense type) cash-flow row, unsigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct CashFlowRow {
    #[tabled(rename = "Month")]
    pub month: Month,
    #[tabled(rename = "Type")]
    pub kind: String,
    #[tabled(rename = "Total")]
    pub total: Money,
}

/// Monthly cost-vs-revenue magnitudes over the whole ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CashFlowReport {
    pub rows: Vec<CashFlowRow>,
}

impl CashFlowReport {
    /// Build the view from the full ledger snapshot
    pub fn generate(ledger: &Ledger) -> Self {
        let mut groups: BTreeMap<(Month, String), Money> = BTreeMap::new();
        for entry in ledger.entries() {
            *groups
                .entry((entry.month(), entry.kind.clone()))
                .or_default() += entry.amount;
        }

        Self {
            rows: groups
                .into_iter()
                .map(|((month, kind), total)| CashFlowRow { month, kind, total })
                .collect(),
        }
    }

    /// The rows of one expense-type series, chronological
    pub fn series(&self, kind: &str) -> Vec<&CashFlowRow> {
        self.rows.iter().filter(|r| r.kind == kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LedgerEntry, KIND_COST, KIND_REVENUE};
    use chrono::NaiveDate;

    fn entry(ymd: (i32, u32, u32), kind: &str, cents: i64) -> LedgerEntry {
        LedgerEntry::new(
            NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap(),
            "Alpha",
            kind,
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_amounts_stay_unsigned() {
        let ledger = Ledger::new(vec![
            entry((2024, 1, 5), KIND_COST, 10_000),
            entry((2024, 1, 20), KIND_REVENUE, 30_000),
        ]);

        let report = CashFlowReport::generate(&ledger);
        assert_eq!(report.rows.len(), 2);

        // Cost magnitude is positive here, not negated
        let cost = report.series(KIND_COST);
        assert_eq!(cost.len(), 1);
        assert_eq!(cost[0].total.cents(), 10_000);

        let revenue = report.series(KIND_REVENUE);
        assert_eq!(revenue[0].total.cents(), 30_000);
    }

    #[test]
    fn test_unknown_kind_gets_own_group() {
        let ledger = Ledger::new(vec![
            entry((2024, 1, 5), KIND_COST, 10_000),
            entry((2024, 1, 6), "OUTRO", 7_000),
        ]);

        let report = CashFlowReport::generate(&ledger);
        assert_eq!(report.rows.len(), 2);

        // Not folded into either named series, not dropped either
        assert!(report.series(KIND_COST).iter().all(|r| r.total.cents() == 10_000));
        assert!(report.series(KIND_REVENUE).is_empty());
        let other = report.series("OUTRO");
        assert_eq!(other.len(), 1);
        assert_eq!(other[0].total.cents(), 7_000);
    }

    #[test]
    fn test_groups_accumulate_within_month() {
        let ledger = Ledger::new(vec![
            entry((2024, 1, 5), KIND_COST, 10_000),
            entry((2024, 1, 25), KIND_COST, 2_500),
            entry((2024, 2, 1), KIND_COST, 400),
        ]);

        let report = CashFlowReport::generate(&ledger);
        let cost = report.series(KIND_COST);
        assert_eq!(cost.len(), 2);
        assert_eq!(cost[0].total.cents(), 12_500);
        assert_eq!(cost[1].total.cents(), 400);
    }
}
