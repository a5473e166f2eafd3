//! Monthly views over the filtered ledger
//!
//! Three of the dashboard views live here, all computed from the filtered,
//! sign-normalized row set: the month/project breakdown backing the main
//! chart (with its raw-row table), the same breakdown surfaced as its own
//! grouped report, and the per-month totals.

use std::collections::BTreeMap;

use serde::Serialize;
use tabled::Tabled;

use crate::models::{LedgerEntry, Money, Month};

/// One grouped row of a (month, project) breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct MonthProjectRow {
    #[tabled(rename = "Month")]
    pub month: Month,
    #[tabled(rename = "Project")]
    pub project: String,
    #[tabled(rename = "Total")]
    pub total: Money,
}

/// One grouped row of a per-month breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct MonthRow {
    #[tabled(rename = "Month")]
    pub month: Month,
    #[tabled(rename = "Total")]
    pub total: Money,
}

/// Group entries by (month, project), summing amounts in key order
pub(crate) fn group_month_project(entries: &[LedgerEntry]) -> Vec<MonthProjectRow> {
    let mut groups: BTreeMap<(Month, String), Money> = BTreeMap::new();
    for entry in entries {
        *groups
            .entry((entry.month(), entry.project.clone()))
            .or_default() += entry.amount;
    }

    groups
        .into_iter()
        .map(|((month, project), total)| MonthProjectRow {
            month,
            project,
            total,
        })
        .collect()
}

/// Monthly sums per project, plus the normalized rows feeding them.
///
/// The rows keep their source order; only the grouped series is key-sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyByProjectReport {
    /// (month, project) sums of the signed amounts
    pub series: Vec<MonthProjectRow>,
    /// The filtered, sign-normalized rows, in source order
    pub entries: Vec<LedgerEntry>,
}

impl MonthlyByProjectReport {
    /// Build the view from the filtered+normalized row set
    pub fn generate(normalized: &[LedgerEntry]) -> Self {
        Self {
            series: group_month_project(normalized),
            entries: normalized.to_vec(),
        }
    }
}

/// The (month, project) sums surfaced as a standalone grouped report.
///
/// Same grouping as [`MonthlyByProjectReport`]; the product treats it as a
/// separate report with its own table, so it stays a separate payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyProjectTotalsReport {
    pub rows: Vec<MonthProjectRow>,
}

impl MonthlyProjectTotalsReport {
    /// Build the view from the filtered+normalized row set
    pub fn generate(normalized: &[LedgerEntry]) -> Self {
        Self {
            rows: group_month_project(normalized),
        }
    }
}

/// Per-month sums of the signed amounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTotalsReport {
    pub rows: Vec<MonthRow>,
}

impl MonthlyTotalsReport {
    /// Build the view from the filtered+normalized row set
    pub fn generate(normalized: &[LedgerEntry]) -> Self {
        let mut groups: BTreeMap<Month, Money> = BTreeMap::new();
        for entry in normalized {
            *groups.entry(entry.month()).or_default() += entry.amount;
        }

        Self {
            rows: groups
                .into_iter()
                .map(|(month, total)| MonthRow { month, total })
                .collect(),
        }
    }

    /// Sum over every month row
    pub fn total(&self) -> Money {
        self.rows.iter().map(|r| r.total).sum()
    }
}
