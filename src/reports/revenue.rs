//! Revenue views
//!
//! The three revenue views read the RECEITA subset of the *whole* ledger,
//! not the actively filtered rows — the product computes revenue ledger-wide
//! regardless of the sidebar selection, and that behavior is kept as-is.
//! Revenue amounts are summed raw; they are never sign-flipped.

use std::collections::BTreeMap;

use serde::Serialize;
use tabled::Tabled;

use crate::models::{Ledger, LedgerEntry, Money, Month};

use super::monthly::MonthProjectRow;

/// One project's revenue with its share of the grand total
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct ProjectShareRow {
    #[tabled(rename = "Project")]
    pub project: String,
    #[tabled(rename = "Revenue")]
    pub total: Money,
    #[tabled(rename = "Share", display_with = "display_share")]
    pub share: f64,
}

fn display_share(share: &f64) -> String {
    format!("{:.1}%", share)
}

/// Revenue breakdowns and the grand total
#[derive(Debug, Clone, Serialize)]
pub struct RevenueReport {
    /// Revenue per (month, project)
    pub by_project_month: Vec<MonthProjectRow>,
    /// Revenue per project with share-of-total
    pub by_project: Vec<ProjectShareRow>,
    /// Total revenue across the whole ledger
    pub grand_total: Money,
}

impl RevenueReport {
    /// Build the revenue views from the full ledger snapshot
    pub fn generate(ledger: &Ledger) -> Self {
        let revenue: Vec<&LedgerEntry> = ledger
            .entries()
            .iter()
            .filter(|e| e.is_revenue())
            .collect();

        let mut by_month: BTreeMap<(Month, String), Money> = BTreeMap::new();
        let mut by_project: BTreeMap<String, Money> = BTreeMap::new();
        let mut grand_total = Money::zero();

        for entry in &revenue {
            *by_month
                .entry((entry.month(), entry.project.clone()))
                .or_default() += entry.amount;
            *by_project.entry(entry.project.clone()).or_default() += entry.amount;
            grand_total += entry.amount;
        }

        let by_project = by_project
            .into_iter()
            .map(|(project, total)| {
                let share = if grand_total.is_zero() {
                    0.0
                } else {
                    total.cents() as f64 / grand_total.cents() as f64 * 100.0
                };
                ProjectShareRow {
                    project,
                    total,
                    share,
                }
            })
            .collect();

        Self {
            by_project_month: by_month
                .into_iter()
                .map(|((month, project), total)| MonthProjectRow {
                    month,
                    project,
                    total,
                })
                .collect(),
            by_project,
            grand_total,
        }
    }
}
