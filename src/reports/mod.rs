//! Derived dashboard views
//!
//! Every view the dashboard shows is a pure reduction over the loaded
//! ledger. [`Dashboard::generate`] recomputes the full set from scratch for
//! a ledger snapshot and a filter selection; nothing is cached or mutated
//! between recomputes.
//!
//! Four views (monthly breakdowns and project totals) read the filtered,
//! sign-normalized rows. The revenue and cash-flow views read the whole
//! ledger and ignore the active selection — a product behavior preserved
//! deliberately, see DESIGN.md.

pub mod cash_flow;
pub mod monthly;
pub mod project_totals;
pub mod revenue;

pub use cash_flow::{CashFlowReport, CashFlowRow};
pub use monthly::{
    MonthProjectRow, MonthRow, MonthlyByProjectReport, MonthlyProjectTotalsReport,
    MonthlyTotalsReport,
};
pub use project_totals::{ProjectRow, ProjectTotalsReport};
pub use revenue::{ProjectShareRow, RevenueReport};

use serde::Serialize;

use crate::models::{FilterSelection, Ledger, LedgerEntry};

/// Replace each row's amount with its sign-normalized value.
///
/// Re-derived on every recompute; normalized rows are never stored back
/// into the ledger.
pub fn normalize(entries: &[&LedgerEntry]) -> Vec<LedgerEntry> {
    entries
        .iter()
        .map(|e| {
            let mut normalized = (*e).clone();
            normalized.amount = e.signed_amount();
            normalized
        })
        .collect()
}

/// The complete set of derived views for one filter selection
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    /// Monthly sums per project with the raw filtered table
    pub monthly_by_project: MonthlyByProjectReport,
    /// The same (month, project) sums as a standalone grouped report
    pub monthly_project_totals: MonthlyProjectTotalsReport,
    /// Per-month sums
    pub monthly_totals: MonthlyTotalsReport,
    /// Revenue breakdowns and grand total (ledger-wide)
    pub revenue: RevenueReport,
    /// Monthly cost-vs-revenue magnitudes (ledger-wide)
    pub cash_flow: CashFlowReport,
    /// Per-project totals and the net result
    pub project_totals: ProjectTotalsReport,
}

impl Dashboard {
    /// Recompute every view for the given ledger and selection.
    ///
    /// Pure and synchronous; call it again on each selection change.
    pub fn generate(ledger: &Ledger, selection: &FilterSelection) -> Self {
        let filtered = ledger.filter(selection);
        let normalized = normalize(&filtered);

        Self {
            monthly_by_project: MonthlyByProjectReport::generate(&normalized),
            monthly_project_totals: MonthlyProjectTotalsReport::generate(&normalized),
            monthly_totals: MonthlyTotalsReport::generate(&normalized),
            revenue: RevenueReport::generate(ledger),
            cash_flow: CashFlowReport::generate(ledger),
            project_totals: ProjectTotalsReport::generate(&normalized),
        }
    }
}
