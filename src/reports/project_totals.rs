//! Per-project grand totals and the net result
//!
//! Groups the filtered, sign-normalized rows by project and sums the signed
//! amounts; the scalar sum over all filtered rows is the net result shown
//! as the dashboard's bottom-line metric.

use std::collections::BTreeMap;

use serde::Serialize;
use tabled::Tabled;

use crate::models::{LedgerEntry, Money};

/// One project's signed total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct ProjectRow {
    #[tabled(rename = "Project")]
    pub project: String,
    #[tabled(rename = "Total")]
    pub total: Money,
}

/// Project totals plus the overall net result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectTotalsReport {
    pub rows: Vec<ProjectRow>,
    /// Net result across all filtered rows (revenue minus costs)
    pub net_result: Money,
}

impl ProjectTotalsReport {
    /// Build the view from the filtered+normalized row set
    pub fn generate(normalized: &[LedgerEntry]) -> Self {
        let mut groups: BTreeMap<String, Money> = BTreeMap::new();
        let mut net_result = Money::zero();

        for entry in normalized {
            *groups.entry(entry.project.clone()).or_default() += entry.amount;
            net_result += entry.amount;
        }

        Self {
            rows: groups
                .into_iter()
                .map(|(project, total)| ProjectRow { project, total })
                .collect(),
            net_result,
        }
    }
}
