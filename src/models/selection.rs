//! Filter selection model
//!
//! The three multi-select filter dimensions of the dashboard: months,
//! projects, and expense types. Each dimension is an inclusion set. The
//! month set is authoritative — an empty month selection matches nothing —
//! while empty project/kind sets mean "no filtering on that dimension".
//! This asymmetry mirrors the shipped product behavior and must not be
//! "fixed" here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::entry::LedgerEntry;
use super::ledger::Ledger;
use super::month::Month;

/// The active filter state, one set per dimension
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Months to include. Empty means no row matches.
    pub months: BTreeSet<Month>,

    /// Projects to include. Empty means every project matches.
    pub projects: BTreeSet<String>,

    /// Expense types to include. Empty means every type matches.
    pub kinds: BTreeSet<String>,
}

impl FilterSelection {
    /// The default control state: every value present in the ledger selected
    pub fn all(ledger: &Ledger) -> Self {
        Self {
            months: ledger.months(),
            projects: ledger.projects(),
            kinds: ledger.kinds(),
        }
    }

    /// Check whether an entry passes all three dimensions.
    ///
    /// The three membership tests compose as a conjunction; the month test
    /// is applied unconditionally.
    pub fn matches(&self, entry: &LedgerEntry) -> bool {
        self.months.contains(&entry.month())
            && (self.projects.is_empty() || self.projects.contains(&entry.project))
            && (self.kinds.is_empty() || self.kinds.contains(&entry.kind))
    }
}
