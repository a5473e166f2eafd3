//! The loaded ledger snapshot
//!
//! A `Ledger` is the immutable row set for one reporting session. It is
//! loaded once, never written back, and every derived view is recomputed
//! from it. Filtering produces borrowed views; nothing here mutates.

use std::collections::BTreeSet;

use super::entry::LedgerEntry;
use super::month::Month;
use super::selection::FilterSelection;

/// Immutable snapshot of all loaded ledger rows
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    /// Create a ledger from loaded rows, preserving their source order
    pub fn new(entries: Vec<LedgerEntry>) -> Self {
        Self { entries }
    }

    /// All rows, in source order
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger holds no rows
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct months present, chronological
    pub fn months(&self) -> BTreeSet<Month> {
        self.entries.iter().map(LedgerEntry::month).collect()
    }

    /// Distinct project labels, lexical
    pub fn projects(&self) -> BTreeSet<String> {
        self.entries.iter().map(|e| e.project.clone()).collect()
    }

    /// Distinct expense-type labels, lexical
    pub fn kinds(&self) -> BTreeSet<String> {
        self.entries.iter().map(|e| e.kind.clone()).collect()
    }

    /// Apply the three-dimension filter, keeping source order.
    ///
    /// Pure: returns borrowed rows, the snapshot itself never changes.
    /// Membership semantics live in [`FilterSelection::matches`].
    pub fn filter<'a>(&'a self, selection: &FilterSelection) -> Vec<&'a LedgerEntry> {
        self.entries
            .iter()
            .filter(|e| selection.matches(e))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, KIND_COST, KIND_REVENUE};
    use chrono::NaiveDate;

    fn sample() -> Ledger {
        Ledger::new(vec![
            LedgerEntry::new(
                NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                "Alpha",
                KIND_COST,
                Money::from_cents(10_000),
            ),
            LedgerEntry::new(
                NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
                "Alpha",
                KIND_REVENUE,
                Money::from_cents(30_000),
            ),
            LedgerEntry::new(
                NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(),
                "Beta",
                KIND_REVENUE,
                Money::from_cents(5_000),
            ),
        ])
    }

    #[test]
    fn test_distinct_values() {
        let ledger = sample();
        let months: Vec<String> = ledger.months().iter().map(|m| m.to_string()).collect();
        assert_eq!(months, vec!["2024-01", "2024-02"]);

        let projects_set = ledger.projects();
        let projects: Vec<&str> = projects_set.iter().map(String::as_str).collect();
        assert_eq!(projects, vec!["Alpha", "Beta"]);

        let kinds_set = ledger.kinds();
        let kinds: Vec<&str> = kinds_set.iter().map(String::as_str).collect();
        assert_eq!(kinds, vec![KIND_COST, KIND_REVENUE]);
    }

    #[test]
    fn test_filter_preserves_source_order() {
        let ledger = sample();
        let selection = FilterSelection::all(&ledger);

        let filtered = ledger.filter(&selection);
        assert_eq!(filtered.len(), 3);
        // Same rows, same order as loaded
        for (kept, original) in filtered.iter().zip(ledger.entries()) {
            assert_eq!(*kept, original);
        }
    }

    #[test]
    fn test_filter_by_month() {
        let ledger = sample();
        let selection = FilterSelection {
            months: [Month::new(2024, 2).unwrap()].into(),
            ..Default::default()
        };

        let filtered = ledger.filter(&selection);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].project, "Beta");
    }

    #[test]
    fn test_filter_empty_months_excludes_all() {
        let ledger = sample();
        let selection = FilterSelection::default();
        assert!(ledger.filter(&selection).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let ledger = sample();
        let selection = FilterSelection {
            months: ledger.months(),
            projects: ["Alpha".to_string()].into(),
            ..Default::default()
        };

        let once: Vec<LedgerEntry> = ledger
            .filter(&selection)
            .into_iter()
            .cloned()
            .collect();
        let refiltered = Ledger::new(once.clone());
        let twice: Vec<LedgerEntry> = refiltered
            .filter(&selection)
            .into_iter()
            .cloned()
            .collect();

        assert_eq!(once, twice);
    }
}
