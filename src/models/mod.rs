//! Core data models for ledgerboard
//!
//! The ledger row, its month bucket, money amounts, the immutable ledger
//! snapshot, and the filter selection applied to it.

pub mod entry;
pub mod ledger;
pub mod money;
pub mod month;
pub mod selection;

pub use entry::{LedgerEntry, KIND_COST, KIND_REVENUE};
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
pub use month::{Month, MonthParseError};
pub use selection::FilterSelection;
