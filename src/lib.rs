//! ledgerboard - Project-ledger reporting dashboard core
//!
//! This library loads a tabular ledger of project expenses and revenues,
//! filters it along three dimensions (month, project, expense type), and
//! computes the fixed set of aggregate views a reporting page shows:
//! monthly totals, per-project breakdowns, cash flow, and revenue totals.
//! The ledger is loaded once per session and treated as immutable; every
//! view is recomputed from scratch for each filter selection.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (entries, months, money, ledger, selection)
//! - `loader`: CSV ingestion of the ledger export
//! - `reports`: The derived dashboard views
//! - `display`: Terminal rendering of the views
//! - `export`: CSV/JSON export of the views
//! - `cli`: Command-line handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use ledgerboard::loader::load_ledger;
//! use ledgerboard::models::FilterSelection;
//! use ledgerboard::reports::Dashboard;
//!
//! let ledger = load_ledger("dados.csv".as_ref())?;
//! let dashboard = Dashboard::generate(&ledger, &FilterSelection::all(&ledger));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod loader;
pub mod models;
pub mod reports;

pub use error::{LedgerboardError, LedgerboardResult};
