//! Terminal display formatting
//!
//! Formatting helpers and table renderers for the dashboard views. This is
//! the thin presentation edge; it only reads the view payloads.

pub mod currency;
pub mod report;

pub use currency::{format_currency, format_currency_colored};
pub use report::{render_cash_flow, render_dashboard, render_monthly_by_project};
