//! Export of the derived views
//!
//! CSV and JSON serialization of the dashboard payload for downstream
//! consumers.

pub mod csv;
pub mod json;

pub use csv::export_dashboard_csv_files;
pub use json::export_dashboard_json;
