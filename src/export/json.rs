//! JSON export of the dashboard payload
//!
//! Serializes the full set of derived views for downstream chart/page
//! renderers. Amounts serialize as integer centavos; months as "YYYY-MM"
//! strings.

use std::io::Write;

use crate::error::{LedgerboardError, LedgerboardResult};
use crate::reports::Dashboard;

/// Write the dashboard views as pretty-printed JSON
pub fn export_dashboard_json<W: Write>(dashboard: &Dashboard, writer: &mut W) -> LedgerboardResult<()> {
    serde_json::to_writer_pretty(&mut *writer, dashboard)
        .map_err(|e| LedgerboardError::Export(format!("failed to serialize dashboard: {}", e)))?;
    writer
        .write_all(b"\n")
        .map_err(|e| LedgerboardError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FilterSelection, Ledger, LedgerEntry, Money, KIND_COST, KIND_REVENUE};
    use chrono::NaiveDate;

    #[test]
    fn test_export_dashboard_json() {
        let ledger = Ledger::new(vec![
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
        ]);
        let dashboard = Dashboard::generate(&ledger, &FilterSelection::all(&ledger));

        let mut buffer = Vec::new();
        export_dashboard_json(&dashboard, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["revenue"]["grand_total"], 30_000);
        assert_eq!(value["monthly_totals"]["rows"][0]["month"], "2024-01");
        assert_eq!(value["monthly_totals"]["rows"][0]["total"], 20_000);
        assert_eq!(value["project_totals"]["net_result"], 20_000);
    }
}
