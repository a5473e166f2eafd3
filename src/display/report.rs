//! Terminal rendering of the dashboard views
//!
//! Each derived view becomes a plain table; the fixed section sequence of
//! the dashboard page is reproduced top to bottom. Cost and revenue series
//! in the cash-flow section keep their fixed color convention (costs in
//! red, revenue in green).

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{LedgerEntry, KIND_COST, KIND_REVENUE};
use crate::reports::{CashFlowReport, Dashboard, MonthlyByProjectReport};

use super::currency::{format_currency, format_currency_colored};

/// Display row for the raw filtered table
#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Project")]
    project: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl From<&LedgerEntry> for EntryRow {
    fn from(entry: &LedgerEntry) -> Self {
        Self {
            date: entry.date.format("%d/%m/%Y").to_string(),
            project: entry.project.clone(),
            kind: entry.kind.clone(),
            amount: entry.amount.to_string(),
        }
    }
}

/// Render any list of view rows as a table, or a placeholder when empty
fn table_or_empty<T: Tabled>(rows: &[T]) -> String
where
    T: Clone,
{
    if rows.is_empty() {
        return "  (no rows)\n".to_string();
    }
    let mut table = Table::new(rows.to_vec());
    table.with(Style::sharp());
    let mut out = table.to_string();
    out.push('\n');
    out
}

/// Section header line
fn section(title: &str) -> String {
    format!("\n{}\n{}\n", title, "─".repeat(title.len().max(40)))
}

/// Render the monthly-by-project view with its raw row table
pub fn render_monthly_by_project(report: &MonthlyByProjectReport) -> String {
    let mut out = section("Monthly Totals by Project");
    out.push_str(&table_or_empty(&report.series));

    out.push_str("\nFiltered rows:\n");
    let rows: Vec<EntryRow> = report.entries.iter().map(EntryRow::from).collect();
    if rows.is_empty() {
        out.push_str("  (no rows)\n");
    } else {
        let mut table = Table::new(rows);
        table.with(Style::sharp());
        out.push_str(&table.to_string());
        out.push('\n');
    }
    out
}

/// Render the cash-flow view with its colored series totals
pub fn render_cash_flow(report: &CashFlowReport, symbol: &str) -> String {
    let mut out = section("Cash Flow");
    out.push_str(&table_or_empty(&report.rows));

    // Fixed color convention: cost magnitudes red, revenue green
    let cost_total: crate::models::Money = report
        .series(KIND_COST)
        .iter()
        .map(|r| r.total)
        .sum();
    let revenue_total: crate::models::Money = report
        .series(KIND_REVENUE)
        .iter()
        .map(|r| r.total)
        .sum();

    out.push_str(&format!(
        "  {}: \x1b[31m{}\x1b[0m\n",
        KIND_COST,
        format_currency(cost_total, symbol)
    ));
    out.push_str(&format!(
        "  {}: \x1b[32m{}\x1b[0m\n",
        KIND_REVENUE,
        format_currency(revenue_total, symbol)
    ));
    out
}

/// Render the full dashboard in its fixed section order
pub fn render_dashboard(dashboard: &Dashboard, symbol: &str) -> String {
    let mut out = String::new();

    out.push_str(&render_monthly_by_project(&dashboard.monthly_by_project));

    out.push_str(&section("Monthly Totals by Project (grouped)"));
    out.push_str(&table_or_empty(&dashboard.monthly_project_totals.rows));

    out.push_str(&section("Monthly Totals"));
    out.push_str(&table_or_empty(&dashboard.monthly_totals.rows));

    out.push_str(&section("Revenue by Project"));
    out.push_str(&table_or_empty(&dashboard.revenue.by_project_month));
    out.push_str("\nShare of total:\n");
    out.push_str(&table_or_empty(&dashboard.revenue.by_project));
    out.push_str(&format!(
        "  Total Revenue: {}\n",
        format_currency_colored(dashboard.revenue.grand_total, symbol)
    ));

    out.push_str(&render_cash_flow(&dashboard.cash_flow, symbol));

    out.push_str(&section("Project Totals"));
    out.push_str(&table_or_empty(&dashboard.project_totals.rows));
    out.push_str(&format!(
        "  Net Result: {}\n",
        format_currency_colored(dashboard.project_totals.net_result, symbol)
    ));

    out
}
