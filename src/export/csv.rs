//! CSV export of the dashboard views
//!
//! One file per view, written into an output directory, plus per-view
//! writers usable against any `Write` sink. Amounts are exported with a dot
//! decimal point for interchange.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{LedgerboardError, LedgerboardResult};
use crate::models::{LedgerEntry, Money};
use crate::reports::{
    CashFlowReport, Dashboard, MonthProjectRow, MonthRow, ProjectShareRow, ProjectRow,
};

fn export_err(e: std::io::Error) -> LedgerboardError {
    LedgerboardError::Export(e.to_string())
}

/// Format an amount for CSV (dot decimal, two places)
fn csv_amount(amount: Money) -> String {
    format!("{:.2}", amount.cents() as f64 / 100.0)
}

/// Escape a CSV field if needed
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Write (month, project, total) rows
pub fn export_month_project_csv<W: Write>(
    rows: &[MonthProjectRow],
    writer: &mut W,
) -> LedgerboardResult<()> {
    writeln!(writer, "Month,Project,Total").map_err(export_err)?;
    for row in rows {
        writeln!(
            writer,
            "{},{},{}",
            row.month,
            escape_csv(&row.project),
            csv_amount(row.total)
        )
        .map_err(export_err)?;
    }
    Ok(())
}

/// Write (month, total) rows
pub fn export_monthly_csv<W: Write>(rows: &[MonthRow], writer: &mut W) -> LedgerboardResult<()> {
    writeln!(writer, "Month,Total").map_err(export_err)?;
    for row in rows {
        writeln!(writer, "{},{}", row.month, csv_amount(row.total)).map_err(export_err)?;
    }
    Ok(())
}

/// Write (project, revenue, share) rows with a trailing total row
pub fn export_revenue_shares_csv<W: Write>(
    rows: &[ProjectShareRow],
    grand_total: Money,
    writer: &mut W,
) -> LedgerboardResult<()> {
    writeln!(writer, "Project,Revenue,Share").map_err(export_err)?;
    for row in rows {
        writeln!(
            writer,
            "{},{},{:.2}",
            escape_csv(&row.project),
            csv_amount(row.total),
            row.share
        )
        .map_err(export_err)?;
    }
    writeln!(writer, "TOTAL,{},100.00", csv_amount(grand_total)).map_err(export_err)?;
    Ok(())
}

/// Write the cash-flow (month, type, total) rows
pub fn export_cash_flow_csv<W: Write>(
    report: &CashFlowReport,
    writer: &mut W,
) -> LedgerboardResult<()> {
    writeln!(writer, "Month,Type,Total").map_err(export_err)?;
    for row in &report.rows {
        writeln!(
            writer,
            "{},{},{}",
            row.month,
            escape_csv(&row.kind),
            csv_amount(row.total)
        )
        .map_err(export_err)?;
    }
    Ok(())
}

/// Write (project, total) rows with a trailing net-result row
pub fn export_project_totals_csv<W: Write>(
    rows: &[ProjectRow],
    net_result: Money,
    writer: &mut W,
) -> LedgerboardResult<()> {
    writeln!(writer, "Project,Total").map_err(export_err)?;
    for row in rows {
        writeln!(writer, "{},{}", escape_csv(&row.project), csv_amount(row.total))
            .map_err(export_err)?;
    }
    writeln!(writer, "NET,{}", csv_amount(net_result)).map_err(export_err)?;
    Ok(())
}

/// Write the raw filtered rows in source order
pub fn export_entries_csv<W: Write>(
    entries: &[LedgerEntry],
    writer: &mut W,
) -> LedgerboardResult<()> {
    writeln!(writer, "Date,Project,Type,Amount").map_err(export_err)?;
    for entry in entries {
        writeln!(
            writer,
            "{},{},{},{}",
            entry.date.format("%d/%m/%Y"),
            escape_csv(&entry.project),
            escape_csv(&entry.kind),
            csv_amount(entry.amount)
        )
        .map_err(export_err)?;
    }
    Ok(())
}

/// Write every dashboard view to its own CSV file in `output_dir`
pub fn export_dashboard_csv_files(dashboard: &Dashboard, output_dir: &Path) -> LedgerboardResult<()> {
    std::fs::create_dir_all(output_dir)
        .map_err(|e| LedgerboardError::Export(format!("cannot create output dir: {}", e)))?;

    let open = |name: &str| -> LedgerboardResult<BufWriter<File>> {
        let path = output_dir.join(name);
        File::create(&path)
            .map(BufWriter::new)
            .map_err(|e| LedgerboardError::Export(format!("cannot create {}: {}", path.display(), e)))
    };

    export_month_project_csv(
        &dashboard.monthly_by_project.series,
        &mut open("monthly_by_project.csv")?,
    )?;
    export_entries_csv(
        &dashboard.monthly_by_project.entries,
        &mut open("filtered_rows.csv")?,
    )?;
    export_month_project_csv(
        &dashboard.monthly_project_totals.rows,
        &mut open("monthly_project_totals.csv")?,
    )?;
    export_monthly_csv(&dashboard.monthly_totals.rows, &mut open("monthly_totals.csv")?)?;
    export_month_project_csv(
        &dashboard.revenue.by_project_month,
        &mut open("revenue_by_project_month.csv")?,
    )?;
    export_revenue_shares_csv(
        &dashboard.revenue.by_project,
        dashboard.revenue.grand_total,
        &mut open("revenue_by_project.csv")?,
    )?;
    export_cash_flow_csv(&dashboard.cash_flow, &mut open("cash_flow.csv")?)?;
    export_project_totals_csv(
        &dashboard.project_totals.rows,
        dashboard.project_totals.net_result,
        &mut open("project_totals.csv")?,
    )?;

    Ok(())
}
