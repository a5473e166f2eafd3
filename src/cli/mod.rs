//! CLI commands for ledgerboard
//!
//! The three filter dimensions surface as repeatable flags; flags left off
//! mean "all values selected", matching the dashboard's default control
//! state.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::{LedgerboardPaths, Settings};
use crate::display::render_dashboard;
use crate::error::{LedgerboardError, LedgerboardResult};
use crate::export::{export_dashboard_csv_files, export_dashboard_json};
use crate::loader::{load_ledger_with_format, LedgerFormat};
use crate::models::{FilterSelection, Ledger, Month};
use crate::reports::Dashboard;

/// Where and how to read the ledger file
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// Path to the ledger CSV (defaults to the configured file)
    pub file: Option<PathBuf>,

    /// Field delimiter of the ledger export
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Date format of the date column (strftime)
    #[arg(long)]
    pub date_format: Option<String>,
}

/// The three multi-select filter dimensions
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Months to include (YYYY-MM, repeatable)
    #[arg(short, long)]
    pub month: Vec<String>,

    /// Projects to include (repeatable)
    #[arg(short, long)]
    pub project: Vec<String>,

    /// Expense types to include (repeatable)
    #[arg(short, long)]
    pub kind: Vec<String>,
}

/// Export output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// One CSV file per view, written into the output directory
    Csv,
    /// The full dashboard payload as one JSON file
    Json,
}

/// Resolve the ledger format from settings plus command-line overrides
fn resolve_format(settings: &Settings, input: &InputArgs) -> LedgerboardResult<LedgerFormat> {
    let delimiter = input.delimiter.unwrap_or(settings.delimiter);
    if !delimiter.is_ascii() {
        return Err(LedgerboardError::Validation(format!(
            "delimiter '{}' is not an ASCII character",
            delimiter
        )));
    }

    let mut format = LedgerFormat::default().with_delimiter(delimiter as u8);
    let date_format = input
        .date_format
        .as_deref()
        .unwrap_or(&settings.date_format);
    format = format.with_date_format(date_format);
    Ok(format)
}

/// Load the ledger named on the command line or in settings
fn load_input(settings: &Settings, input: &InputArgs) -> LedgerboardResult<Ledger> {
    let path = input.file.clone().unwrap_or_else(|| settings.ledger_file.clone());
    let format = resolve_format(settings, input)?;
    load_ledger_with_format(&path, &format)
}

/// Build the active selection: absent flags keep the all-selected default
fn build_selection(ledger: &Ledger, filters: &FilterArgs) -> LedgerboardResult<FilterSelection> {
    let mut selection = FilterSelection::all(ledger);

    if !filters.month.is_empty() {
        selection.months = filters
            .month
            .iter()
            .map(|m| {
                Month::parse(m).map_err(|e| {
                    LedgerboardError::Validation(format!(
                        "invalid month '{}': {}. Use YYYY-MM (e.g., 2024-01)",
                        m, e
                    ))
                })
            })
            .collect::<LedgerboardResult<_>>()?;
    }
    if !filters.project.is_empty() {
        selection.projects = filters.project.iter().cloned().collect();
    }
    if !filters.kind.is_empty() {
        selection.kinds = filters.kind.iter().cloned().collect();
    }

    Ok(selection)
}

/// Handle the `show` command: render every view to the terminal
pub fn handle_show_command(
    settings: &Settings,
    input: &InputArgs,
    filters: &FilterArgs,
) -> LedgerboardResult<()> {
    let ledger = load_input(settings, input)?;
    let selection = build_selection(&ledger, filters)?;
    let dashboard = Dashboard::generate(&ledger, &selection);

    print!("{}", render_dashboard(&dashboard, &settings.currency_symbol));
    Ok(())
}

/// Handle the `export` command: write the views as CSV files or JSON
pub fn handle_export_command(
    settings: &Settings,
    input: &InputArgs,
    filters: &FilterArgs,
    format: ExportFormat,
    output: &PathBuf,
) -> LedgerboardResult<()> {
    let ledger = load_input(settings, input)?;
    let selection = build_selection(&ledger, filters)?;
    let dashboard = Dashboard::generate(&ledger, &selection);

    match format {
        ExportFormat::Csv => {
            export_dashboard_csv_files(&dashboard, output)?;
            println!("Exported CSV views to {}", output.display());
        }
        ExportFormat::Json => {
            let file = File::create(output).map_err(|e| {
                LedgerboardError::Export(format!("cannot create {}: {}", output.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export_dashboard_json(&dashboard, &mut writer)?;
            println!("Exported dashboard JSON to {}", output.display());
        }
    }
    Ok(())
}

/// Handle the `config` command: show current paths and settings
pub fn handle_config_command(
    paths: &LedgerboardPaths,
    settings: &Settings,
) -> LedgerboardResult<()> {
    println!("Config file:     {}", paths.settings_file().display());
    println!("Ledger file:     {}", settings.ledger_file.display());
    println!("Currency symbol: {}", settings.currency_symbol);
    println!("Date format:     {}", settings.date_format);
    println!("Delimiter:       {}", settings.delimiter);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LedgerEntry, Money, KIND_COST, KIND_REVENUE};
    use chrono::NaiveDate;

    fn sample_ledger() -> Ledger {
        Ledger::new(vec![
            LedgerEntry::new(
                NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                "Alpha",
                KIND_COST,
                Money::from_cents(10_000),
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
    fn test_build_selection_defaults_to_all() {
        let ledger = sample_ledger();
        let selection = build_selection(&ledger, &FilterArgs::default()).unwrap();
        assert_eq!(selection, FilterSelection::all(&ledger));
    }

    #[test]
    fn test_build_selection_with_flags() {
        let ledger = sample_ledger();
        let filters = FilterArgs {
            month: vec!["2024-01".to_string()],
            project: vec!["Alpha".to_string()],
            kind: vec![],
        };

        let selection = build_selection(&ledger, &filters).unwrap();
        assert_eq!(selection.months.len(), 1);
        assert_eq!(selection.projects.len(), 1);
        // Kind flag absent: keeps the ledger-wide default
        assert_eq!(selection.kinds.len(), 2);
    }

    #[test]
    fn test_build_selection_rejects_bad_month() {
        let ledger = sample_ledger();
        let filters = FilterArgs {
            month: vec!["january".to_string()],
            ..Default::default()
        };

        let err = build_selection(&ledger, &filters).unwrap_err();
        assert!(matches!(err, LedgerboardError::Validation(_)));
    }

    #[test]
    fn test_resolve_format_rejects_non_ascii_delimiter() {
        let input = InputArgs {
            delimiter: Some('§'),
            ..Default::default()
        };
        assert!(resolve_format(&Settings::default(), &input).is_err());
    }
}
