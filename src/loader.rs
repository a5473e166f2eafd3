//! Ledger file ingestion
//!
//! Reads the CSV export of the source spreadsheet into a [`Ledger`]
//! snapshot. Columns are located by header name so column order in the
//! export does not matter. Any malformed input — missing file, missing
//! column, unparseable date or amount — aborts the load; a partially
//! loaded ledger is never returned.

use std::path::Path;

use chrono::NaiveDate;
use csv::ReaderBuilder;

use crate::error::{LedgerboardError, LedgerboardResult};
use crate::models::{Ledger, LedgerEntry, Money};

/// File-format description for a ledger export
#[derive(Debug, Clone)]
pub struct LedgerFormat {
    /// Header of the date column
    pub date_column: String,
    /// Header of the project column
    pub project_column: String,
    /// Header of the expense-type column
    pub kind_column: String,
    /// Header of the amount column
    pub amount_column: String,
    /// Date format string (strftime)
    pub date_format: String,
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for LedgerFormat {
    fn default() -> Self {
        Self {
            date_column: "Data".to_string(),
            project_column: "Projeto".to_string(),
            kind_column: "Tipo_Despesa".to_string(),
            amount_column: "Valor Total".to_string(),
            date_format: "%d/%m/%Y".to_string(),
            delimiter: b',',
        }
    }
}

impl LedgerFormat {
    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the date format
    pub fn with_date_format(mut self, format: &str) -> Self {
        self.date_format = format.to_string();
        self
    }
}

/// Load a ledger file using the default export format
pub fn load_ledger(path: &Path) -> LedgerboardResult<Ledger> {
    load_ledger_with_format(path, &LedgerFormat::default())
}

/// Load a ledger file using an explicit format description
pub fn load_ledger_with_format(path: &Path, format: &LedgerFormat) -> LedgerboardResult<Ledger> {
    if !path.exists() {
        return Err(LedgerboardError::Import(format!(
            "ledger file '{}' not found",
            path.display()
        )));
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(format.delimiter)
        .from_path(path)
        .map_err(|e| LedgerboardError::Import(format!("cannot read '{}': {}", path.display(), e)))?;

    let headers = reader
        .headers()
        .map_err(|e| LedgerboardError::Import(format!("cannot read header row: {}", e)))?
        .clone();

    let column = |name: &str| -> LedgerboardResult<usize> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| LedgerboardError::missing_column(name))
    };

    let date_idx = column(&format.date_column)?;
    let project_idx = column(&format.project_column)?;
    let kind_idx = column(&format.kind_column)?;
    let amount_idx = column(&format.amount_column)?;

    let mut entries = Vec::new();

    for (i, record) in reader.records().enumerate() {
        // Data rows are 1-indexed in messages, the header is row 0
        let row = i + 1;
        let record =
            record.map_err(|e| LedgerboardError::Import(format!("row {}: {}", row, e)))?;

        let field = |idx: usize, name: &str| -> LedgerboardResult<&str> {
            record.get(idx).map(str::trim).ok_or_else(|| {
                LedgerboardError::Import(format!("row {}: missing field '{}'", row, name))
            })
        };

        let date_str = field(date_idx, &format.date_column)?;
        let date = NaiveDate::parse_from_str(date_str, &format.date_format)
            .map_err(|e| LedgerboardError::bad_cell(row, &format.date_column, date_str, e))?;

        let amount_str = field(amount_idx, &format.amount_column)?;
        let amount = Money::parse(amount_str)
            .map_err(|e| LedgerboardError::bad_cell(row, &format.amount_column, amount_str, e))?;

        let project = field(project_idx, &format.project_column)?.to_string();
        let kind = field(kind_idx, &format.kind_column)?.to_string();

        entries.push(LedgerEntry::new(date, project, kind, amount));
    }

    Ok(Ledger::new(entries))
}
