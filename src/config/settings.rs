//! User settings for ledgerboard
//!
//! Manages session preferences: where the ledger export lives and how its
//! cells and the rendered amounts are formatted.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::LedgerboardPaths;
use crate::error::LedgerboardError;

/// User settings for ledgerboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default ledger file loaded when no path is given on the command line
    #[serde(default = "default_ledger_file")]
    pub ledger_file: PathBuf,

    /// Currency symbol for rendered amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format of the ledger's date column (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Field delimiter of the ledger export
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

fn default_schema_version() -> u32 {
    1
}

fn default_ledger_file() -> PathBuf {
    PathBuf::from("dados.csv")
}

fn default_currency() -> String {
    "R$".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_delimiter() -> char {
    ','
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            ledger_file: default_ledger_file(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            delimiter: default_delimiter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &LedgerboardPaths) -> Result<Self, LedgerboardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerboardError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerboardError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerboardPaths) -> Result<(), LedgerboardError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerboardError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| LedgerboardError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
