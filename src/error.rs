//! Custom error types for ledgerboard
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledgerboard operations
#[derive(Error, Debug)]
pub enum LedgerboardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Ledger load errors (missing file, missing columns, bad cells).
    /// Fatal for the session: nothing is computed after a failed load.
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Validation errors for user-supplied values (filter selections etc.)
    #[error("Validation error: {0}")]
    Validation(String),
}

impl LedgerboardError {
    /// Create an import error for a missing required column
    pub fn missing_column(name: &str) -> Self {
        Self::Import(format!("required column '{}' not found in header", name))
    }

    /// Create an import error for an unparseable cell, pointing at the row
    pub fn bad_cell(row: usize, column: &str, value: &str, reason: impl std::fmt::Display) -> Self {
        Self::Import(format!(
            "row {}: cannot parse '{}' in column '{}': {}",
            row, value, column, reason
        ))
    }

    /// Check if this is an import (load) error
    pub fn is_import(&self) -> bool {
        matches!(self, Self::Import(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LedgerboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledgerboard operations
pub type LedgerboardResult<T> = Result<T, LedgerboardError>;
