//! Currency text formatting
//!
//! The dashboard shows amounts in the source ledger's convention: currency
//! symbol, dot-grouped thousands, comma decimals ("R$ 1.234,56"). Rounding
//! to two decimal places happens only here; the underlying sums stay exact.

use crate::models::Money;

/// Format an amount with a currency symbol ("R$ 1.234,56")
pub fn format_currency(amount: Money, symbol: &str) -> String {
    if amount.is_negative() {
        format!("-{} {}", symbol, amount.abs())
    } else {
        format!("{} {}", symbol, amount)
    }
}

/// Format an amount with color hints for terminal display
pub fn format_currency_colored(amount: Money, symbol: &str) -> String {
    let text = format_currency(amount, symbol);
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", text) // Red for negative
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", text) // Green for positive
    } else {
        text
    }
}
