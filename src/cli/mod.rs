//! CLI command handlers
//!
//! Bridges clap argument parsing with the tracker. Input is validated here,
//! before it reaches the tracker.

pub mod budget;
pub mod expense;
pub mod history;
pub mod income;

pub use budget::{handle_limit, handle_reconcile, handle_reset, handle_status};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use history::handle_history;
pub use income::{handle_income_command, IncomeCommands};

use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;

/// Largest amount accepted from the command line (one trillion units)
pub const MAX_AMOUNT: Money = Money::from_units(1_000_000_000_000);

/// Parse a user-supplied amount in `0..=MAX_AMOUNT`
pub(crate) fn parse_amount(input: &str) -> TrackerResult<Money> {
    let amount = Money::parse(input).map_err(|e| {
        TrackerError::Validation(format!(
            "Invalid amount: '{}'. Use format like '1200.00' or '1200'. Error: {}",
            input, e
        ))
    })?;

    if amount.is_negative() {
        return Err(TrackerError::Validation(format!(
            "Amount cannot be negative: '{}'",
            input
        )));
    }

    if amount > MAX_AMOUNT {
        return Err(TrackerError::Validation(format!(
            "Amount too large: '{}'. The maximum is {}",
            input,
            MAX_AMOUNT.to_plain_string()
        )));
    }

    Ok(amount)
}
