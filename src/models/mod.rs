//! Core data models
//!
//! Money amounts, typed entry IDs, the income/expense entries themselves and
//! the in-memory budget state.

pub mod entry;
pub mod ids;
pub mod money;
pub mod state;

pub use entry::{checked_subtotal, subtotal, EntryValidationError, Expense, Income, LedgerEntry};
pub use ids::{ExpenseId, IncomeId};
pub use money::{Money, MoneyParseError};
pub use state::{BudgetState, RemainingBasis};
