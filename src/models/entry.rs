//! Income and expense entries
//!
//! Entries are immutable once created: the only lifecycle events are creation
//! and removal. The two kinds share a shape (`id`, `name`, `amount`) but keep
//! distinct ID types.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::ids::{ExpenseId, IncomeId};
use super::money::Money;

/// Validation errors for entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    EmptyName,
    NegativeAmount,
}

impl std::fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Entry name cannot be empty"),
            Self::NegativeAmount => write!(f, "Entry amount cannot be negative"),
        }
    }
}

impl std::error::Error for EntryValidationError {}

/// Shared behaviour of income and expense entries
///
/// The store and the tracker are written once against this trait and used for
/// both lists.
pub trait LedgerEntry: Clone + Serialize + DeserializeOwned {
    type Id: Copy + Eq + std::fmt::Display;

    /// Entity name used in error messages and the audit log
    const KIND: &'static str;

    fn id(&self) -> Self::Id;
    fn name(&self) -> &str;
    fn amount(&self) -> Money;

    /// Whether `query` names this entry's ID in full or short form
    fn id_matches(&self, query: &str) -> bool;

    /// Check the entry before it is handed to the tracker
    fn validate(&self) -> Result<(), EntryValidationError> {
        if self.name().trim().is_empty() {
            return Err(EntryValidationError::EmptyName);
        }
        if self.amount().is_negative() {
            return Err(EntryValidationError::NegativeAmount);
        }
        Ok(())
    }
}

/// Money coming in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Income {
    pub id: IncomeId,
    pub name: String,
    pub amount: Money,
}

impl Income {
    /// Create an income entry with a fresh ID
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            id: IncomeId::new(),
            name: name.into(),
            amount,
        }
    }
}

impl LedgerEntry for Income {
    type Id = IncomeId;
    const KIND: &'static str = "Income";

    fn id(&self) -> IncomeId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn amount(&self) -> Money {
        self.amount
    }

    fn id_matches(&self, query: &str) -> bool {
        self.id.matches(query)
    }
}

/// Money going out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub name: String,
    pub amount: Money,
}

impl Expense {
    /// Create an expense entry with a fresh ID
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
        }
    }
}

impl LedgerEntry for Expense {
    type Id = ExpenseId;
    const KIND: &'static str = "Expense";

    fn id(&self) -> ExpenseId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn amount(&self) -> Money {
        self.amount
    }

    fn id_matches(&self, query: &str) -> bool {
        self.id.matches(query)
    }
}

/// Sum of the amounts in a list of entries
pub fn subtotal<E: LedgerEntry>(entries: &[E]) -> Money {
    entries.iter().map(|e| e.amount()).sum()
}

/// Sum of entry amounts, or `None` if it would overflow
pub fn checked_subtotal<E: LedgerEntry>(entries: &[E]) -> Option<Money> {
    entries
        .iter()
        .try_fold(Money::zero(), |acc, e| acc.checked_add(e.amount()))
}
