//! Budget store adapter
//!
//! Maps the budget's logical values onto slots. Scalars are stored as their
//! plain decimal text, entry lists as JSON arrays of `{id, name, amount}`.
//! An absent slot reads back as its default; a slot whose content cannot be
//! decoded is reported as `TrackerError::Corrupt` and never treated as empty.

use crate::error::TrackerError;
use crate::models::{Expense, ExpenseId, Income, IncomeId, LedgerEntry, Money};

use super::slots::{Slot, SlotStore};

/// Typed access to the persisted budget
#[derive(Debug)]
pub struct BudgetStore<S> {
    slots: S,
}

impl<S: SlotStore> BudgetStore<S> {
    pub fn new(slots: S) -> Self {
        Self { slots }
    }

    /// The underlying slot store
    pub fn slots(&self) -> &S {
        &self.slots
    }

    pub fn get_budget_limit(&self, default: Money) -> Result<Money, TrackerError> {
        self.read_money(Slot::BudgetLimit, default)
    }

    pub fn set_budget_limit(&self, value: Money) -> Result<(), TrackerError> {
        self.write_money(Slot::BudgetLimit, value)
    }

    pub fn get_total_amount(&self, default: Money) -> Result<Money, TrackerError> {
        self.read_money(Slot::TotalAmount, default)
    }

    pub fn update_total_amount(&self, value: Money) -> Result<(), TrackerError> {
        self.write_money(Slot::TotalAmount, value)
    }

    pub fn get_income_list(&self) -> Result<Vec<Income>, TrackerError> {
        self.read_list(Slot::IncomeList)
    }

    /// Append an income to the persisted list
    pub fn save_income(&self, income: &Income) -> Result<(), TrackerError> {
        self.append(Slot::IncomeList, income)
    }

    /// Remove every persisted income with the given ID
    pub fn remove_income(&self, id: IncomeId) -> Result<(), TrackerError> {
        self.remove_matching::<Income>(Slot::IncomeList, id)
    }

    pub fn get_expense_list(&self) -> Result<Vec<Expense>, TrackerError> {
        self.read_list(Slot::ExpenseList)
    }

    /// Append an expense to the persisted list
    pub fn save_expense(&self, expense: &Expense) -> Result<(), TrackerError> {
        self.append(Slot::ExpenseList, expense)
    }

    /// Remove every persisted expense with the given ID
    pub fn remove_expense(&self, id: ExpenseId) -> Result<(), TrackerError> {
        self.remove_matching::<Expense>(Slot::ExpenseList, id)
    }

    /// Drop the total and both lists; the budget limit is kept
    pub fn clear_all(&self) -> Result<(), TrackerError> {
        self.slots.remove(Slot::TotalAmount)?;
        self.slots.remove(Slot::IncomeList)?;
        self.slots.remove(Slot::ExpenseList)?;
        Ok(())
    }

    fn read_money(&self, slot: Slot, default: Money) -> Result<Money, TrackerError> {
        match self.slots.read(slot)? {
            None => Ok(default),
            Some(text) => Money::parse(&text).map_err(|e| TrackerError::Corrupt {
                slot: slot.key(),
                reason: e.to_string(),
            }),
        }
    }

    fn write_money(&self, slot: Slot, value: Money) -> Result<(), TrackerError> {
        self.slots.write(slot, &value.to_plain_string())
    }

    fn read_list<E: LedgerEntry>(&self, slot: Slot) -> Result<Vec<E>, TrackerError> {
        match self.slots.read(slot)? {
            None => Ok(Vec::new()),
            Some(text) => serde_json::from_str(&text).map_err(|e| TrackerError::Corrupt {
                slot: slot.key(),
                reason: e.to_string(),
            }),
        }
    }

    fn write_list<E: LedgerEntry>(&self, slot: Slot, entries: &[E]) -> Result<(), TrackerError> {
        let text = serde_json::to_string(entries)?;
        self.slots.write(slot, &text)
    }

    // Read-modify-write; not an atomic append
    fn append<E: LedgerEntry>(&self, slot: Slot, entry: &E) -> Result<(), TrackerError> {
        let mut entries: Vec<E> = self.read_list(slot)?;
        entries.push(entry.clone());
        self.write_list(slot, &entries)
    }

    fn remove_matching<E: LedgerEntry>(&self, slot: Slot, id: E::Id) -> Result<(), TrackerError> {
        let Some(text) = self.slots.read(slot)? else {
            return Ok(());
        };
        let mut entries: Vec<E> =
            serde_json::from_str(&text).map_err(|e| TrackerError::Corrupt {
                slot: slot.key(),
                reason: e.to_string(),
            })?;
        entries.retain(|entry| entry.id() != id);
        self.write_list(slot, &entries)
    }
}
