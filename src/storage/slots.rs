//! Named persistence slots and the stores that hold them
//!
//! Budget data lives in four independent slots. A `SlotStore` only moves raw
//! text in and out of a slot; encoding is the adapter's job.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::TrackerError;

use super::file_io::{read_text, remove_file_if_exists, write_text_atomic};

/// One of the four persisted slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    BudgetLimit,
    TotalAmount,
    IncomeList,
    ExpenseList,
}

impl Slot {
    pub const ALL: [Slot; 4] = [
        Slot::BudgetLimit,
        Slot::TotalAmount,
        Slot::IncomeList,
        Slot::ExpenseList,
    ];

    /// Stable key the slot is stored under
    pub fn key(&self) -> &'static str {
        match self {
            Slot::BudgetLimit => "budgetLimit",
            Slot::TotalAmount => "totalAmount",
            Slot::IncomeList => "incomes",
            Slot::ExpenseList => "expenses",
        }
    }

    /// File name used by `FileSlotStore`
    pub fn file_name(&self) -> &'static str {
        match self {
            Slot::BudgetLimit => "budget_limit",
            Slot::TotalAmount => "total_amount",
            Slot::IncomeList => "incomes.json",
            Slot::ExpenseList => "expenses.json",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw key-value storage addressed by slot
///
/// Every write replaces the whole slot. There is no cross-slot transaction.
pub trait SlotStore {
    /// Read a slot, `None` if it has never been written or was removed
    fn read(&self, slot: Slot) -> Result<Option<String>, TrackerError>;

    /// Replace a slot's content
    fn write(&self, slot: Slot, value: &str) -> Result<(), TrackerError>;

    /// Delete a slot; deleting an absent slot succeeds
    fn remove(&self, slot: Slot) -> Result<(), TrackerError>;
}

/// Slots stored as individual files in a data directory
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn slot_path(&self, slot: Slot) -> PathBuf {
        self.dir.join(slot.file_name())
    }
}

impl SlotStore for FileSlotStore {
    fn read(&self, slot: Slot) -> Result<Option<String>, TrackerError> {
        read_text(self.slot_path(slot))
    }

    fn write(&self, slot: Slot, value: &str) -> Result<(), TrackerError> {
        write_text_atomic(self.slot_path(slot), value)
    }

    fn remove(&self, slot: Slot) -> Result<(), TrackerError> {
        remove_file_if_exists(self.slot_path(slot))
    }
}

/// Slots held in memory for the lifetime of the value
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: RefCell<HashMap<Slot, String>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots currently holding a value
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self, slot: Slot) -> Result<Option<String>, TrackerError> {
        Ok(self.slots.borrow().get(&slot).cloned())
    }

    fn write(&self, slot: Slot, value: &str) -> Result<(), TrackerError> {
        self.slots.borrow_mut().insert(slot, value.to_string());
        Ok(())
    }

    fn remove(&self, slot: Slot) -> Result<(), TrackerError> {
        self.slots.borrow_mut().remove(&slot);
        Ok(())
    }
}

impl<S: SlotStore + ?Sized> SlotStore for &S {
    fn read(&self, slot: Slot) -> Result<Option<String>, TrackerError> {
        (**self).read(slot)
    }

    fn write(&self, slot: Slot, value: &str) -> Result<(), TrackerError> {
        (**self).write(slot, value)
    }

    fn remove(&self, slot: Slot) -> Result<(), TrackerError> {
        (**self).remove(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn exercise(store: &dyn SlotStore) {
        for slot in Slot::ALL {
            assert_eq!(store.read(slot).unwrap(), None);
        }

        store.write(Slot::BudgetLimit, "4000.00").unwrap();
        store.write(Slot::IncomeList, "[]").unwrap();
        assert_eq!(
            store.read(Slot::BudgetLimit).unwrap().as_deref(),
            Some("4000.00")
        );

        store.write(Slot::BudgetLimit, "5000.00").unwrap();
        assert_eq!(
            store.read(Slot::BudgetLimit).unwrap().as_deref(),
            Some("5000.00")
        );

        store.remove(Slot::IncomeList).unwrap();
        store.remove(Slot::ExpenseList).unwrap();
        assert_eq!(store.read(Slot::IncomeList).unwrap(), None);
        assert!(store.read(Slot::BudgetLimit).unwrap().is_some());
    }

    #[test]
    fn test_memory_store() {
        let store = MemorySlotStore::new();
        exercise(&store);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_file_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSlotStore::new(temp_dir.path().join("data"));
        exercise(&store);

        assert!(store.slot_path(Slot::BudgetLimit).exists());
        assert!(!store.slot_path(Slot::IncomeList).exists());
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().to_path_buf();

        FileSlotStore::new(dir.clone())
            .write(Slot::TotalAmount, "1300.00")
            .unwrap();

        let reopened = FileSlotStore::new(dir);
        assert_eq!(
            reopened.read(Slot::TotalAmount).unwrap().as_deref(),
            Some("1300.00")
        );
    }

    #[test]
    fn test_slot_keys_are_distinct() {
        let keys: std::collections::HashSet<_> = Slot::ALL.iter().map(|s| s.key()).collect();
        let files: std::collections::HashSet<_> =
            Slot::ALL.iter().map(|s| s.file_name()).collect();
        assert_eq!(keys.len(), 4);
        assert_eq!(files.len(), 4);
    }
}
