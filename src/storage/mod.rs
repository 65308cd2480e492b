//! Storage layer
//!
//! Slot stores hold raw text per named slot; `BudgetStore` layers the budget
//! encoding on top of any of them.

pub mod adapter;
pub mod file_io;
pub mod slots;

pub use adapter::BudgetStore;
pub use file_io::{read_text, write_text_atomic};
pub use slots::{FileSlotStore, MemorySlotStore, Slot, SlotStore};

use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;

/// Open the on-disk store under the configured data directory
pub fn open_file_store(paths: &TrackerPaths) -> Result<BudgetStore<FileSlotStore>, TrackerError> {
    paths.ensure_directories()?;
    Ok(BudgetStore::new(FileSlotStore::new(paths.data_dir())))
}
