//! Service layer
//!
//! Business logic on top of the storage layer: keeps derived totals in step
//! with the entry lists and records every change.

pub mod tracker;

pub use tracker::{BudgetSummary, BudgetTracker};
