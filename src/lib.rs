//! Budget tracker: record income and expenses against a budget limit
//!
//! The tracker keeps a running total (income minus expenses) that always
//! agrees with its entry lists, and persists every change so a later session
//! picks up where the last one stopped.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Money, entry IDs, income/expense entries, budget state
//! - `storage`: Slot stores and the typed budget store adapter
//! - `services`: The budget tracker, sole owner of session state
//! - `audit`: Append-only log of every mutation
//! - `display` / `cli`: Terminal presentation and command handlers
//!
//! # Example
//!
//! ```
//! use budget_tracker::config::Settings;
//! use budget_tracker::models::{Expense, Income, Money};
//! use budget_tracker::services::BudgetTracker;
//! use budget_tracker::storage::{BudgetStore, MemorySlotStore};
//!
//! let store = BudgetStore::new(MemorySlotStore::new());
//! let mut tracker = BudgetTracker::initialize(store, &Settings::default())?;
//!
//! tracker.add_income(Income::new("PAC Freelance", Money::from_units(2500)))?;
//! tracker.add_expense(Expense::new("Oil Change", Money::from_units(1200)))?;
//! assert_eq!(tracker.total_amount(), Money::from_units(1300));
//! # Ok::<(), budget_tracker::TrackerError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
