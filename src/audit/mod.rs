//! Audit logging
//!
//! Every mutation of the budget is recorded with before/after values in an
//! append-only, line-delimited JSON log.
//!
//! - `AuditEntry`: a single record with timestamp, operation and entity info.
//! - `AuditLogger`: appends entries to the log file and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::create(
//!     EntityType::Income,
//!     income.id.to_string(),
//!     Some(income.name.clone()),
//!     &income,
//! );
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
