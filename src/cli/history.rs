//! Audit history command

use crate::audit::AuditLogger;
use crate::error::TrackerResult;

/// Print the most recent audit entries, oldest first
pub fn handle_history(logger: &AuditLogger, count: usize) -> TrackerResult<()> {
    let entries = logger.read_recent(count)?;

    if entries.is_empty() {
        println!("No history recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
