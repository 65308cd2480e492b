//! Display formatting for terminal output

pub mod entry;
pub mod summary;

pub use entry::format_entry_list;
pub use summary::{format_progress_bar, format_summary};
