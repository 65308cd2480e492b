//! Expense CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_entry_list, format_summary};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, LedgerEntry};
use crate::services::BudgetTracker;
use crate::storage::SlotStore;

use super::parse_amount;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Description (e.g., "Oil Change")
        name: String,
        /// Amount (e.g., "1200" or "1200.00")
        amount: String,
    },
    /// List recorded expenses
    List,
    /// Remove an expense entry
    #[command(alias = "rm")]
    Remove {
        /// Entry ID as shown by `expense list` (e.g., exp-1a2b3c4d)
        id: String,
    },
}

/// Handle an income command
pub fn handle_expense_command<S: SlotStore>(
    tracker: &mut BudgetTracker<S>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    match cmd {
        ExpenseCommands::Add { name, amount } => {
            let expense = Expense::new(name.trim(), parse_amount(&amount)?);
            expense
                .validate()
                .map_err(|e| TrackerError::Validation(e.to_string()))?;

            tracker.add_expense(expense.clone())?;

            println!(
                "Added expense '{}' ({}) as {}",
                expense.name,
                settings.format_money(expense.amount),
                expense.id
            );
            println!();
            print!("{}", format_summary(&tracker.summary(), &settings.currency_symbol));
        }

        ExpenseCommands::List => {
            print!("{}", format_entry_list(tracker.expenses(), &settings.currency_symbol));
        }

        ExpenseCommands::Remove { id } => {
            let target = tracker.find_expense_by_prefix(&id)?.id;

            if let Some(removed) = tracker.remove_expense(target)? {
                println!(
                    "Removed expense '{}' ({})",
                    removed.name,
                    settings.format_money(removed.amount)
                );
                println!();
                print!("{}", format_summary(&tracker.summary(), &settings.currency_symbol));
            }
        }
    }

    Ok(())
}
