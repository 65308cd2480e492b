//! Income CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_entry_list, format_summary};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Income, LedgerEntry};
use crate::services::BudgetTracker;
use crate::storage::SlotStore;

use super::parse_amount;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Record income
    Add {
        /// Description (e.g., "PAC Freelance")
        name: String,
        /// Amount (e.g., "2500" or "2500.00")
        amount: String,
    },
    /// List recorded income
    List,
    /// Remove an income entry
    #[command(alias = "rm")]
    Remove {
        /// Entry ID as shown by `income list` (e.g., inc-1a2b3c4d)
        id: String,
    },
}

/// Handle an income command
pub fn handle_income_command<S: SlotStore>(
    tracker: &mut BudgetTracker<S>,
    settings: &Settings,
    cmd: IncomeCommands,
) -> TrackerResult<()> {
    match cmd {
        IncomeCommands::Add { name, amount } => {
            let income = Income::new(name.trim(), parse_amount(&amount)?);
            income
                .validate()
                .map_err(|e| TrackerError::Validation(e.to_string()))?;

            tracker.add_income(income.clone())?;

            println!(
                "Added income '{}' ({}) as {}",
                income.name,
                settings.format_money(income.amount),
                income.id
            );
            println!();
            print!("{}", format_summary(&tracker.summary(), &settings.currency_symbol));
        }

        IncomeCommands::List => {
            print!("{}", format_entry_list(tracker.incomes(), &settings.currency_symbol));
        }

        IncomeCommands::Remove { id } => {
            let target = tracker.find_income_by_prefix(&id)?.id;

            if let Some(removed) = tracker.remove_income(target)? {
                println!(
                    "Removed income '{}' ({})",
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
