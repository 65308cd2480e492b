use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::audit::AuditLogger;
use budget_tracker::cli::{
    handle_expense_command, handle_history, handle_income_command, handle_limit,
    handle_reconcile, handle_reset, handle_status, ExpenseCommands, IncomeCommands,
};
use budget_tracker::config::{paths::TrackerPaths, settings::Settings};
use budget_tracker::services::BudgetTracker;
use budget_tracker::storage::open_file_store;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Track income and expenses against a budget limit",
    long_about = "Records income and expense entries, keeps a running total and \
                  shows how much of the budget limit remains. State is saved \
                  after every change."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the budget overview (default)
    Status,

    /// Income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Set the budget limit
    Limit {
        /// New limit (e.g., "5000" or "5000.00")
        amount: String,
    },

    /// Clear all entries and the running total (the limit is kept)
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Recompute the stored total from the entries
    Reconcile,

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config {
        /// Write the effective settings to the config file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_default(&paths)?;
    let audit_log = AuditLogger::new(paths.audit_log());

    match cli.command {
        Some(Commands::Config { save }) => {
            if save {
                settings.save(&paths)?;
            }

            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!(
                "  Default budget limit: {}",
                settings.format_money(settings.default_budget_limit)
            );
            println!("  Remaining basis:      {}", settings.remaining_basis);
            println!("  Audit enabled:        {}", settings.audit_enabled);
            if save {
                println!();
                println!("Saved settings to {}", paths.settings_file().display());
            }
            return Ok(());
        }
        Some(Commands::History { count }) => {
            handle_history(&audit_log, count)?;
            return Ok(());
        }
        _ => {}
    }

    let store = open_file_store(&paths)?;
    let mut tracker = BudgetTracker::initialize(store, &settings)?;
    if settings.audit_enabled {
        tracker = tracker.with_audit(audit_log);
    }

    match cli.command {
        None | Some(Commands::Status) => handle_status(&tracker, &settings),
        Some(Commands::Income(cmd)) => handle_income_command(&mut tracker, &settings, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&mut tracker, &settings, cmd)?,
        Some(Commands::Limit { amount }) => handle_limit(&mut tracker, &settings, &amount)?,
        Some(Commands::Reset { yes }) => handle_reset(&mut tracker, &settings, yes)?,
        Some(Commands::Reconcile) => handle_reconcile(&mut tracker, &settings)?,
        Some(Commands::History { .. }) | Some(Commands::Config { .. }) => {}
    }

    Ok(())
}
