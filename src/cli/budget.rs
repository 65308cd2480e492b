//! Budget-level CLI commands: overview, limit, reset and reconcile

use std::io::{self, BufRead, Write};

use crate::config::settings::Settings;
use crate::display::format_summary;
use crate::error::TrackerResult;
use crate::services::BudgetTracker;
use crate::storage::SlotStore;

use super::parse_amount;

/// Print the budget overview, warning if the stored total has drifted
pub fn handle_status<S: SlotStore>(tracker: &BudgetTracker<S>, settings: &Settings) {
    print!("{}", format_summary(&tracker.summary(), &settings.currency_symbol));

    if !tracker.state().is_consistent() {
        println!();
        println!(
            "Warning: stored total {} does not match entries ({}).",
            settings.format_money(tracker.total_amount()),
            settings.format_money(tracker.state().recomputed_total())
        );
        println!("Run 'budget reconcile' to repair it.");
    }
}

pub fn handle_limit<S: SlotStore>(
    tracker: &mut BudgetTracker<S>,
    settings: &Settings,
    amount: &str,
) -> TrackerResult<()> {
    let value = parse_amount(amount)?;
    let before = tracker.budget_limit();

    tracker.set_limit(value)?;

    println!(
        "Budget limit: {} -> {}",
        settings.format_money(before),
        settings.format_money(value)
    );
    println!();
    print!("{}", format_summary(&tracker.summary(), &settings.currency_symbol));
    Ok(())
}

/// Clear all entries after confirmation; the limit is kept
pub fn handle_reset<S: SlotStore>(
    tracker: &mut BudgetTracker<S>,
    settings: &Settings,
    skip_confirm: bool,
) -> TrackerResult<()> {
    if !skip_confirm && !confirm("Reset all income and expense entries?")? {
        println!("Reset cancelled.");
        return Ok(());
    }

    tracker.reset()?;

    println!(
        "All entries cleared. Budget limit kept at {}.",
        settings.format_money(tracker.budget_limit())
    );
    Ok(())
}

pub fn handle_reconcile<S: SlotStore>(
    tracker: &mut BudgetTracker<S>,
    settings: &Settings,
) -> TrackerResult<()> {
    match tracker.reconcile_total()? {
        Some(before) => println!(
            "Total repaired: {} -> {}",
            settings.format_money(before),
            settings.format_money(tracker.total_amount())
        ),
        None => println!("Total already matches entries."),
    }
    Ok(())
}

fn confirm(prompt: &str) -> TrackerResult<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
