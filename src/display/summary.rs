//! Budget summary formatting

use crate::services::BudgetSummary;

const BAR_WIDTH: usize = 30;

/// Render a progress fraction as a fixed-width bar, e.g. `[#####.....]  50%`
pub fn format_progress_bar(fraction: f64) -> String {
    let fraction = fraction.clamp(0.0, 1.0);
    let filled = (fraction * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        (fraction * 100.0).round() as u32
    )
}

/// Format the budget overview shown after every change
pub fn format_summary(summary: &BudgetSummary, currency_symbol: &str) -> String {
    let money = |m: crate::models::Money| m.format_with_symbol(currency_symbol);

    let mut output = String::new();
    output.push_str("Budget Overview\n");
    output.push_str(&format!("{}\n", "=".repeat(40)));
    output.push_str(&format!("Budget Limit:   {:>14}\n", money(summary.budget_limit)));
    output.push_str(&format!(
        "Income:         {:>14}  ({} entries)\n",
        money(summary.income_subtotal),
        summary.income_count
    ));
    output.push_str(&format!(
        "Expenses:       {:>14}  ({} entries)\n",
        money(summary.expense_subtotal),
        summary.expense_count
    ));
    output.push_str(&format!("Total:          {:>14}\n", money(summary.total_amount)));
    output.push_str(&format!("{}\n", "-".repeat(40)));

    if summary.is_over_limit() {
        output.push_str(&format!(
            "Over Budget:    {:>14}  ({})\n",
            money(summary.remaining.abs()),
            summary.remaining_basis
        ));
    } else {
        output.push_str(&format!(
            "Remaining:      {:>14}  ({})\n",
            money(summary.remaining),
            summary.remaining_basis
        ));
    }

    output.push_str(&format!(
        "Progress:       {}\n",
        format_progress_bar(summary.progress_fraction)
    ));

    output
}
