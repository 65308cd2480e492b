//! Entry list formatting

use crate::models::{subtotal, LedgerEntry};

/// Format income or expense entries as a table with a total row
pub fn format_entry_list<E: LedgerEntry>(entries: &[E], currency_symbol: &str) -> String {
    if entries.is_empty() {
        return format!("No {} entries found.", E::KIND.to_lowercase());
    }

    let name_width = entries
        .iter()
        .map(|e| e.name().chars().count())
        .max()
        .unwrap_or(4)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:>12}\n",
        "ID",
        "Name",
        "Amount",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:->12}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for entry in entries {
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:>12}\n",
            entry.id().to_string(),
            entry.name(),
            entry.amount().format_with_symbol(currency_symbol),
            name_width = name_width,
        ));
    }

    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:->12}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:>12}\n",
        "TOTAL",
        "",
        subtotal(entries).format_with_symbol(currency_symbol),
        name_width = name_width,
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Income, Money};

    #[test]
    fn test_format_entry_list() {
        let incomes = vec![
            Income::new("PAC Freelance", Money::from_units(2500)),
            Income::new("Salary", Money::from_cents(310050)),
        ];

        let output = format_entry_list(&incomes, "$");
        assert!(output.contains("PAC Freelance"));
        assert!(output.contains("$3100.50"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("$5600.50"));
        assert!(output.contains(&incomes[0].id.to_string()));
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(
            format_entry_list::<Expense>(&[], "$"),
            "No expense entries found."
        );
    }
}
