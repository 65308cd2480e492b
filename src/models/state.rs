//! In-memory budget state and the figures derived from it

use serde::{Deserialize, Serialize};

use super::entry::{subtotal, Expense, Income};
use super::money::Money;

/// Which figure "remaining budget" is measured against
///
/// `Expenses` subtracts only spending from the limit, so income does not
/// enlarge the budget. `NetTotal` subtracts the running total (income minus
/// expenses) from the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RemainingBasis {
    #[default]
    Expenses,
    NetTotal,
}

impl std::fmt::Display for RemainingBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expenses => write!(f, "limit - expenses"),
            Self::NetTotal => write!(f, "limit - total"),
        }
    }
}

/// Authoritative session state
///
/// `total_amount` is kept equal to income subtotal minus expense subtotal by
/// the tracker after every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetState {
    pub budget_limit: Money,
    pub total_amount: Money,
    pub income_list: Vec<Income>,
    pub expense_list: Vec<Expense>,
}

impl BudgetState {
    /// Empty state with the given limit
    pub fn new(budget_limit: Money) -> Self {
        Self {
            budget_limit,
            total_amount: Money::zero(),
            income_list: Vec::new(),
            expense_list: Vec::new(),
        }
    }

    pub fn income_subtotal(&self) -> Money {
        subtotal(&self.income_list)
    }

    pub fn expense_subtotal(&self) -> Money {
        subtotal(&self.expense_list)
    }

    /// Total recomputed from the lists rather than the running figure
    pub fn recomputed_total(&self) -> Money {
        self.income_subtotal() - self.expense_subtotal()
    }

    pub fn is_consistent(&self) -> bool {
        self.total_amount == self.recomputed_total()
    }

    pub fn remaining(&self, basis: RemainingBasis) -> Money {
        match basis {
            RemainingBasis::Expenses => self.budget_limit - self.expense_subtotal(),
            RemainingBasis::NetTotal => self.budget_limit - self.total_amount,
        }
    }

    /// Share of the limit reached by the running total, clamped to `[0, 1]`
    ///
    /// A non-positive limit counts as fully used once the total is positive.
    pub fn progress_fraction(&self) -> f64 {
        if !self.budget_limit.is_positive() {
            return if self.total_amount.is_positive() { 1.0 } else { 0.0 };
        }
        self.total_amount
            .ratio_of(self.budget_limit)
            .unwrap_or(0.0)
            .clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> BudgetState {
        let mut state = BudgetState::new(Money::from_units(4000));
        state
            .income_list
            .push(Income::new("PAC Freelance", Money::from_units(2500)));
        state
            .expense_list
            .push(Expense::new("Oil Change", Money::from_units(1200)));
        state.total_amount = Money::from_units(1300);
        state
    }

    #[test]
    fn test_subtotals() {
        let state = sample_state();
        assert_eq!(state.income_subtotal(), Money::from_units(2500));
        assert_eq!(state.expense_subtotal(), Money::from_units(1200));
        assert!(state.is_consistent());
    }

    #[test]
    fn test_remaining_bases_differ_once_income_exists() {
        let state = sample_state();
        assert_eq!(
            state.remaining(RemainingBasis::Expenses),
            Money::from_units(2800)
        );
        assert_eq!(
            state.remaining(RemainingBasis::NetTotal),
            Money::from_units(2700)
        );
    }

    #[test]
    fn test_remaining_bases_agree_without_income() {
        let mut state = BudgetState::new(Money::from_units(4000));
        state
            .expense_list
            .push(Expense::new("Rent", Money::from_units(1000)));
        state.total_amount = Money::from_units(-1000);

        // limit - expenses = 3000, limit - total = 5000
        assert_eq!(
            state.remaining(RemainingBasis::Expenses),
            Money::from_units(3000)
        );
        assert_eq!(
            state.remaining(RemainingBasis::NetTotal),
            Money::from_units(5000)
        );
    }

    #[test]
    fn test_progress_fraction() {
        let state = sample_state();
        assert!((state.progress_fraction() - 0.325).abs() < 1e-9);

        let mut over = state.clone();
        over.total_amount = Money::from_units(9000);
        assert_eq!(over.progress_fraction(), 1.0);

        let mut negative = state.clone();
        negative.total_amount = Money::from_units(-50);
        assert_eq!(negative.progress_fraction(), 0.0);
    }

    #[test]
    fn test_progress_fraction_with_zero_limit() {
        let mut state = BudgetState::new(Money::zero());
        assert_eq!(state.progress_fraction(), 0.0);

        state.total_amount = Money::from_units(1);
        assert_eq!(state.progress_fraction(), 1.0);
    }

    #[test]
    fn test_basis_serialization() {
        let json = serde_json::to_string(&RemainingBasis::NetTotal).unwrap();
        assert_eq!(json, "\"net_total\"");
    }
}
