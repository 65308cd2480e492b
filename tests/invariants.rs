//! Property tests: the running total agrees with the entry lists after any
//! sequence of additions and removals, and after a reload.

use budget_tracker::config::{paths::TrackerPaths, settings::Settings};
use budget_tracker::models::{Expense, ExpenseId, Income, IncomeId, Money};
use budget_tracker::services::BudgetTracker;
use budget_tracker::storage::{open_file_store, FileSlotStore};
use proptest::prelude::*;
use proptest::test_runner::Config;
use tempfile::TempDir;

#[derive(Debug, Clone)]
enum Op {
    AddIncome(i64),
    AddExpense(i64),
    /// Remove the existing income at this index, modulo the list length
    RemoveIncome(usize),
    RemoveExpense(usize),
    RemoveUnknownIncome,
    RemoveUnknownExpense,
}

fn amount_strategy() -> impl Strategy<Value = i64> {
    0i64..10_000_000
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => amount_strategy().prop_map(Op::AddIncome),
        3 => amount_strategy().prop_map(Op::AddExpense),
        2 => any::<usize>().prop_map(Op::RemoveIncome),
        2 => any::<usize>().prop_map(Op::RemoveExpense),
        1 => Just(Op::RemoveUnknownIncome),
        1 => Just(Op::RemoveUnknownExpense),
    ]
}

fn open(paths: &TrackerPaths) -> BudgetTracker<FileSlotStore> {
    BudgetTracker::initialize(open_file_store(paths).unwrap(), &Settings::default()).unwrap()
}

fn apply(tracker: &mut BudgetTracker<FileSlotStore>, op: &Op) -> Result<(), TestCaseError> {
    match op {
        Op::AddIncome(cents) => {
            let income = Income::new("Income", Money::from_cents(*cents));
            tracker.add_income(income.clone()).unwrap();
            prop_assert_eq!(tracker.incomes().last(), Some(&income));
        }
        Op::AddExpense(cents) => {
            let expense = Expense::new("Expense", Money::from_cents(*cents));
            tracker.add_expense(expense.clone()).unwrap();
            prop_assert_eq!(tracker.expenses().last(), Some(&expense));
        }
        Op::RemoveIncome(index) => {
            if tracker.incomes().is_empty() {
                prop_assert_eq!(tracker.remove_income(IncomeId::new()).unwrap(), None);
            } else {
                let target = tracker.incomes()[index % tracker.incomes().len()].clone();
                let count = tracker.incomes().len();
                prop_assert_eq!(tracker.remove_income(target.id).unwrap(), Some(target.clone()));
                prop_assert_eq!(tracker.incomes().len(), count - 1);
                prop_assert!(tracker.find_income(target.id).is_none());
            }
        }
        Op::RemoveExpense(index) => {
            if tracker.expenses().is_empty() {
                prop_assert_eq!(tracker.remove_expense(ExpenseId::new()).unwrap(), None);
            } else {
                let target = tracker.expenses()[index % tracker.expenses().len()].clone();
                let count = tracker.expenses().len();
                prop_assert_eq!(
                    tracker.remove_expense(target.id).unwrap(),
                    Some(target.clone())
                );
                prop_assert_eq!(tracker.expenses().len(), count - 1);
                prop_assert!(tracker.find_expense(target.id).is_none());
            }
        }
        Op::RemoveUnknownIncome => {
            let before = tracker.state().clone();
            prop_assert_eq!(tracker.remove_income(IncomeId::new()).unwrap(), None);
            prop_assert_eq!(tracker.state(), &before);
        }
        Op::RemoveUnknownExpense => {
            let before = tracker.state().clone();
            prop_assert_eq!(tracker.remove_expense(ExpenseId::new()).unwrap(), None);
            prop_assert_eq!(tracker.state(), &before);
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(Config::with_cases(64))]

    #[test]
    fn total_matches_lists_after_every_step(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut tracker = open(&paths);

        for op in &ops {
            apply(&mut tracker, op)?;
            prop_assert!(tracker.state().is_consistent(), "drift after {:?}", op);
        }

        let state_before = tracker.state().clone();
        drop(tracker);

        let reloaded = open(&paths);
        prop_assert!(reloaded.state().is_consistent());
        prop_assert_eq!(reloaded.state(), &state_before);
    }

    #[test]
    fn reset_always_leaves_an_empty_consistent_state(
        ops in prop::collection::vec(op_strategy(), 0..20),
        limit in 0i64..100_000_000,
    ) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut tracker = open(&paths);
        tracker.set_limit(Money::from_cents(limit)).unwrap();

        for op in &ops {
            apply(&mut tracker, op)?;
        }
        tracker.reset().unwrap();
        drop(tracker);

        let reloaded = open(&paths);
        prop_assert!(reloaded.total_amount().is_zero());
        prop_assert!(reloaded.incomes().is_empty());
        prop_assert!(reloaded.expenses().is_empty());
        prop_assert_eq!(reloaded.budget_limit(), Money::from_cents(limit));
    }
}
