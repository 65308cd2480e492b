//! Budget tracker service
//!
//! `BudgetTracker` owns the session's `BudgetState` and is the only thing that
//! mutates it. Each mutation updates memory first, then persists through the
//! store, then records an audit entry. Persisting the total and the entry
//! list are two separate slot writes, so an interruption between them can
//! leave the stored total out of step with the stored lists;
//! `reconcile_total` repairs that.

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::settings::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    checked_subtotal, BudgetState, Expense, ExpenseId, Income, IncomeId, LedgerEntry, Money,
    RemainingBasis,
};
use crate::storage::{BudgetStore, SlotStore};

/// Snapshot of every derived figure, for presentation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub budget_limit: Money,
    pub total_amount: Money,
    pub income_subtotal: Money,
    pub expense_subtotal: Money,
    pub remaining: Money,
    pub remaining_basis: RemainingBasis,
    pub progress_fraction: f64,
    pub income_count: usize,
    pub expense_count: usize,
}

impl BudgetSummary {
    pub fn is_over_limit(&self) -> bool {
        self.remaining.is_negative()
    }
}

pub struct BudgetTracker<S> {
    state: BudgetState,
    store: BudgetStore<S>,
    remaining_basis: RemainingBasis,
    audit: Option<AuditLogger>,
}

impl<S: SlotStore> BudgetTracker<S> {
    /// Hydrate a session from the store, using defaults for absent slots
    pub fn initialize(store: BudgetStore<S>, settings: &Settings) -> TrackerResult<Self> {
        let state = BudgetState {
            budget_limit: store.get_budget_limit(settings.default_budget_limit)?,
            total_amount: store.get_total_amount(Money::zero())?,
            income_list: store.get_income_list()?,
            expense_list: store.get_expense_list()?,
        };

        Ok(Self {
            state,
            store,
            remaining_basis: settings.remaining_basis,
            audit: None,
        })
    }

    /// Record every mutation in the given audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Append an income and credit the running total
    ///
    /// Fails with a validation error, leaving everything untouched, if the
    /// total or the income subtotal would overflow.
    pub fn add_income(&mut self, income: Income) -> TrackerResult<()> {
        let total = checked_subtotal(&self.state.income_list)
            .and_then(|sum| sum.checked_add(income.amount))
            .and_then(|_| self.state.total_amount.checked_add(income.amount))
            .ok_or_else(|| overflow_error(&income))?;

        self.state.total_amount = total;
        self.state.income_list.push(income.clone());

        self.store.update_total_amount(self.state.total_amount)?;
        self.store.save_income(&income)?;

        self.audit_create(EntityType::Income, &income)
    }

    /// Append an expense and debit the running total
    ///
    /// Fails with a validation error, leaving everything untouched, if the
    /// total or the expense subtotal would overflow.
    pub fn add_expense(&mut self, expense: Expense) -> TrackerResult<()> {
        let total = checked_subtotal(&self.state.expense_list)
            .and_then(|sum| sum.checked_add(expense.amount))
            .and_then(|_| self.state.total_amount.checked_sub(expense.amount))
            .ok_or_else(|| overflow_error(&expense))?;

        self.state.total_amount = total;
        self.state.expense_list.push(expense.clone());

        self.store.update_total_amount(self.state.total_amount)?;
        self.store.save_expense(&expense)?;

        self.audit_create(EntityType::Expense, &expense)
    }

    /// Remove an income by ID
    ///
    /// Returns the removed entry, or `None` without touching anything if no
    /// income has that ID.
    pub fn remove_income(&mut self, id: IncomeId) -> TrackerResult<Option<Income>> {
        let Some(index) = self.state.income_list.iter().position(|i| i.id == id) else {
            return Ok(None);
        };
        let target = &self.state.income_list[index];
        let total = self
            .state
            .total_amount
            .checked_sub(target.amount)
            .ok_or_else(|| overflow_error(target))?;

        let removed = self.state.income_list.remove(index);
        self.state.total_amount = total;

        self.store.update_total_amount(self.state.total_amount)?;
        self.store.remove_income(id)?;

        self.audit_delete(EntityType::Income, &removed)?;
        Ok(Some(removed))
    }

    /// Remove an expense by ID
    ///
    /// Returns the removed entry, or `None` without touching anything if no
    /// expense has that ID.
    pub fn remove_expense(&mut self, id: ExpenseId) -> TrackerResult<Option<Expense>> {
        let Some(index) = self.state.expense_list.iter().position(|e| e.id == id) else {
            return Ok(None);
        };
        let target = &self.state.expense_list[index];
        let total = self
            .state
            .total_amount
            .checked_add(target.amount)
            .ok_or_else(|| overflow_error(target))?;

        let removed = self.state.expense_list.remove(index);
        self.state.total_amount = total;

        self.store.update_total_amount(self.state.total_amount)?;
        self.store.remove_expense(id)?;

        self.audit_delete(EntityType::Expense, &removed)?;
        Ok(Some(removed))
    }

    /// Clear the total and both lists; the budget limit survives
    pub fn reset(&mut self) -> TrackerResult<()> {
        let cleared = ResetSnapshot {
            total_amount: self.state.total_amount,
            incomes: std::mem::take(&mut self.state.income_list),
            expenses: std::mem::take(&mut self.state.expense_list),
        };
        self.state.total_amount = Money::zero();

        self.store.clear_all()?;

        if let Some(logger) = &self.audit {
            let summary = format!(
                "cleared {} income(s), {} expense(s), total {}",
                cleared.incomes.len(),
                cleared.expenses.len(),
                cleared.total_amount
            );
            logger.log(&AuditEntry::reset(&cleared, Some(summary)))?;
        }
        Ok(())
    }

    /// Replace the budget limit; totals and entries are untouched
    pub fn set_limit(&mut self, value: Money) -> TrackerResult<()> {
        let before = self.state.budget_limit;
        self.state.budget_limit = value;

        self.store.set_budget_limit(value)?;

        if let Some(logger) = &self.audit {
            logger.log(&AuditEntry::update(
                EntityType::BudgetLimit,
                "budget_limit",
                None,
                &before,
                &value,
                Some(format!("{} -> {}", before, value)),
            ))?;
        }
        Ok(())
    }

    /// Rewrite the running total from the entry lists
    ///
    /// Returns the previous total when it had drifted, `None` if it was
    /// already consistent.
    pub fn reconcile_total(&mut self) -> TrackerResult<Option<Money>> {
        let expected = self.state.recomputed_total();
        if expected == self.state.total_amount {
            return Ok(None);
        }

        let before = self.state.total_amount;
        self.state.total_amount = expected;
        self.store.update_total_amount(expected)?;

        if let Some(logger) = &self.audit {
            logger.log(&AuditEntry::update(
                EntityType::Budget,
                "total_amount",
                None,
                &before,
                &expected,
                Some(format!("reconciled {} -> {}", before, expected)),
            ))?;
        }
        Ok(Some(before))
    }

    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    pub fn budget_limit(&self) -> Money {
        self.state.budget_limit
    }

    pub fn total_amount(&self) -> Money {
        self.state.total_amount
    }

    pub fn incomes(&self) -> &[Income] {
        &self.state.income_list
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.state.expense_list
    }

    pub fn find_income(&self, id: IncomeId) -> Option<&Income> {
        self.state.income_list.iter().find(|i| i.id == id)
    }

    pub fn find_expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.state.expense_list.iter().find(|e| e.id == id)
    }

    /// Resolve an income from a full or short ID such as `inc-1a2b3c4d`
    pub fn find_income_by_prefix(&self, query: &str) -> TrackerResult<&Income> {
        find_unique(&self.state.income_list, query)
    }

    /// Resolve an expense from a full or short ID such as `exp-1a2b3c4d`
    pub fn find_expense_by_prefix(&self, query: &str) -> TrackerResult<&Expense> {
        find_unique(&self.state.expense_list, query)
    }

    pub fn income_subtotal(&self) -> Money {
        self.state.income_subtotal()
    }

    pub fn expense_subtotal(&self) -> Money {
        self.state.expense_subtotal()
    }

    pub fn remaining_basis(&self) -> RemainingBasis {
        self.remaining_basis
    }

    /// Remaining budget under the configured basis
    pub fn remaining(&self) -> Money {
        self.state.remaining(self.remaining_basis)
    }

    /// Remaining budget under an explicit basis
    pub fn remaining_with(&self, basis: RemainingBasis) -> Money {
        self.state.remaining(basis)
    }

    pub fn progress_fraction(&self) -> f64 {
        self.state.progress_fraction()
    }

    pub fn is_over_limit(&self) -> bool {
        self.remaining().is_negative()
    }

    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary {
            budget_limit: self.state.budget_limit,
            total_amount: self.state.total_amount,
            income_subtotal: self.income_subtotal(),
            expense_subtotal: self.expense_subtotal(),
            remaining: self.remaining(),
            remaining_basis: self.remaining_basis,
            progress_fraction: self.progress_fraction(),
            income_count: self.state.income_list.len(),
            expense_count: self.state.expense_list.len(),
        }
    }

    pub fn store(&self) -> &BudgetStore<S> {
        &self.store
    }

    /// End the session, handing back the store
    pub fn into_store(self) -> BudgetStore<S> {
        self.store
    }

    fn audit_create<E: LedgerEntry>(&self, entity_type: EntityType, entry: &E) -> TrackerResult<()> {
        if let Some(logger) = &self.audit {
            logger.log(&AuditEntry::create(
                entity_type,
                entry.id().to_string(),
                Some(entry.name().to_string()),
                entry,
            ))?;
        }
        Ok(())
    }

    fn audit_delete<E: LedgerEntry>(&self, entity_type: EntityType, entry: &E) -> TrackerResult<()> {
        if let Some(logger) = &self.audit {
            logger.log(&AuditEntry::delete(
                entity_type,
                entry.id().to_string(),
                Some(entry.name().to_string()),
                entry,
            ))?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct ResetSnapshot {
    total_amount: Money,
    incomes: Vec<Income>,
    expenses: Vec<Expense>,
}

fn overflow_error<E: LedgerEntry>(entry: &E) -> TrackerError {
    TrackerError::Validation(format!(
        "{} '{}' ({}) would overflow the running total",
        E::KIND,
        entry.name(),
        entry.amount()
    ))
}

fn find_unique<'a, E: LedgerEntry>(entries: &'a [E], query: &str) -> TrackerResult<&'a E> {
    let mut matches = entries.iter().filter(|e| e.id_matches(query));

    let found = matches.next().ok_or_else(|| TrackerError::NotFound {
        entity_type: E::KIND,
        identifier: query.to_string(),
    })?;

    if matches.next().is_some() {
        return Err(TrackerError::Validation(format!(
            "'{}' matches more than one {} entry; use a longer ID",
            query,
            E::KIND.to_lowercase()
        )));
    }

    Ok(found)
}
