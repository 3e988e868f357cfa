//! The finance state store
//!
//! [`FinanceStore`] is the single authoritative holder of transactions,
//! saving goals, budgets and preferences, and the only place they are
//! mutated. It is an ordinary value: the front end owns one and passes it by
//! reference to the view builders.
//!
//! Aggregates (`total_income`, `total_spent`, ...) are recomputed from the
//! lists on every call and never cached. Mutations that would push one of
//! them past the `i64` range are rejected, so the sums stay exact.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{
    Budget, Category, GoalId, Money, PreferencesUpdate, SavingGoal, Transaction, TransactionId,
    TransactionType, UserPreferences,
};

/// Sum `amounts`, or `None` if the running total overflows
fn checked_total(mut amounts: impl Iterator<Item = Money>) -> Option<Money> {
    amounts.try_fold(Money::zero(), Money::checked_add)
}

fn total_too_large(total: &str) -> FinanceError {
    FinanceError::Validation(format!(
        "{} would exceed the largest amount that can be stored",
        total
    ))
}

/// In-memory state for one user session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinanceStore {
    #[serde(default)]
    transactions: Vec<Transaction>,

    #[serde(default)]
    saving_goals: Vec<SavingGoal>,

    #[serde(default)]
    budgets: Vec<Budget>,

    #[serde(default)]
    preferences: UserPreferences,
}

impl FinanceStore {
    /// Create an empty store with default preferences
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn saving_goals(&self) -> &[SavingGoal] {
        &self.saving_goals
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    pub fn transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| &t.id == id)
    }

    pub fn saving_goal(&self, id: &GoalId) -> Option<&SavingGoal> {
        self.saving_goals.iter().find(|g| &g.id == id)
    }

    pub fn budget(&self, category: &Category) -> Option<&Budget> {
        self.budgets.iter().find(|b| &b.category == category)
    }

    // ---------------------------------------------------------------------
    // Transactions
    // ---------------------------------------------------------------------

    /// Record a transaction
    pub fn add_transaction(&mut self, transaction: Transaction) -> FinanceResult<()> {
        transaction
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        if self.transaction(&transaction.id).is_some() {
            return Err(FinanceError::Duplicate {
                entity_type: "Transaction",
                identifier: transaction.id.to_string(),
            });
        }

        let amounts = self
            .transactions
            .iter()
            .filter(|t| t.kind == transaction.kind)
            .map(|t| t.amount);
        if checked_total(amounts.chain(std::iter::once(transaction.amount))).is_none() {
            return Err(total_too_large(match transaction.kind {
                TransactionType::Income => "Total income",
                TransactionType::Expense => "Total expenses",
            }));
        }

        debug!(id = %transaction.id, kind = %transaction.kind, amount = transaction.amount.cents(), "adding transaction");
        self.transactions.push(transaction);
        Ok(())
    }

    /// Remove a transaction; unknown ids are a no-op
    pub fn delete_transaction(&mut self, id: &TransactionId) -> Option<Transaction> {
        let index = self.transactions.iter().position(|t| &t.id == id)?;
        debug!(%id, "deleting transaction");
        Some(self.transactions.remove(index))
    }

    // ---------------------------------------------------------------------
    // Saving goals
    // ---------------------------------------------------------------------

    /// Append a saving goal with caller-supplied fields
    pub fn add_saving_goal(&mut self, goal: SavingGoal) -> FinanceResult<()> {
        goal.validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        if self.saving_goal(&goal.id).is_some() {
            return Err(FinanceError::Duplicate {
                entity_type: "Saving goal",
                identifier: goal.id.to_string(),
            });
        }

        debug!(id = %goal.id, name = %goal.name, "adding saving goal");
        self.saving_goals.push(goal);
        Ok(())
    }

    /// Add `contribution` to the goal's saved amount and return the updated goal
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `Validation` for a contribution that is
    /// not strictly positive, above [`Money::MAX`], or that would overflow the
    /// saved amount.
    pub fn update_saving_goal(
        &mut self,
        id: &GoalId,
        contribution: Money,
    ) -> FinanceResult<&SavingGoal> {
        if !contribution.is_positive() {
            return Err(FinanceError::Validation(format!(
                "Contribution must be greater than zero (got {})",
                contribution
            )));
        }
        if !contribution.is_within_limit() {
            return Err(FinanceError::Validation(format!(
                "Contribution {} exceeds the maximum of {}",
                contribution,
                Money::MAX
            )));
        }

        let goal = self
            .saving_goals
            .iter_mut()
            .find(|g| &g.id == id)
            .ok_or_else(|| FinanceError::goal_not_found(id.to_string()))?;

        goal.current_amount = goal
            .current_amount
            .checked_add(contribution)
            .ok_or_else(|| total_too_large("Saved amount"))?;
        debug!(%id, contribution = contribution.cents(), current = goal.current_amount.cents(), "contributed to saving goal");
        Ok(&*goal)
    }

    /// Remove a goal; deleting an unknown id is a no-op
    pub fn delete_saving_goal(&mut self, id: &GoalId) -> Option<SavingGoal> {
        let index = self.saving_goals.iter().position(|g| &g.id == id)?;
        debug!(%id, "deleting saving goal");
        Some(self.saving_goals.remove(index))
    }

    // ---------------------------------------------------------------------
    // Budgets
    // ---------------------------------------------------------------------

    /// Insert a budget, replacing any existing budget for the same category
    ///
    /// Returns the replaced budget.
    pub fn set_budget(&mut self, budget: Budget) -> FinanceResult<Option<Budget>> {
        budget
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        let others: Vec<&Budget> = self
            .budgets
            .iter()
            .filter(|b| b.category != budget.category)
            .collect();
        let limits = others.iter().map(|b| b.limit);
        if checked_total(limits.chain(std::iter::once(budget.limit))).is_none() {
            return Err(total_too_large("Total budget"));
        }
        let spent = others.iter().map(|b| b.spent);
        if checked_total(spent.chain(std::iter::once(budget.spent))).is_none() {
            return Err(total_too_large("Total spent"));
        }

        debug!(category = %budget.category, limit = budget.limit.cents(), "setting budget");
        match self.budgets.iter_mut().find(|b| b.category == budget.category) {
            Some(existing) => Ok(Some(std::mem::replace(existing, budget))),
            None => {
                self.budgets.push(budget);
                Ok(None)
            }
        }
    }

    /// Remove the budget for a category; unknown categories are a no-op
    pub fn remove_budget(&mut self, category: &Category) -> Option<Budget> {
        let index = self.budgets.iter().position(|b| &b.category == category)?;
        debug!(%category, "removing budget");
        Some(self.budgets.remove(index))
    }

    /// Overwrite the spent amount of one budget
    pub fn set_budget_spent(&mut self, category: &Category, spent: Money) -> FinanceResult<&Budget> {
        if spent.is_negative() {
            return Err(FinanceError::Validation(format!(
                "Spent amount must not be negative (got {})",
                spent
            )));
        }
        if !spent.is_within_limit() {
            return Err(FinanceError::Validation(format!(
                "Spent amount {} exceeds the maximum of {}",
                spent,
                Money::MAX
            )));
        }
        let others = self
            .budgets
            .iter()
            .filter(|b| &b.category != category)
            .map(|b| b.spent);
        if checked_total(others.chain(std::iter::once(spent))).is_none() {
            return Err(total_too_large("Total spent"));
        }

        let budget = self
            .budgets
            .iter_mut()
            .find(|b| &b.category == category)
            .ok_or_else(|| FinanceError::budget_not_found(category.to_string()))?;

        budget.spent = spent;
        Ok(&*budget)
    }

    /// Set every budget's spent amount to the sum of expenses in its category
    pub fn recompute_budget_spent(&mut self) {
        for budget in &mut self.budgets {
            budget.spent = self
                .transactions
                .iter()
                .filter(|t| t.is_expense() && t.category == budget.category)
                .map(|t| t.amount)
                .sum();
        }
        debug!(budgets = self.budgets.len(), "recomputed budget spending");
    }

    // ---------------------------------------------------------------------
    // Preferences
    // ---------------------------------------------------------------------

    /// Merge a partial preferences update
    pub fn update_preferences(&mut self, update: PreferencesUpdate) -> &UserPreferences {
        self.preferences.apply(update);
        debug!(?update, "updated preferences");
        &self.preferences
    }

    /// Flip dark mode and return the new value
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.preferences.dark_mode = !self.preferences.dark_mode;
        self.preferences.dark_mode
    }

    /// Drop all transactions, goals and budgets; preferences survive
    pub fn clear_all(&mut self) {
        self.transactions.clear();
        self.saving_goals.clear();
        self.budgets.clear();
        debug!("cleared all financial data");
    }

    // ---------------------------------------------------------------------
    // Derived aggregates
    // ---------------------------------------------------------------------

    fn total_of(&self, kind: TransactionType) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount)
            .sum()
    }

    pub fn total_income(&self) -> Money {
        self.total_of(TransactionType::Income)
    }

    pub fn total_expenses(&self) -> Money {
        self.total_of(TransactionType::Expense)
    }

    /// Income minus expenses
    pub fn total_balance(&self) -> Money {
        self.total_income() - self.total_expenses()
    }

    /// Sum of all budget limits
    pub fn total_budget(&self) -> Money {
        self.budgets.iter().map(|b| b.limit).sum()
    }

    /// Sum of all budget spent amounts
    pub fn total_spent(&self) -> Money {
        self.budgets.iter().map(|b| b.spent).sum()
    }

    /// Total budget minus total spent
    pub fn budget_remaining(&self) -> Money {
        self.total_budget() - self.total_spent()
    }

    /// Total spent as a percentage of total budget; `None` without budgets
    pub fn budget_utilization(&self) -> Option<f64> {
        self.total_spent().percent_of(self.total_budget())
    }
}
