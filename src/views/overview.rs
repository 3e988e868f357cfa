//! Overview view
//!
//! Income/expense subtotals, the recent activity list, and over-budget
//! alerts.

use crate::models::{Budget, Category, Money, Transaction};
use crate::store::FinanceStore;

/// Number of entries in the recent activity list
pub const RECENT_TRANSACTION_COUNT: usize = 5;

/// A budget whose spending exceeds its limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetAlert {
    pub category: Category,
    pub limit: Money,
    pub spent: Money,
    /// `spent - limit`
    pub overage: Money,
}

impl BudgetAlert {
    fn from_budget(budget: &Budget) -> Self {
        Self {
            category: budget.category.clone(),
            limit: budget.limit,
            spent: budget.spent,
            overage: budget.overage(),
        }
    }
}

/// Presentation data for the overview tab
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewView {
    pub total_income: Money,
    pub total_expenses: Money,
    pub total_balance: Money,
    /// Most recent transactions, newest first
    pub recent: Vec<Transaction>,
    pub alerts: Vec<BudgetAlert>,
}

impl OverviewView {
    /// Build the overview with the default recent-list length
    pub fn build(store: &FinanceStore) -> Self {
        Self::build_with_limit(store, RECENT_TRANSACTION_COUNT)
    }

    pub fn build_with_limit(store: &FinanceStore, recent_count: usize) -> Self {
        Self {
            total_income: store.total_income(),
            total_expenses: store.total_expenses(),
            total_balance: store.total_balance(),
            recent: recent_transactions(store.transactions(), recent_count),
            alerts: over_budget_alerts(store.budgets()),
        }
    }

    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty()
    }
}

/// The `count` newest transactions by date
///
/// Transactions sharing a date keep their reverse insertion order, so the
/// latest recorded entry of a day comes first.
pub fn recent_transactions(transactions: &[Transaction], count: usize) -> Vec<Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().rev().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.into_iter().take(count).cloned().collect()
}

/// Budgets strictly over their limit
pub fn over_budget_alerts(budgets: &[Budget]) -> Vec<BudgetAlert> {
    budgets
        .iter()
        .filter(|b| b.is_over_budget())
        .map(BudgetAlert::from_budget)
        .collect()
}
