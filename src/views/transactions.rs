//! Transactions view
//!
//! The full transaction register, newest first, with optional filters.

use crate::models::{Category, Money, Transaction, TransactionType};
use crate::store::FinanceStore;

use super::overview::recent_transactions;

/// Options for filtering the register
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub kind: Option<TransactionType>,
    pub category: Option<Category>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category: impl Into<Category>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |k| txn.kind == k)
            && self.category.as_ref().map_or(true, |c| &txn.category == c)
    }
}

/// Presentation data for the transactions tab
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionsView {
    pub transactions: Vec<Transaction>,
    /// Net of the listed transactions (income positive)
    pub net: Money,
}

impl TransactionsView {
    pub fn build(store: &FinanceStore, filter: &TransactionFilter) -> Self {
        let matching: Vec<Transaction> = store
            .transactions()
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect();

        let limit = filter.limit.unwrap_or(matching.len());
        let transactions = recent_transactions(&matching, limit);
        let net = transactions.iter().map(Transaction::signed_amount).sum();

        Self { transactions, net }
    }
}
