//! Budget model
//!
//! A per-category spending ceiling tracked against actual spend.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;

/// A spending ceiling for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub category: Category,

    /// Ceiling for the category
    pub limit: Money,

    /// Amount spent against the ceiling
    #[serde(default)]
    pub spent: Money,
}

impl Budget {
    /// Create a budget with nothing spent yet
    pub fn new(category: impl Into<Category>, limit: Money) -> Self {
        Self {
            category: category.into(),
            limit,
            spent: Money::zero(),
        }
    }

    /// Set the spent amount
    pub fn with_spent(mut self, spent: Money) -> Self {
        self.spent = spent;
        self
    }

    /// Strictly over the limit; spending exactly the limit is not flagged
    pub fn is_over_budget(&self) -> bool {
        self.spent > self.limit
    }

    /// Amount spent beyond the limit, zero when within budget
    pub fn overage(&self) -> Money {
        if self.is_over_budget() {
            self.spent - self.limit
        } else {
            Money::zero()
        }
    }

    /// Limit minus spent (negative when over budget)
    pub fn remaining(&self) -> Money {
        self.limit - self.spent
    }

    /// Spent as a percentage of the limit, `None` for a zero limit
    pub fn utilization(&self) -> Option<f64> {
        self.spent.percent_of(self.limit)
    }

    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.is_empty() {
            return Err(BudgetValidationError::MissingCategory);
        }
        if !self.limit.is_positive() {
            return Err(BudgetValidationError::NonPositiveLimit(self.limit));
        }
        if self.spent.is_negative() {
            return Err(BudgetValidationError::NegativeSpent(self.spent));
        }
        if !self.limit.is_within_limit() || !self.spent.is_within_limit() {
            return Err(BudgetValidationError::AmountTooLarge(self.limit.max(self.spent)));
        }
        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} of {}", self.category, self.spent, self.limit)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    MissingCategory,
    NonPositiveLimit(Money),
    NegativeSpent(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCategory => write!(f, "Budget category is required"),
            Self::NonPositiveLimit(amount) => {
                write!(f, "Budget limit must be greater than zero (got {})", amount)
            }
            Self::NegativeSpent(amount) => {
                write!(f, "Spent amount must not be negative (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Budget amount {} exceeds the maximum of {}", amount, Money::MAX)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
