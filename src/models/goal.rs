//! Saving goal model
//!
//! A target amount accumulated through contributions until a deadline.
//! `current_amount` may exceed `target_amount`; only the displayed progress
//! is clamped.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// A savings target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingGoal {
    pub id: GoalId,

    pub name: String,

    /// Amount the user wants to reach
    pub target_amount: Money,

    /// Sum of all contributions so far
    #[serde(default)]
    pub current_amount: Money,

    pub deadline: NaiveDate,

    pub created_at: DateTime<Utc>,
}

impl SavingGoal {
    /// Create a goal with a fresh id and nothing saved yet
    pub fn new(name: impl Into<String>, target_amount: Money, deadline: NaiveDate) -> Self {
        Self {
            id: GoalId::new(),
            name: name.into().trim().to_string(),
            target_amount,
            current_amount: Money::zero(),
            deadline,
            created_at: Utc::now(),
        }
    }

    /// Replace the generated id with a caller-supplied one
    pub fn with_id(mut self, id: impl Into<GoalId>) -> Self {
        self.id = id.into();
        self
    }

    /// `current / target`, unclamped; `None` when the target is zero
    pub fn progress_ratio(&self) -> Option<f64> {
        if self.target_amount.is_zero() {
            return None;
        }
        Some(self.current_amount.cents() as f64 / self.target_amount.cents() as f64)
    }

    /// Progress for display, always within `[0, 100]`
    pub fn progress_percent(&self) -> f64 {
        self.current_amount
            .percent_of(self.target_amount)
            .map(|p| p.clamp(0.0, 100.0))
            .unwrap_or(0.0)
    }

    /// Amount still missing, never negative
    pub fn remaining(&self) -> Money {
        if self.current_amount >= self.target_amount {
            Money::zero()
        } else {
            self.target_amount - self.current_amount
        }
    }

    pub fn is_complete(&self) -> bool {
        self.target_amount.is_positive() && self.current_amount >= self.target_amount
    }

    /// Days from `today` until the deadline (negative once it has passed)
    pub fn days_until_deadline(&self, today: NaiveDate) -> i64 {
        (self.deadline - today).num_days()
    }

    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.id.as_str().is_empty() {
            return Err(GoalValidationError::MissingId);
        }
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::MissingName);
        }
        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target_amount));
        }
        if self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeCurrent(self.current_amount));
        }
        if !self.target_amount.is_within_limit() {
            return Err(GoalValidationError::AmountTooLarge(self.target_amount));
        }
        Ok(())
    }
}

impl fmt::Display for SavingGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {}",
            self.name, self.current_amount, self.target_amount
        )
    }
}

/// Validation errors for saving goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    MissingId,
    MissingName,
    NonPositiveTarget(Money),
    NegativeCurrent(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingId => write!(f, "Goal id must not be empty"),
            Self::MissingName => write!(f, "Goal name is required"),
            Self::NonPositiveTarget(amount) => {
                write!(f, "Goal target must be greater than zero (got {})", amount)
            }
            Self::NegativeCurrent(amount) => {
                write!(f, "Saved amount must not be negative (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Goal target {} exceeds the maximum of {}", amount, Money::MAX)
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}
