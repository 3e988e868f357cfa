//! Transaction model
//!
//! A single recorded income or expense event. Amounts are always stored as
//! non-negative magnitudes; the direction lives in [`TransactionType`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Sign prefix used in activity lists
    pub fn sign(&self) -> &'static str {
        match self {
            Self::Income => "+",
            Self::Expense => "-",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!("unknown transaction type '{}'", other)),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Non-negative magnitude
    pub amount: Money,

    pub category: Category,

    /// Free text
    #[serde(default)]
    pub description: String,

    pub date: NaiveDate,
}

impl Transaction {
    /// Create a transaction with a fresh id
    pub fn new(
        kind: TransactionType,
        amount: Money,
        category: impl Into<Category>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            category: category.into(),
            description: description.into(),
            date,
        }
    }

    /// Create an income transaction
    pub fn income(amount: Money, category: impl Into<Category>, date: NaiveDate) -> Self {
        Self::new(TransactionType::Income, amount, category, "", date)
    }

    /// Create an expense transaction
    pub fn expense(amount: Money, category: impl Into<Category>, date: NaiveDate) -> Self {
        Self::new(TransactionType::Expense, amount, category, "", date)
    }

    /// Replace the generated id with a caller-supplied one
    pub fn with_id(mut self, id: impl Into<TransactionId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Amount with the direction applied (income positive, expense negative)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.id.as_str().is_empty() {
            return Err(TransactionValidationError::MissingId);
        }
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }
        if !self.amount.is_within_limit() {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }
        if self.category.is_empty() {
            return Err(TransactionValidationError::MissingCategory);
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}{} {}",
            self.date.format("%Y-%m-%d"),
            self.kind.sign(),
            self.amount,
            self.category
        )?;
        if !self.description.is_empty() {
            write!(f, " ({})", self.description)?;
        }
        Ok(())
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    MissingId,
    NegativeAmount(Money),
    AmountTooLarge(Money),
    MissingCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingId => write!(f, "Transaction id must not be empty"),
            Self::NegativeAmount(amount) => {
                write!(f, "Transaction amount must not be negative (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Transaction amount {} exceeds the maximum of {}", amount, Money::MAX)
            }
            Self::MissingCategory => write!(f, "Transaction category is required"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
