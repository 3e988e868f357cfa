//! Core data models for fintrack
//!
//! Transactions, saving goals, budgets and preferences, plus the value types
//! they are built from.

pub mod budget;
pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod preferences;
pub mod transaction;

pub use budget::{Budget, BudgetValidationError};
pub use category::Category;
pub use goal::{GoalValidationError, SavingGoal};
pub use ids::{GoalId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use preferences::{Currency, PreferencesUpdate, UserPreferences};
pub use transaction::{Transaction, TransactionType, TransactionValidationError};
