//! View derivations
//!
//! Each view reads a `&FinanceStore` and produces presentation data for one
//! dashboard tab. Views never mutate the store; the action helpers in
//! [`goals`] and [`settings`] do, through the store's own operations.

pub mod analytics;
pub mod dashboard;
pub mod goals;
pub mod overview;
pub mod settings;
pub mod transactions;

pub use analytics::{AnalyticsView, CategoryShare, ChartPoint, Series, Timeframe};
pub use dashboard::{render_tab, BudgetStatus, DashboardHeader, RenderContext, Tab, TabContent};
pub use goals::{GoalCard, GoalsView, NewGoalForm};
pub use overview::{BudgetAlert, OverviewView, RECENT_TRANSACTION_COUNT};
pub use settings::{CurrencyOption, SettingsAction, SettingsView};
pub use transactions::{TransactionFilter, TransactionsView};
