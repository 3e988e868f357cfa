//! Dashboard shell
//!
//! Tab selection and the budget banner shown above every tab.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use super::analytics::{AnalyticsView, Timeframe};
use super::goals::GoalsView;
use super::overview::OverviewView;
use super::settings::SettingsView;
use super::transactions::{TransactionFilter, TransactionsView};
use crate::config::Settings;
use crate::models::Money;
use crate::store::FinanceStore;

/// The dashboard tabs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Transactions,
    Goals,
    Analytics,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Self::Overview,
        Self::Transactions,
        Self::Goals,
        Self::Analytics,
        Self::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Transactions => "Transactions",
            Self::Goals => "Goals",
            Self::Analytics => "Analytics",
            Self::Settings => "Settings",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.title().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown tab '{}'", wanted))
    }
}

/// The derived content of one tab
#[derive(Debug, Clone, PartialEq)]
pub enum TabContent {
    Overview(OverviewView),
    Transactions(TransactionsView),
    Goals(GoalsView),
    Analytics(AnalyticsView),
    Settings(SettingsView),
}

/// Inputs the tab builders need beyond the store
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub today: NaiveDate,
    pub timeframe: Timeframe,
    pub recent_count: usize,
}

impl RenderContext {
    pub fn new(today: NaiveDate, settings: &Settings) -> Self {
        Self {
            today,
            timeframe: Timeframe::default(),
            recent_count: settings.recent_transaction_count,
        }
    }

    pub fn with_timeframe(mut self, timeframe: Timeframe) -> Self {
        self.timeframe = timeframe;
        self
    }
}

/// Build the content of the selected tab
pub fn render_tab(tab: Tab, store: &FinanceStore, ctx: &RenderContext) -> TabContent {
    match tab {
        Tab::Overview => TabContent::Overview(OverviewView::build_with_limit(store, ctx.recent_count)),
        Tab::Transactions => {
            TabContent::Transactions(TransactionsView::build(store, &TransactionFilter::new()))
        }
        Tab::Goals => TabContent::Goals(GoalsView::build(store, ctx.today)),
        Tab::Analytics => {
            TabContent::Analytics(AnalyticsView::build(store, ctx.timeframe, ctx.today))
        }
        Tab::Settings => TabContent::Settings(SettingsView::build(store)),
    }
}

/// Overall budget health shown in the dashboard header
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetStatus {
    /// No budgets, or all limits are zero
    NoBudget,
    Healthy { utilization: f64 },
    /// Utilization above the warning threshold but not over 100%
    NearLimit { utilization: f64 },
    OverLimit { utilization: f64 },
}

impl BudgetStatus {
    /// Classify the store's total utilization against `warning_percent`
    pub fn evaluate(store: &FinanceStore, warning_percent: f64) -> Self {
        match store.budget_utilization() {
            None => Self::NoBudget,
            Some(u) if u > 100.0 => Self::OverLimit { utilization: u },
            Some(u) if u > warning_percent => Self::NearLimit { utilization: u },
            Some(u) => Self::Healthy { utilization: u },
        }
    }

    /// Banner text, if the status warrants one
    pub fn banner(&self) -> Option<String> {
        match self {
            Self::NearLimit { utilization } => Some(format!(
                "You're close to your budget limit ({:.0}% used)",
                utilization
            )),
            Self::OverLimit { utilization } => Some(format!(
                "You're over your total budget ({:.0}% used)",
                utilization
            )),
            Self::NoBudget | Self::Healthy { .. } => None,
        }
    }
}

/// Header figures shared by every tab
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardHeader {
    pub balance: Money,
    pub total_budget: Money,
    pub total_spent: Money,
    pub remaining: Money,
    pub status: BudgetStatus,
}

impl DashboardHeader {
    pub fn build(store: &FinanceStore, settings: &Settings) -> Self {
        Self {
            balance: store.total_balance(),
            total_budget: store.total_budget(),
            total_spent: store.total_spent(),
            remaining: store.budget_remaining(),
            status: BudgetStatus::evaluate(store, settings.budget_warning_percent),
        }
    }
}
