//! Dashboard, overview, analytics and settings formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{format_money, format_transaction_register};
use crate::models::{Budget, Currency};
use crate::session::UserProfile;
use crate::views::{AnalyticsView, DashboardHeader, OverviewView, Series, SettingsView};

/// Header line with balance, budget figures and the banner
pub fn format_header(
    header: &DashboardHeader,
    user: Option<&UserProfile>,
    currency: Currency,
) -> String {
    let mut output = String::new();

    if let Some(user) = user {
        output.push_str(&format!("Signed in as {}\n", user.display_name()));
    }

    output.push_str(&format!(
        "Balance: {}   Budget: {}   Spent: {}   Remaining: {}\n",
        format_money(header.balance, currency),
        format_money(header.total_budget, currency),
        format_money(header.total_spent, currency),
        format_money(header.remaining, currency),
    ));

    if let Some(banner) = header.status.banner() {
        output.push_str(&format!("! {}\n", banner));
    }

    output
}

/// The overview tab
pub fn format_overview(view: &OverviewView, currency: Currency) -> String {
    let mut output = String::new();

    output.push_str(&format!("Income:   {}\n", format_money(view.total_income, currency)));
    output.push_str(&format!("Expenses: {}\n", format_money(view.total_expenses, currency)));
    output.push_str(&format!("Balance:  {}\n", format_money(view.total_balance, currency)));

    output.push_str("\nRecent Transactions\n");
    output.push_str(&format_transaction_register(&view.recent, currency));

    if view.has_alerts() {
        output.push_str("\nBudget Alerts\n");
        for alert in &view.alerts {
            output.push_str(&format!(
                "  {} is over budget by {} ({} of {})\n",
                alert.category,
                format_money(alert.overage, currency),
                format_money(alert.spent, currency),
                format_money(alert.limit, currency),
            ));
        }
    }

    output
}

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
}

/// Budgets with limit, spent and remaining
pub fn format_budget_table(budgets: &[Budget], currency: Currency) -> String {
    if budgets.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let rows = budgets.iter().map(|b| BudgetRow {
        category: b.category.to_string(),
        limit: format_money(b.limit, currency),
        spent: format_money(b.spent, currency),
        remaining: format_money(b.remaining(), currency),
        used: match b.utilization() {
            Some(u) if b.is_over_budget() => format!("{:.0}% OVER", u),
            Some(u) => format!("{:.0}%", u),
            None => "-".to_string(),
        },
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

fn format_series(series: &Series, currency: Currency) -> String {
    let mut output = format!("{}\n", series.name);
    let width = series.points.iter().map(|p| p.label.len()).max().unwrap_or(0);
    for point in &series.points {
        output.push_str(&format!(
            "  {:width$}  {}{:.2}\n",
            point.label,
            currency.symbol(),
            point.value,
            width = width
        ));
    }
    output
}

/// The analytics tab: trend, category split and budget comparison
pub fn format_analytics(view: &AnalyticsView, currency: Currency) -> String {
    let mut output = format!("Timeframe: {}\n\n", view.timeframe);
    output.push_str(&format_series(&view.trend, currency));

    output.push_str("\nSpending by Category\n");
    if view.categories.is_empty() {
        output.push_str("  No expenses recorded.\n");
    }
    for share in &view.categories {
        output.push_str(&format!(
            "  {:20} {:>12} {:>5.1}%\n",
            share.category.as_str(),
            format_money(share.total, currency),
            share.percent
        ));
    }

    let [limit_series, spent_series] = &view.budget_comparison;
    if !limit_series.points.is_empty() {
        output.push_str("\nBudget vs Spent\n");
        for (limit, spent) in limit_series.points.iter().zip(&spent_series.points) {
            output.push_str(&format!(
                "  {:20} {}{:.2} / {}{:.2}\n",
                limit.label,
                currency.symbol(),
                spent.value,
                currency.symbol(),
                limit.value
            ));
        }
    }

    output
}

/// The settings tab
pub fn format_settings(view: &SettingsView) -> String {
    let on_off = |b: bool| if b { "on" } else { "off" };
    let currencies: Vec<String> = view
        .currencies
        .iter()
        .map(|o| {
            let label = format!("{} ({})", o.currency.code(), o.currency.symbol());
            if o.selected {
                format!("[{}]", label)
            } else {
                label
            }
        })
        .collect();

    format!(
        "Dark mode:     {}\nNotifications: {}\nCurrency:      {}\n",
        on_off(view.preferences.dark_mode),
        on_off(view.preferences.notifications),
        currencies.join("  ")
    )
}
