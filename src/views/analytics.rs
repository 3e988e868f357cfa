//! Analytics view
//!
//! Produces labeled numeric series for the chart renderer: the spending trend
//! for the current period, spending by category, and budget limit vs spent.
//! Rendering is the chart library's job; this module only shapes the data.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::models::{Budget, Category, Money, Transaction};
use crate::store::FinanceStore;

/// Granularity of the spending trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timeframe {
    /// One point per day of the current month
    #[default]
    Daily,
    /// One point per 7-day block of the current month, starting on the 1st
    Weekly,
    /// One point per month of the current year
    Monthly,
}

impl Timeframe {
    pub const ALL: [Timeframe; 3] = [Self::Daily, Self::Weekly, Self::Monthly];
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "Daily"),
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
        }
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" | "day" => Ok(Self::Daily),
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            other => Err(format!("unknown timeframe '{}'", other)),
        }
    }
}

/// One labeled value of a chart series, in major currency units
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    fn new(label: impl Into<String>, amount: Money) -> Self {
        Self {
            label: label.into(),
            value: amount.to_major_units(),
        }
    }
}

/// A named chart series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub points: Vec<ChartPoint>,
}

impl Series {
    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}

/// Expense total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub total: Money,
    /// Share of all expenses; 0 when there are no expenses
    pub percent: f64,
}

/// Presentation data for the analytics tab
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsView {
    pub timeframe: Timeframe,
    pub trend: Series,
    pub categories: Vec<CategoryShare>,
    /// Two series over the same labels: "Budget" then "Spent"
    pub budget_comparison: [Series; 2],
}

impl AnalyticsView {
    /// Build the analytics for the period containing `today`
    pub fn build(store: &FinanceStore, timeframe: Timeframe, today: NaiveDate) -> Self {
        let transactions = store.transactions();
        let trend = match timeframe {
            Timeframe::Daily => daily_expenses(transactions, today),
            Timeframe::Weekly => weekly_expenses(transactions, today),
            Timeframe::Monthly => monthly_expenses(transactions, today),
        };

        Self {
            timeframe,
            trend,
            categories: spending_by_category(transactions),
            budget_comparison: budget_comparison(store.budgets()),
        }
    }

    /// The category distribution as a chart series
    pub fn category_series(&self) -> Series {
        Series {
            name: "Spending by Category".to_string(),
            points: self
                .categories
                .iter()
                .map(|c| ChartPoint::new(c.category.as_str(), c.total))
                .collect(),
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// Every day of the month containing `anchor`
fn days_of_month(anchor: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let first = first_of_month(anchor);
    first
        .iter_days()
        .take_while(move |d| d.month() == first.month())
}

fn expenses_between(transactions: &[Transaction], start: NaiveDate, end: NaiveDate) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_expense() && t.date >= start && t.date <= end)
        .map(|t| t.amount)
        .sum()
}

/// Daily expense totals for the whole month containing `anchor`
///
/// Days without expenses are present with a zero value.
pub fn daily_expenses(transactions: &[Transaction], anchor: NaiveDate) -> Series {
    let mut per_day: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for txn in transactions.iter().filter(|t| t.is_expense()) {
        *per_day.entry(txn.date).or_default() += txn.amount;
    }

    let points = days_of_month(anchor)
        .map(|day| {
            let amount = per_day.get(&day).copied().unwrap_or_default();
            ChartPoint::new(day.format("%b %-d").to_string(), amount)
        })
        .collect();

    Series {
        name: "Daily Expenses".to_string(),
        points,
    }
}

/// Expense totals per 7-day block of the month containing `anchor`
pub fn weekly_expenses(transactions: &[Transaction], anchor: NaiveDate) -> Series {
    let days: Vec<NaiveDate> = days_of_month(anchor).collect();

    let points = days
        .chunks(7)
        .filter_map(|week| {
            let (start, end) = (*week.first()?, *week.last()?);
            let label = format!("{} {}-{}", start.format("%b"), start.day(), end.day());
            Some(ChartPoint::new(label, expenses_between(transactions, start, end)))
        })
        .collect();

    Series {
        name: "Weekly Expenses".to_string(),
        points,
    }
}

/// Expense totals for each month of the year containing `anchor`
pub fn monthly_expenses(transactions: &[Transaction], anchor: NaiveDate) -> Series {
    let year = anchor.year();

    let points = (1..=12)
        .filter_map(|month| NaiveDate::from_ymd_opt(year, month, 1))
        .map(|first| {
            let amount = transactions
                .iter()
                .filter(|t| {
                    t.is_expense() && t.date.year() == year && t.date.month() == first.month()
                })
                .map(|t| t.amount)
                .sum();
            ChartPoint::new(first.format("%b").to_string(), amount)
        })
        .collect();

    Series {
        name: "Monthly Expenses".to_string(),
        points,
    }
}

/// Expense totals grouped by category, ordered by category label
pub fn spending_by_category(transactions: &[Transaction]) -> Vec<CategoryShare> {
    let mut totals: BTreeMap<&Category, Money> = BTreeMap::new();
    for txn in transactions.iter().filter(|t| t.is_expense()) {
        *totals.entry(&txn.category).or_default() += txn.amount;
    }

    let all: Money = totals.values().sum();

    totals
        .into_iter()
        .map(|(category, total)| CategoryShare {
            category: category.clone(),
            total,
            percent: total.percent_of(all).unwrap_or(0.0),
        })
        .collect()
}

/// Limit and spent series over the budget categories
pub fn budget_comparison(budgets: &[Budget]) -> [Series; 2] {
    [
        budget_series("Budget", budgets, |b| b.limit),
        budget_series("Spent", budgets, |b| b.spent),
    ]
}

fn budget_series(name: &str, budgets: &[Budget], value: impl Fn(&Budget) -> Money) -> Series {
    Series {
        name: name.to_string(),
        points: budgets
            .iter()
            .map(|b| ChartPoint::new(b.category.as_str(), value(b)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dollars(d: i64) -> Money {
        Money::from_dollars_cents(d, 0)
    }

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::expense(dollars(50), "Food", date(2024, 3, 1)),
            Transaction::expense(dollars(25), "Food", date(2024, 3, 1)),
            Transaction::expense(dollars(10), "Fun", date(2024, 3, 15)),
            Transaction::income(dollars(1000), "Salary", date(2024, 3, 2)),
            Transaction::expense(dollars(99), "Food", date(2024, 2, 29)),
        ]
    }

    #[test]
    fn test_daily_series_spans_the_full_month() {
        let series = daily_expenses(&sample(), date(2024, 3, 20));

        assert_eq!(series.points.len(), 31);
        assert_eq!(series.points[0], ChartPoint { label: "Mar 1".into(), value: 75.0 });
        assert_eq!(series.points[1].value, 0.0);
        assert_eq!(series.points[14].label, "Mar 15");
        assert_eq!(series.points[14].value, 10.0);
        assert_eq!(series.points[30].label, "Mar 31");
    }

    #[test]
    fn test_daily_series_without_data_is_all_zero() {
        let series = daily_expenses(&[], date(2024, 2, 10));
        assert_eq!(series.points.len(), 29);
        assert!(series.values().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_weekly_series() {
        let series = weekly_expenses(&sample(), date(2024, 3, 5));
        assert_eq!(
            series.labels(),
            vec!["Mar 1-7", "Mar 8-14", "Mar 15-21", "Mar 22-28", "Mar 29-31"]
        );
        assert_eq!(series.values(), vec![75.0, 0.0, 10.0, 0.0, 0.0]);
    }

    #[test]
    fn test_monthly_series() {
        let series = monthly_expenses(&sample(), date(2024, 7, 1));
        assert_eq!(series.points.len(), 12);
        assert_eq!(series.points[1], ChartPoint { label: "Feb".into(), value: 99.0 });
        assert_eq!(series.points[2].value, 85.0);
    }

    #[test]
    fn test_spending_by_category() {
        let shares = spending_by_category(&sample());
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].category, Category::new("Food"));
        assert_eq!(shares[0].total, dollars(174));
        assert_eq!(shares[1].total, dollars(10));
        let sum: f64 = shares.iter().map(|s| s.percent).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_spending_by_category_empty() {
        let only_income = vec![Transaction::income(dollars(5), "Gift", date(2024, 1, 1))];
        assert!(spending_by_category(&only_income).is_empty());
    }

    #[test]
    fn test_budget_comparison() {
        let budgets = vec![
            Budget::new("Food", dollars(200)).with_spent(dollars(250)),
            Budget::new("Rent", dollars(1000)),
        ];
        let [limit, spent] = budget_comparison(&budgets);
        assert_eq!(limit.name, "Budget");
        assert_eq!(limit.labels(), spent.labels());
        assert_eq!(limit.values(), vec![200.0, 1000.0]);
        assert_eq!(spent.values(), vec![250.0, 0.0]);
    }

    #[test]
    fn test_timeframe_parse() {
        assert_eq!("Weekly".parse::<Timeframe>(), Ok(Timeframe::Weekly));
        assert!("yearly".parse::<Timeframe>().is_err());
    }

    #[test]
    fn test_build_selects_timeframe() {
        let mut store = FinanceStore::new();
        for txn in sample() {
            store.add_transaction(txn).unwrap();
        }
        let view = AnalyticsView::build(&store, Timeframe::Monthly, date(2024, 3, 1));
        assert_eq!(view.trend.name, "Monthly Expenses");
        assert_eq!(view.category_series().points.len(), 2);
    }
}
