//! Transaction display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{format_money, truncate};
use crate::models::{Currency, Transaction};

#[derive(Tabled)]
struct RegisterRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "ID")]
    id: String,
}

impl RegisterRow {
    fn new(txn: &Transaction, currency: Currency) -> Self {
        Self {
            date: txn.date.format("%Y-%m-%d").to_string(),
            category: truncate(txn.category.as_str(), 20),
            description: truncate(&txn.description, 30),
            amount: format!("{}{}", txn.kind.sign(), format_money(txn.amount, currency)),
            id: txn.id.to_string(),
        }
    }
}

/// Format a list of transactions as a register table
pub fn format_transaction_register(transactions: &[Transaction], currency: Currency) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions.iter().map(|t| RegisterRow::new(t, currency));
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, currency: Currency) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Amount:      {}\n", format_money(txn.amount, currency)));
    output.push_str(&format!("Category:    {}\n", txn.category));

    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_register() {
        let txn = Transaction::expense(
            Money::from_cents(1_250),
            "Coffee",
            NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(),
        )
        .with_id("t1");

        let output = format_transaction_register(&[txn], Currency::Gbp);
        assert!(output.contains("Coffee"));
        assert!(output.contains("-£12.50"));
        assert!(output.contains("2024-02-03"));
        assert!(output.contains("ID"));
    }

    #[test]
    fn test_empty_register() {
        assert_eq!(
            format_transaction_register(&[], Currency::Usd),
            "No transactions found.\n"
        );
    }

    #[test]
    fn test_details() {
        let txn = Transaction::income(
            Money::from_cents(250_000),
            "Salary",
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        )
        .with_description("February");

        let output = format_transaction_details(&txn, Currency::Usd);
        assert!(output.contains("Type:        income"));
        assert!(output.contains("Amount:      $2500.00"));
        assert!(output.contains("Description: February"));
    }
}
