//! Transaction CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use super::Context;
use crate::audit::{AuditEntry, EntityType};
use crate::display::{format_transaction_details, format_transaction_register};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, Transaction, TransactionId, TransactionType};
use crate::notify::Notification;
use crate::views::{TransactionFilter, TransactionsView};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record an income or expense
    Add {
        /// income or expense
        kind: TransactionType,
        /// Amount (e.g., "45.50" or "$1,200")
        amount: String,
        /// Category label
        category: String,
        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Use this id instead of a generated one
        #[arg(long)]
        id: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Only income or only expenses
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
        /// Maximum number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show one transaction
    Show {
        id: String,
    },
    /// Delete a transaction
    Delete {
        id: String,
    },
}

pub(crate) fn parse_date(input: &str) -> FinanceResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        FinanceError::Validation(format!(
            "Invalid date '{}'. Use the format YYYY-MM-DD",
            input.trim()
        ))
    })
}

pub(crate) fn parse_amount(input: &str) -> FinanceResult<Money> {
    Money::parse(input).map_err(|e| {
        FinanceError::Validation(format!(
            "Invalid amount '{}'. Use a format like '45.50'. Error: {}",
            input, e
        ))
    })
}

/// Handle a transaction command
pub fn handle_transaction_command(ctx: &mut Context, cmd: TransactionCommands) -> FinanceResult<()> {
    let currency = ctx.currency();

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            description,
            date,
            id,
        } => {
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => ctx.today(),
            };

            let mut txn = Transaction::new(kind, amount, category, description, date);
            if let Some(id) = id {
                txn = txn.with_id(id);
            }

            ctx.store.add_transaction(txn.clone())?;
            ctx.commit(AuditEntry::create(
                EntityType::Transaction,
                txn.id.as_str(),
                Some(txn.category.to_string()),
                &txn,
            ))?;

            print!("{}", format_transaction_details(&txn, currency));
            ctx.notify(Notification::success(format!(
                "{} of {} added",
                match txn.kind {
                    TransactionType::Income => "Income",
                    TransactionType::Expense => "Expense",
                },
                crate::display::format_money(txn.amount, currency)
            )));
            if txn.is_expense() {
                ctx.check_budget_status();
            }
        }

        TransactionCommands::List {
            kind,
            category,
            limit,
        } => {
            let mut filter = TransactionFilter::new();
            if let Some(kind) = kind {
                filter = filter.kind(kind);
            }
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let view = TransactionsView::build(&ctx.store, &filter);
            print!("{}", format_transaction_register(&view.transactions, currency));
            if !view.transactions.is_empty() {
                println!(
                    "{} transaction(s), net {}",
                    view.transactions.len(),
                    crate::display::format_money(view.net, currency)
                );
            }
        }

        TransactionCommands::Show { id } => {
            let id = TransactionId::from(id.as_str());
            let txn = ctx
                .store
                .transaction(&id)
                .ok_or_else(|| FinanceError::transaction_not_found(id.as_str()))?;
            print!("{}", format_transaction_details(txn, currency));
        }

        TransactionCommands::Delete { id } => {
            let id = TransactionId::from(id.as_str());
            match ctx.store.delete_transaction(&id) {
                Some(removed) => {
                    ctx.commit(AuditEntry::delete(
                        EntityType::Transaction,
                        removed.id.as_str(),
                        Some(removed.category.to_string()),
                        &removed,
                    ))?;
                    ctx.notify(Notification::success(format!("Transaction {} deleted", id)));
                }
                None => {
                    ctx.notify(Notification::info(format!("No transaction with id {}", id)));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tests::test_context;

    #[test]
    fn test_add_and_delete() {
        let (mut ctx, _temp) = test_context();
        handle_transaction_command(
            &mut ctx,
            TransactionCommands::Add {
                kind: TransactionType::Expense,
                amount: "45.50".into(),
                category: "Food".into(),
                description: "Groceries".into(),
                date: Some("2024-03-01".into()),
                id: Some("t1".into()),
            },
        )
        .unwrap();

        let saved = ctx.storage.load().unwrap();
        assert_eq!(saved.transactions().len(), 1);
        assert_eq!(saved.total_expenses().cents(), 4_550);

        handle_transaction_command(&mut ctx, TransactionCommands::Delete { id: "t1".into() }).unwrap();
        // second delete is a no-op
        handle_transaction_command(&mut ctx, TransactionCommands::Delete { id: "t1".into() }).unwrap();

        assert!(ctx.storage.load().unwrap().transactions().is_empty());
        assert_eq!(ctx.audit().read_all().unwrap().len(), 2);
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let (mut ctx, _temp) = test_context();
        let add = |amount: &str, date: &str| TransactionCommands::Add {
            kind: TransactionType::Income,
            amount: amount.into(),
            category: "Salary".into(),
            description: String::new(),
            date: Some(date.into()),
            id: None,
        };

        let err = handle_transaction_command(&mut ctx, add("lots", "2024-01-01")).unwrap_err();
        assert!(err.is_validation());
        let err = handle_transaction_command(&mut ctx, add("10", "01/01/2024")).unwrap_err();
        assert!(err.is_validation());
        let err = handle_transaction_command(&mut ctx, add("-10", "2024-01-01")).unwrap_err();
        assert!(err.is_validation());
        assert!(ctx.store.transactions().is_empty());
    }

    #[test]
    fn test_show_unknown() {
        let (mut ctx, _temp) = test_context();
        let err =
            handle_transaction_command(&mut ctx, TransactionCommands::Show { id: "nope".into() })
                .unwrap_err();
        assert!(err.is_not_found());
    }
}
