//! Budget CLI commands

use clap::Subcommand;

use super::transaction::parse_amount;
use super::Context;
use crate::audit::{AuditEntry, EntityType};
use crate::display::{format_budget_table, format_money};
use crate::error::FinanceResult;
use crate::models::{Budget, Category};
use crate::notify::Notification;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the spending limit for a category
    Set {
        category: String,
        /// Limit amount
        limit: String,
        /// Amount already spent
        #[arg(short, long)]
        spent: Option<String>,
    },
    /// Record how much has been spent in a category
    Spent {
        category: String,
        amount: String,
    },
    /// Remove the budget for a category
    Remove {
        category: String,
    },
    /// Recalculate every budget's spending from recorded expenses
    Recompute,
    /// List budgets
    List,
}

/// Handle a budget command
pub fn handle_budget_command(ctx: &mut Context, cmd: BudgetCommands) -> FinanceResult<()> {
    let currency = ctx.currency();

    match cmd {
        BudgetCommands::Set {
            category,
            limit,
            spent,
        } => {
            let limit = parse_amount(&limit)?;
            let mut budget = Budget::new(category, limit);
            if let Some(spent) = spent {
                budget = budget.with_spent(parse_amount(&spent)?);
            }

            let replaced = ctx.store.set_budget(budget.clone())?;
            let entry = match &replaced {
                Some(before) => AuditEntry::update(
                    EntityType::Budget,
                    budget.category.as_str(),
                    None,
                    before,
                    &budget,
                    None,
                ),
                None => AuditEntry::create(EntityType::Budget, budget.category.as_str(), None, &budget),
            };
            ctx.commit(entry)?;

            ctx.notify(Notification::success(format!(
                "Budget for {} set to {}",
                budget.category,
                format_money(budget.limit, currency)
            )));
            ctx.check_budget_status();
        }

        BudgetCommands::Spent { category, amount } => {
            let category = Category::new(&category);
            let amount = parse_amount(&amount)?;
            let before = ctx.store.budget(&category).cloned();
            let after = ctx.store.set_budget_spent(&category, amount)?.clone();

            if let Some(before) = before {
                ctx.commit(AuditEntry::update(
                    EntityType::Budget,
                    category.as_str(),
                    None,
                    &before,
                    &after,
                    Some(format!(
                        "spent {} -> {}",
                        format_money(before.spent, currency),
                        format_money(after.spent, currency)
                    )),
                ))?;
            }

            ctx.notify(Notification::success(format!(
                "{}: {} of {} spent",
                after.category,
                format_money(after.spent, currency),
                format_money(after.limit, currency)
            )));
            ctx.check_budget_status();
        }

        BudgetCommands::Remove { category } => {
            let category = Category::new(&category);
            match ctx.store.remove_budget(&category) {
                Some(removed) => {
                    ctx.commit(AuditEntry::delete(
                        EntityType::Budget,
                        removed.category.as_str(),
                        None,
                        &removed,
                    ))?;
                    ctx.notify(Notification::success(format!("Budget for {} removed", category)));
                }
                None => {
                    ctx.notify(Notification::info(format!("No budget for {}", category)));
                }
            }
        }

        BudgetCommands::Recompute => {
            let before = ctx.store.budgets().to_vec();
            ctx.store.recompute_budget_spent();
            let after = ctx.store.budgets().to_vec();
            ctx.commit(AuditEntry::update(
                EntityType::Budget,
                "*",
                None,
                &before,
                &after,
                Some("recomputed spending from expenses".into()),
            ))?;

            print!("{}", format_budget_table(ctx.store.budgets(), currency));
            ctx.check_budget_status();
        }

        BudgetCommands::List => {
            print!("{}", format_budget_table(ctx.store.budgets(), currency));
            if !ctx.store.budgets().is_empty() {
                println!(
                    "Total: {} of {} spent, {} remaining",
                    format_money(ctx.store.total_spent(), currency),
                    format_money(ctx.store.total_budget(), currency),
                    format_money(ctx.store.budget_remaining(), currency)
                );
            }
        }
    }

    Ok(())
}
