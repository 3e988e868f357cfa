//! Saving goal CLI commands

use clap::Subcommand;

use super::transaction::parse_amount;
use super::Context;
use crate::audit::{AuditEntry, EntityType};
use crate::display::{format_goal_card, format_goal_list, format_money};
use crate::error::FinanceResult;
use crate::models::GoalId;
use crate::notify::Notification;
use crate::views::goals::{create_goal, quick_contribute};
use crate::views::{GoalsView, NewGoalForm};

/// Saving goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a saving goal
    Add {
        name: String,
        /// Target amount
        target: String,
        /// Deadline (YYYY-MM-DD)
        deadline: String,
    },
    /// Add money to a goal
    Contribute {
        /// Goal ID
        id: String,
        /// Amount to add; defaults to the configured quick contribution
        amount: Option<String>,
    },
    /// List goals with progress
    List,
    /// Delete a goal
    Delete {
        /// Goal ID
        id: String,
    },
}

/// Handle a saving goal command
pub fn handle_goal_command(ctx: &mut Context, cmd: GoalCommands) -> FinanceResult<()> {
    let currency = ctx.currency();

    match cmd {
        GoalCommands::Add {
            name,
            target,
            deadline,
        } => {
            let form = NewGoalForm {
                name,
                target_amount: target,
                deadline,
            };
            let id = create_goal(&mut ctx.store, &form)?;

            if let Some(goal) = ctx.store.saving_goal(&id).cloned() {
                ctx.commit(AuditEntry::create(
                    EntityType::SavingGoal,
                    goal.id.as_str(),
                    Some(goal.name.clone()),
                    &goal,
                ))?;
                println!("Created goal: {}", goal.name);
                println!("  Target:   {}", format_money(goal.target_amount, currency));
                println!("  Deadline: {}", goal.deadline);
                println!("  ID:       {}", goal.id);
                ctx.notify(Notification::success(format!("Goal '{}' created", goal.name)));
            }
        }

        GoalCommands::Contribute { id, amount } => {
            let amount = match amount {
                Some(a) => parse_amount(&a)?,
                None => ctx.settings.default_contribution,
            };
            let id = GoalId::from(id.as_str());
            let before = ctx.store.saving_goal(&id).cloned();

            let today = ctx.today();
            let card = quick_contribute(&mut ctx.store, &id, amount, today)?;

            if let (Some(before), Some(after)) = (before, ctx.store.saving_goal(&id).cloned()) {
                ctx.commit(AuditEntry::update(
                    EntityType::SavingGoal,
                    id.as_str(),
                    Some(after.name.clone()),
                    &before,
                    &after,
                    Some(format!("contributed {}", format_money(amount, currency))),
                ))?;
            }

            print!("{}", format_goal_card(&card, currency));
            ctx.notify(Notification::success(format!(
                "Added {} to '{}'",
                format_money(amount, currency),
                card.name
            )));
            if card.complete {
                ctx.notify(Notification::info(format!("Goal '{}' reached", card.name)));
            }
        }

        GoalCommands::List => {
            let view = GoalsView::build(&ctx.store, ctx.today());
            print!("{}", format_goal_list(&view, currency));
        }

        GoalCommands::Delete { id } => {
            let id = GoalId::from(id.as_str());
            match ctx.store.delete_saving_goal(&id) {
                Some(removed) => {
                    ctx.commit(AuditEntry::delete(
                        EntityType::SavingGoal,
                        removed.id.as_str(),
                        Some(removed.name.clone()),
                        &removed,
                    ))?;
                    ctx.notify(Notification::success(format!("Goal '{}' deleted", removed.name)));
                }
                None => {
                    ctx.notify(Notification::info(format!("No saving goal with id {}", id)));
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
    use crate::models::Money;

    fn add_goal(ctx: &mut Context) -> GoalId {
        handle_goal_command(
            ctx,
            GoalCommands::Add {
                name: "Bike".into(),
                target: "500".into(),
                deadline: "2030-06-01".into(),
            },
        )
        .unwrap();
        ctx.store.saving_goals()[0].id.clone()
    }

    #[test]
    fn test_default_contribution_saturates_progress() {
        let (mut ctx, _temp) = test_context();
        let id = add_goal(&mut ctx);

        for _ in 0..6 {
            handle_goal_command(
                &mut ctx,
                GoalCommands::Contribute {
                    id: id.to_string(),
                    amount: None,
                },
            )
            .unwrap();
        }

        let saved = ctx.storage.load().unwrap();
        let goal = saved.saving_goal(&id).unwrap();
        assert_eq!(goal.current_amount, Money::from_cents(60_000));
        assert_eq!(goal.progress_percent(), 100.0);
    }

    #[test]
    fn test_contribute_rejects_zero_and_unknown() {
        let (mut ctx, _temp) = test_context();
        let id = add_goal(&mut ctx);

        let err = handle_goal_command(
            &mut ctx,
            GoalCommands::Contribute {
                id: id.to_string(),
                amount: Some("0".into()),
            },
        )
        .unwrap_err();
        assert!(err.is_validation());

        let err = handle_goal_command(
            &mut ctx,
            GoalCommands::Contribute {
                id: "goal-missing".into(),
                amount: Some("10".into()),
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete() {
        let (mut ctx, _temp) = test_context();
        let id = add_goal(&mut ctx);
        handle_goal_command(&mut ctx, GoalCommands::Delete { id: id.to_string() }).unwrap();
        assert!(ctx.storage.load().unwrap().saving_goals().is_empty());
    }
}
