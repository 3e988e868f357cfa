//! Settings CLI commands

use clap::builder::BoolishValueParser;
use clap::Subcommand;

use super::Context;
use crate::audit::{AuditEntry, EntityType};
use crate::display::format_settings;
use crate::error::{FinanceError, FinanceResult};
use crate::models::Currency;
use crate::notify::{Notification, NotificationQueue};
use crate::views::{SettingsAction, SettingsView};

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current preferences
    Show,
    /// Toggle dark mode
    DarkMode,
    /// Select the display currency (USD, EUR, GBP, JPY)
    Currency { currency: Currency },
    /// Turn notifications on or off
    Notifications {
        #[arg(value_parser = BoolishValueParser::new())]
        enabled: bool,
    },
    /// Delete all transactions, goals and budgets
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

/// Handle a settings command
pub fn handle_settings_command(ctx: &mut Context, cmd: SettingsCommands) -> FinanceResult<()> {
    let action = match cmd {
        SettingsCommands::Show => {
            print!("{}", format_settings(&SettingsView::build(&ctx.store)));
            return Ok(());
        }
        SettingsCommands::DarkMode => SettingsAction::ToggleDarkMode,
        SettingsCommands::Currency { currency } => SettingsAction::SetCurrency(currency),
        SettingsCommands::Notifications { enabled } => SettingsAction::SetNotifications(enabled),
        SettingsCommands::Clear { yes } => {
            if !yes {
                return Err(FinanceError::Validation(
                    "Clearing deletes all transactions, goals and budgets. Re-run with --yes to confirm"
                        .into(),
                ));
            }
            SettingsAction::ClearAllData
        }
    };

    apply_action(ctx, action)
}

fn apply_action(ctx: &mut Context, action: SettingsAction) -> FinanceResult<()> {
    let entry = if action.is_destructive() {
        let before = ctx.store.clone();
        action.apply(&mut ctx.store);
        AuditEntry::delete(EntityType::Store, "all", None, &before)
            .with_summary("cleared all financial data")
    } else {
        let before = ctx.store.preferences().clone();
        action.apply(&mut ctx.store);
        AuditEntry::update(
            EntityType::Preferences,
            "preferences",
            None,
            &before,
            ctx.store.preferences(),
            None,
        )
    };
    ctx.commit(entry)?;

    if let SettingsAction::SetNotifications(enabled) = action {
        ctx.notifications = NotificationQueue::new(enabled);
    }
    let message = action.confirmation(ctx.store.preferences());
    ctx.notify(Notification::success(message));
    Ok(())
}
