//! CLI command handlers
//!
//! Bridges clap argument parsing with the store and views. Each invocation
//! loads the saved store, applies at most one action, saves, and prints the
//! result followed by any notifications.

pub mod budget;
pub mod dashboard;
pub mod export;
pub mod goal;
pub mod session;
pub mod settings;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use dashboard::{handle_dashboard_command, DashboardArgs};
pub use export::{handle_export_command, ExportArgs};
pub use goal::{handle_goal_command, GoalCommands};
pub use session::{handle_login_command, handle_logout_command, handle_whoami_command, LoginArgs};
pub use settings::{handle_settings_command, SettingsCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{FinancePaths, Settings};
use crate::error::{FinanceError, FinanceResult};
use crate::models::Currency;
use crate::notify::{Notification, NotificationQueue};
use crate::session::{LocalIdentity, SessionGate, UserProfile};
use crate::storage::Storage;
use crate::store::FinanceStore;
use crate::views::BudgetStatus;

/// Everything a command handler works with
pub struct Context {
    pub storage: Storage,
    pub store: FinanceStore,
    pub settings: Settings,
    pub identity: LocalIdentity,
    audit: AuditLogger,
    notifications: NotificationQueue,
}

impl Context {
    /// Load settings-derived state and the saved store
    pub fn open(paths: FinancePaths, settings: Settings) -> FinanceResult<Self> {
        let audit = AuditLogger::new(paths.audit_log());
        let storage = Storage::new(paths)?;
        let store = storage.load()?;
        let notifications = NotificationQueue::new(store.preferences().notifications);
        let identity = LocalIdentity::from_settings(&settings);

        Ok(Self {
            storage,
            store,
            settings,
            identity,
            audit,
            notifications,
        })
    }

    pub fn paths(&self) -> &FinancePaths {
        self.storage.paths()
    }

    pub fn currency(&self) -> Currency {
        self.store.preferences().currency
    }

    pub fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// The signed-in profile, or an error telling the user to log in
    pub fn require_user(&self) -> FinanceResult<UserProfile> {
        match SessionGate::evaluate(&self.identity) {
            SessionGate::Ready(profile) => Ok(profile),
            SessionGate::Loading | SessionGate::LoginRequired => Err(FinanceError::Config(
                "Not logged in. Run `fintrack login <name>` first".into(),
            )),
        }
    }

    /// Persist the store and append the audit entry for the change
    pub fn commit(&mut self, entry: AuditEntry) -> FinanceResult<()> {
        self.storage.save(&self.store)?;
        self.audit.append(&entry)
    }

    /// Persist the session profile into the settings file
    pub fn save_identity(&mut self) -> FinanceResult<()> {
        self.identity.store_in(&mut self.settings);
        self.settings.save(self.paths())
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Queue a warning when total spending is near or over the budget
    pub fn check_budget_status(&mut self) {
        let status = BudgetStatus::evaluate(&self.store, self.settings.budget_warning_percent);
        if let Some(banner) = status.banner() {
            self.notify(Notification::warning(banner));
        }
    }

    /// Print queued notifications; errors go to stderr
    pub fn flush_notifications(&mut self) {
        for notification in self.notifications.drain() {
            if notification.is_error() {
                eprintln!("{}", notification);
            } else {
                println!("{}", notification);
            }
        }
    }
}
